use leptos::*;

use sf_boundary::{Course, CourseList};
use sf_core::{format, sequence::RequestSequence, usecases};

use crate::{components::*, use_app};

/// The courses a facility offers, page by page.
#[component]
pub fn CourseTable(facility_id: i64) -> impl IntoView {
    let app = use_app();

    let page = RwSignal::new(1_u32);
    let courses = RwSignal::new(None::<Result<CourseList, String>>);
    let selected = RwSignal::new(None::<i64>);
    let requests = store_value(RequestSequence::new());

    let fetch_courses = create_action(move |page: &u32| {
        let page = *page;
        let ticket = requests.with_value(RequestSequence::start);
        async move {
            let result = usecases::facility_courses_page(&app.api(), facility_id, page).await;
            let Some(result) = requests.with_value(|s| s.accept(ticket, result)) else {
                return;
            };
            match result {
                Ok(list) => courses.set(Some(Ok(list))),
                Err(err) => {
                    log::error!("Unable to fetch courses of facility {facility_id}: {err}");
                    courses.set(Some(Err("강좌 정보를 불러올 수 없습니다.".to_owned())));
                }
            }
        }
    });

    create_effect(move |_| {
        selected.set(None);
        fetch_courses.dispatch(page.get());
    });

    let total = Signal::derive(move || {
        courses.with(|c| match c {
            Some(Ok(list)) => list.pagination.total_pages,
            _ => 0,
        })
    });

    move || match courses.get() {
        None => view! { <p class="text-center text-[#8B9DA9] py-8">"강좌 정보를 불러오는 중..."</p> }.into_view(),
        Some(Err(msg)) => view! { <p class="text-center text-[#FF6B6B] py-8">{ msg }</p> }.into_view(),
        Some(Ok(list)) if list.courses.is_empty() => view! {
          <p class="text-center text-[#8B9DA9] py-8">"등록된 강좌가 없습니다."</p>
        }.into_view(),
        Some(Ok(list)) => view! {
          <div class="space-y-3">
            <p class="text-sm text-[#8B9DA9]">
              { format!("총 {}개 강좌", format::thousands(list.pagination.total_count)) }
            </p>
            { list.courses.into_iter().map(|course| view! {
              <CourseRow course selected />
            }).collect_view() }
          </div>
          <PageNav current = page.into() total on_change = move |p| page.set(p) />
        }.into_view(),
    }
}

#[component]
fn CourseRow(course: Course, selected: RwSignal<Option<i64>>) -> impl IntoView {
    let id = course.course_id;
    let is_open = create_memo(move |_| selected.get() == Some(id));
    let Course {
        course_name,
        sport_name,
        price,
        start_date,
        end_date,
        establishment_year,
        establishment_month,
        request_count,
        course_no,
        ..
    } = course;
    let period = match (start_date, end_date) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        (Some(start), None) => format!("{start} ~"),
        (None, Some(end)) => format!("~ {end}"),
        (None, None) => "-".to_owned(),
    };
    let established = match (establishment_year, establishment_month) {
        (Some(year), Some(month)) => format!("{year}.{month}"),
        (Some(year), None) => year,
        _ => "-".to_owned(),
    };

    view! {
      <div class="border-2 border-[#E1E8ED] rounded-xl hover:border-[#16E0B4] transition-colors">
        <button
          class="w-full p-4 flex items-center justify-between text-left"
          on:click = move |_| selected.update(|s| *s = if *s == Some(id) { None } else { Some(id) })
        >
          <div>
            <p class="font-semibold">{ course_name }</p>
            <p class="text-sm text-[#8B9DA9]">{ sport_name }</p>
          </div>
          <span class="text-[#16E0B4] font-bold">{ format::won(price) }</span>
        </button>
        <Show when = move || is_open.get()>
          <dl class="grid grid-cols-2 gap-2 px-4 pb-4 text-sm">
            <dt class="text-[#8B9DA9]">"강좌 번호"</dt><dd>{ course_no.clone() }</dd>
            <dt class="text-[#8B9DA9]">"운영 기간"</dt><dd>{ period.clone() }</dd>
            <dt class="text-[#8B9DA9]">"개설 연월"</dt><dd>{ established.clone() }</dd>
            <dt class="text-[#8B9DA9]">"신청 인원"</dt><dd>{ format!("{}명", format::thousands(request_count)) }</dd>
          </dl>
        </Show>
      </div>
    }
}
