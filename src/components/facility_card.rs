use leptos::*;

use sf_boundary::Facility;
use sf_core::format;

use crate::Page;

#[component]
pub fn FacilityCard(facility: Facility) -> impl IntoView {
    let Facility {
        facility_id,
        name,
        address,
        phone_number,
        main_sport,
        aver_rating,
        review_count,
        is_favorite,
        ..
    } = facility;

    view! {
      <a
        href=Page::Facility.item(facility_id)
        class="block bg-white rounded-2xl shadow-sm hover:shadow-xl transition-all border-2 border-[#E1E8ED] hover:border-[#16E0B4] p-6"
      >
        <div class="flex items-start justify-between mb-4">
          <div class="inline-block px-3 py-1 rounded-full text-sm bg-[#16E0B4]/10 text-[#16E0B4]">
            { main_sport }
          </div>
          <div class="flex items-center gap-3">
            <div class="flex items-center gap-1">
              <span class="text-[#FFA726] text-lg">"★"</span>
              <span class="font-semibold">{ format::rating(aver_rating) }</span>
              <span class="text-[#8B9DA9]">"(" { review_count } ")"</span>
            </div>
            { is_favorite.then(|| view! { <span class="text-[#FF6B6B]" title="즐겨찾기">"♥"</span> }) }
          </div>
        </div>
        <h3 class="mb-2 font-bold">{ name }</h3>
        <p class="text-[#8B9DA9] mb-2">{ address }</p>
        { phone_number.map(|phone| view! { <p class="text-sm text-[#8B9DA9]">{ phone }</p> }) }
      </a>
    }
}
