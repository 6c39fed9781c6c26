mod confirm_dialog;
mod course_list;
mod facility_card;
mod facility_map;
mod filter_bar;
mod navbar;
mod pagination;
mod review_section;
mod toast;

pub use self::{
    confirm_dialog::*, course_list::*, facility_card::*, facility_map::*, filter_bar::*,
    navbar::*, pagination::*, review_section::*, toast::*,
};
