mod category_breakdown;
mod education;
pub mod layout;
mod missed_opportunity;
mod month_picker;
mod month_selector;
pub mod picker;
mod summary_card;
mod view;

pub use view::CashbackView;
