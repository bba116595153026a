pub mod cashback;
pub mod layout;
