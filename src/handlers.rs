pub mod cashback;
pub mod categories;
pub mod health;
pub mod purchases;
