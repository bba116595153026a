pub mod month;
pub mod responses;
