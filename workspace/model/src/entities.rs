//! This file serves as the root for all SeaORM entity modules.
//! A cashback ledger only needs two tables: the categories the card
//! rewards and the purchases booked against them.

pub mod cashback_category;
pub mod purchase;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::cashback_category::Entity as CashbackCategory;
    pub use super::purchase::Entity as Purchase;
}
