//! Value types shared by the catalog and the view controller.

pub mod price;
pub mod quantity;

pub use price::{CurrencyCode, Price};
pub use quantity::Quantity;
