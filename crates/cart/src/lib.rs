//! Cart module.
//!
//! The cart is the ordered list of scanned line items shared by every request.
//! Its total is always recomputed from the items and never stored; appends
//! that would overflow it are refused.

pub mod line_item;
pub mod store;

pub use line_item::LineItem;
pub use store::{CartSnapshot, CartStore};
