//! Resource types returned by the payments API.
//!
//! Sibling resources (charges, customers, SKUs) are minimal projections: the
//! ID plus the fields an order consumer reads.

pub mod charge;
pub mod currency;
pub mod customer;
pub mod expandable;
pub mod id;
pub mod list;
pub mod order;
pub mod order_item;
pub mod sku;

pub use charge::Charge;
pub use currency::Currency;
pub use customer::Customer;
pub use expandable::{Expandable, Object};
pub use id::*;
pub use list::List;
pub use order::*;
pub use order_item::{OrderItem, OrderItemParent, OrderItemParentType, OrderItemType};
pub use sku::{Sku, SkuInventory};
