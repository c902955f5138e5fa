//! Bean bag inventory.
//!
//! In-memory stock and sales tracking for bean bag stock-keeping units,
//! implemented as deterministic logic with no IO.

pub mod command;
pub mod record;
pub mod shared;
pub mod store;

pub use command::AddBeanBags;
pub use record::{BeanBag, Descriptor, StockPeriod};
pub use shared::SharedBeanBagStore;
pub use store::BeanBagStore;

pub use beanbags_core::{BeanBagId, StoreError, StoreResult};
