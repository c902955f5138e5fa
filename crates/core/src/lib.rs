//! `beanbags-core`: domain building blocks for the bean bag store.
//!
//! Pure primitives only: identifiers, the error taxonomy and marker traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use id::{BeanBagId, ID_LEN};
pub use value_object::ValueObject;
