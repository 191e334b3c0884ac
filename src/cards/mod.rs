//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardKey`: Stable ASCII key derived from a card title
//! - `CardDefinition`: Static card data and `{category, subCategory, element}` taxonomy
//! - `CardInstance`: Runtime card state (current stats after buffs and damage)
//! - `Catalog`: Ordered deck list with key lookup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{generated_soldier, Catalog};
pub use definition::{CardDefinition, CardKey, Category, Element, SubCategory};
pub use instance::{CardInstance, Stat};
