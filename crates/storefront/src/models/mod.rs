//! Domain models for the storefront.
//!
//! Each entity is a structured record that serializes to the JSON shape
//! stored in the document store and returned by the API. Unknown fields in
//! incoming JSON are ignored.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod settings;
pub mod timestamp;
pub mod user;

pub use cart::{Cart, CartItem};
pub use catalog::{Category, CategoryInput, Product, ProductInput};
pub use order::{NewOrder, Order, OrderItem};
pub use settings::SiteSettings;
pub use user::{User, UserRecord};
