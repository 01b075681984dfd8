//! Automatic scenario assignments: label selector to scenario, per tenant.

mod converter;
mod entity;
mod repository;

pub use converter::{Converter, EntityConverter};
pub use entity::Entity;
pub use repository::Repository;
