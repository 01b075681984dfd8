//! Package aggregate: persistence row, three-way converter, and repository.

mod converter;
mod entity;
mod repository;

pub use converter::{Converter, DefaultConverter};
pub use entity::Entity;
pub use repository::{EntityConverter, Repository};
