//! # compass-core
//!
//! Domain model, GraphQL shapes, and error types for the Compass director.
//!
//! This crate provides the types shared across all Compass crates:
//! - Internal domain model (packages, auth, API/event/document inputs,
//!   automatic scenario assignments)
//! - GraphQL-facing representations of the same aggregates
//! - Cross-cutting error types

pub mod errors;
pub mod graphql;
pub mod model;
