//! Director domain modules: converters and repositories per aggregate.

pub mod api;
pub mod auth;
pub mod document;
pub mod event;
pub mod fetch_request;
pub mod package;
pub mod scenario_assignment;
pub mod version;
