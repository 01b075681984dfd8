//! GraphQL-facing representations of Compass aggregates.
//!
//! Field names follow the published GraphQL schema (`camelCase`, with the
//! schema's own acronym spellings such as `targetURL`). Enums are shared with
//! [`crate::model`] because both layers use the same wire values.

mod auth;
mod definitions;
mod package;
mod scalars;

pub use auth::{
    Auth, AuthInput, BasicCredentialData, BasicCredentialDataInput, CredentialData,
    CredentialDataInput, CredentialRequestAuth, CredentialRequestAuthInput,
    CsrfTokenCredentialRequestAuth, CsrfTokenCredentialRequestAuthInput, OAuthCredentialData,
    OAuthCredentialDataInput,
};
pub use definitions::{
    ApiDefinitionInput, ApiSpecInput, DocumentInput, EventDefinitionInput, EventSpecInput,
    FetchRequestInput, VersionInput,
};
pub use package::{Package, PackageCreateInput, PackageUpdateInput};
pub use scalars::{HttpHeaders, JsonSchemaString, QueryParams};

pub use crate::model::{ApiSpecType, DocumentFormat, EventSpecType, FetchMode, SpecFormat};
