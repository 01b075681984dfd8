//! Internal domain model for the Compass director.
//!
//! These are the shapes the business layer works with. They sit between the
//! persistence rows owned by `compass-director` and the GraphQL shapes in
//! [`crate::graphql`]. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`.

mod api;
mod auth;
mod document;
mod event;
mod fetch_request;
mod package;
mod scenario_assignment;
mod version;

pub use api::{ApiDefinitionInput, ApiSpecInput, ApiSpecType};
pub use auth::{
    Auth, AuthInput, BasicCredentialData, BasicCredentialDataInput, CredentialData,
    CredentialDataInput, CredentialRequestAuth, CredentialRequestAuthInput,
    CsrfTokenCredentialRequestAuth, CsrfTokenCredentialRequestAuthInput, MultiValueMap,
    OAuthCredentialData, OAuthCredentialDataInput,
};
pub use document::{DocumentFormat, DocumentInput};
pub use event::{EventDefinitionInput, EventSpecInput, EventSpecType};
pub use fetch_request::{FetchMode, FetchRequestInput, SpecFormat};
pub use package::{Package, PackageCreateInput, PackageUpdateInput};
pub use scenario_assignment::{AutomaticScenarioAssignment, LabelSelector};
pub use version::VersionInput;
