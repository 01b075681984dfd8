use compass_core::graphql::{self, JsonSchemaString};
use compass_core::model::{self, Auth, Package};

use super::entity::Entity;
use crate::domain::api::{self, ApiConverter};
use crate::domain::auth::{self, AuthConverter};
use crate::domain::document::{self, DocumentConverter};
use crate::domain::event::{self, EventConverter};
use crate::domain::fetch_request;
use crate::error::ConvertError;
use crate::nullable::NullableString;

/// Converts a [`Package`] between its persistence row, the domain model,
/// and the GraphQL shape.
///
/// Stateless: every call depends only on its arguments and the injected
/// collaborators, so the converter is `Send + Sync` whenever they are.
#[derive(Debug, Clone)]
pub struct Converter<A, P, E, D> {
    auth: A,
    api: P,
    event: E,
    document: D,
}

/// The converter wired with the built-in collaborator converters.
pub type DefaultConverter = Converter<
    auth::Converter,
    api::Converter<auth::Converter>,
    event::Converter<auth::Converter>,
    document::Converter<auth::Converter>,
>;

impl Default for DefaultConverter {
    fn default() -> Self {
        let fetch_request = fetch_request::Converter::new(auth::Converter);
        Self::new(
            auth::Converter,
            api::Converter::new(fetch_request.clone()),
            event::Converter::new(fetch_request.clone()),
            document::Converter::new(fetch_request),
        )
    }
}

impl<A, P, E, D> Converter<A, P, E, D>
where
    A: AuthConverter,
    P: ApiConverter,
    E: EventConverter,
    D: DocumentConverter,
{
    pub const fn new(auth: A, api: P, event: E, document: D) -> Self {
        Self {
            auth,
            api,
            event,
            document,
        }
    }

    /// A missing model converts to a missing row without error.
    pub fn to_entity(&self, model: Option<&Package>) -> Result<Option<Entity>, ConvertError> {
        let Some(model) = model else {
            return Ok(None);
        };

        let default_instance_auth = marshal_default_instance_auth(model.default_instance_auth.as_ref())?;

        Ok(Some(Entity {
            id: model.id.clone(),
            tenant_id: model.tenant_id.clone(),
            application_id: model.application_id.clone(),
            name: model.name.clone(),
            description: NullableString::new(model.description.as_deref()),
            default_instance_auth: NullableString::from(default_instance_auth),
            instance_auth_request_json_schema: NullableString::new(
                model.instance_auth_request_input_schema.as_deref(),
            ),
        }))
    }

    pub fn from_entity(&self, entity: Option<&Entity>) -> Result<Package, ConvertError> {
        let Some(entity) = entity else {
            return Err(ConvertError::nil_input("the Package entity is nil"));
        };

        let default_instance_auth = unmarshal_default_instance_auth(&entity.default_instance_auth)?;

        Ok(Package {
            id: entity.id.clone(),
            tenant_id: entity.tenant_id.clone(),
            application_id: entity.application_id.clone(),
            name: entity.name.clone(),
            description: entity.description.to_option(),
            instance_auth_request_input_schema: entity.instance_auth_request_json_schema.to_option(),
            default_instance_auth,
        })
    }

    pub fn to_graphql(&self, model: Option<&Package>) -> Result<graphql::Package, ConvertError> {
        let Some(model) = model else {
            return Err(ConvertError::nil_input("the model Package is nil"));
        };

        let auth = self
            .auth
            .to_graphql(model.default_instance_auth.as_ref())
            .map_err(|e| e.wrap("while converting DefaultInstanceAuth to GraphQL"))?;

        Ok(graphql::Package {
            id: model.id.clone(),
            name: model.name.clone(),
            description: model.description.clone(),
            instance_auth_request_input_schema: model
                .instance_auth_request_input_schema
                .clone()
                .map(JsonSchemaString),
            default_instance_auth: auth,
        })
    }

    /// Skips `None` entries and stops at the first failure.
    pub fn multiple_to_graphql<'a, I>(&self, models: I) -> Result<Vec<graphql::Package>, ConvertError>
    where
        I: IntoIterator<Item = Option<&'a Package>>,
    {
        models
            .into_iter()
            .flatten()
            .map(|pkg| {
                self.to_graphql(Some(pkg))
                    .map_err(|e| e.wrap("while converting Package to GraphQL"))
            })
            .collect()
    }

    pub fn create_input_from_graphql(
        &self,
        input: &graphql::PackageCreateInput,
    ) -> Result<model::PackageCreateInput, ConvertError> {
        let auth = self
            .auth
            .input_from_graphql(input.default_instance_auth.as_ref())
            .map_err(|e| e.wrap("while converting DefaultInstanceAuth input"))?;

        let api_definitions = self
            .api
            .multiple_input_from_graphql(&input.api_definitions)
            .map_err(|e| e.wrap("while converting APIDefinitions input"))?;

        let documents = self
            .document
            .multiple_input_from_graphql(&input.documents)
            .map_err(|e| e.wrap("while converting Documents input"))?;

        let event_definitions = self
            .event
            .multiple_input_from_graphql(&input.event_definitions)
            .map_err(|e| e.wrap("while converting EventDefinitions input"))?;

        Ok(model::PackageCreateInput {
            name: input.name.clone(),
            description: input.description.clone(),
            instance_auth_request_input_schema: input
                .instance_auth_request_input_schema
                .clone()
                .map(String::from),
            default_instance_auth: auth,
            api_definitions,
            event_definitions,
            documents,
        })
    }

    /// Skips `None` entries and stops at the first failure, returned as is.
    pub fn multiple_create_input_from_graphql<'a, I>(
        &self,
        inputs: I,
    ) -> Result<Vec<model::PackageCreateInput>, ConvertError>
    where
        I: IntoIterator<Item = Option<&'a graphql::PackageCreateInput>>,
    {
        inputs
            .into_iter()
            .flatten()
            .map(|input| self.create_input_from_graphql(input))
            .collect()
    }

    pub fn update_input_from_graphql(
        &self,
        input: &graphql::PackageUpdateInput,
    ) -> Result<model::PackageUpdateInput, ConvertError> {
        let auth = self
            .auth
            .input_from_graphql(input.default_instance_auth.as_ref())
            .map_err(|e| e.wrap("while converting DefaultInstanceAuth from GraphQL"))?;

        Ok(model::PackageUpdateInput {
            name: input.name.clone(),
            description: input.description.clone(),
            instance_auth_request_input_schema: input
                .instance_auth_request_input_schema
                .clone()
                .map(String::from),
            default_instance_auth: auth,
        })
    }
}

fn marshal_default_instance_auth(auth: Option<&Auth>) -> Result<Option<String>, ConvertError> {
    auth.map(|auth| {
        serde_json::to_string(auth).map_err(|error| ConvertError::Json {
            context: "while marshaling default auth",
            error,
        })
    })
    .transpose()
}

/// NULL and empty columns both mean "no auth".
fn unmarshal_default_instance_auth(column: &NullableString) -> Result<Option<Auth>, ConvertError> {
    match column.as_deref() {
        Some(json) if !json.is_empty() => serde_json::from_str(json)
            .map(Some)
            .map_err(|error| ConvertError::Json {
                context: "while unmarshalling default instance auth",
                error,
            }),
        _ => Ok(None),
    }
}
