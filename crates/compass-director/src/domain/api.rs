//! API definition input conversion.

use compass_core::{graphql, model};

use super::auth::AuthConverter;
use super::{fetch_request, version};
use crate::error::ConvertError;

pub trait ApiConverter: Send + Sync {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::ApiDefinitionInput],
    ) -> Result<Vec<model::ApiDefinitionInput>, ConvertError>;
}

#[derive(Debug, Clone, Default)]
pub struct Converter<A> {
    fetch_request: fetch_request::Converter<A>,
}

impl<A: AuthConverter> Converter<A> {
    pub const fn new(fetch_request: fetch_request::Converter<A>) -> Self {
        Self { fetch_request }
    }

    pub fn input_from_graphql(
        &self,
        input: &graphql::ApiDefinitionInput,
    ) -> Result<model::ApiDefinitionInput, ConvertError> {
        let spec = match &input.spec {
            Some(spec) => Some(model::ApiSpecInput {
                data: spec.data.clone(),
                spec_type: spec.spec_type,
                format: spec.format,
                fetch_request: self
                    .fetch_request
                    .input_from_graphql(spec.fetch_request.as_ref())
                    .map_err(|e| e.wrap("while converting FetchRequest for API spec"))?,
            }),
            None => None,
        };

        Ok(model::ApiDefinitionInput {
            name: input.name.clone(),
            description: input.description.clone(),
            target_url: input.target_url.clone(),
            group: input.group.clone(),
            spec,
            version: version::input_from_graphql(input.version.as_ref()),
        })
    }
}

impl<A: AuthConverter> ApiConverter for Converter<A> {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::ApiDefinitionInput],
    ) -> Result<Vec<model::ApiDefinitionInput>, ConvertError> {
        inputs.iter().map(|i| self.input_from_graphql(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth;
    use pretty_assertions::assert_eq;

    fn converter() -> Converter<auth::Converter> {
        Converter::new(fetch_request::Converter::new(auth::Converter))
    }

    #[test]
    fn maps_all_fields() {
        let input = graphql::ApiDefinitionInput {
            name: "orders".into(),
            description: Some("Orders API".into()),
            target_url: "https://orders.example.com".into(),
            group: Some("commerce".into()),
            spec: Some(graphql::ApiSpecInput {
                data: Some("openapi: 3.0.0".into()),
                spec_type: graphql::ApiSpecType::OpenApi,
                format: graphql::SpecFormat::Yaml,
                fetch_request: None,
            }),
            version: Some(graphql::VersionInput {
                value: "v2".into(),
                deprecated: Some(true),
                deprecated_since: Some("v1".into()),
                for_removal: Some(false),
            }),
        };

        let out = converter().input_from_graphql(&input).unwrap();
        assert_eq!(
            out,
            model::ApiDefinitionInput {
                name: "orders".into(),
                description: Some("Orders API".into()),
                target_url: "https://orders.example.com".into(),
                group: Some("commerce".into()),
                spec: Some(model::ApiSpecInput {
                    data: Some("openapi: 3.0.0".into()),
                    spec_type: model::ApiSpecType::OpenApi,
                    format: model::SpecFormat::Yaml,
                    fetch_request: None,
                }),
                version: Some(model::VersionInput {
                    value: "v2".into(),
                    deprecated: Some(true),
                    deprecated_since: Some("v1".into()),
                    for_removal: Some(false),
                }),
            }
        );
    }

    #[test]
    fn multiple_fails_on_first_bad_fetch_request() {
        let good = graphql::ApiDefinitionInput {
            name: "good".into(),
            ..Default::default()
        };
        let bad = graphql::ApiDefinitionInput {
            name: "bad".into(),
            spec: Some(graphql::ApiSpecInput {
                data: None,
                spec_type: graphql::ApiSpecType::Odata,
                format: graphql::SpecFormat::Xml,
                fetch_request: Some(graphql::FetchRequestInput::default()),
            }),
            ..Default::default()
        };

        let err = converter()
            .multiple_input_from_graphql(&[good, bad])
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("while converting FetchRequest for API spec:")
        );
    }
}
