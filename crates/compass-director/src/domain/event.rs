//! Event definition input conversion.

use compass_core::{graphql, model};

use super::auth::AuthConverter;
use super::{fetch_request, version};
use crate::error::ConvertError;

pub trait EventConverter: Send + Sync {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::EventDefinitionInput],
    ) -> Result<Vec<model::EventDefinitionInput>, ConvertError>;
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
        input: &graphql::EventDefinitionInput,
    ) -> Result<model::EventDefinitionInput, ConvertError> {
        let spec = match &input.spec {
            Some(spec) => Some(model::EventSpecInput {
                data: spec.data.clone(),
                spec_type: spec.spec_type,
                format: spec.format,
                fetch_request: self
                    .fetch_request
                    .input_from_graphql(spec.fetch_request.as_ref())
                    .map_err(|e| e.wrap("while converting FetchRequest for event spec"))?,
            }),
            None => None,
        };

        Ok(model::EventDefinitionInput {
            name: input.name.clone(),
            description: input.description.clone(),
            spec,
            group: input.group.clone(),
            version: version::input_from_graphql(input.version.as_ref()),
        })
    }
}

impl<A: AuthConverter> EventConverter for Converter<A> {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::EventDefinitionInput],
    ) -> Result<Vec<model::EventDefinitionInput>, ConvertError> {
        inputs.iter().map(|i| self.input_from_graphql(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth;

    #[test]
    fn carries_fetch_request_auth() {
        let conv = Converter::new(fetch_request::Converter::new(auth::Converter));
        let input = graphql::EventDefinitionInput {
            name: "order-created".into(),
            spec: Some(graphql::EventSpecInput {
                data: None,
                spec_type: graphql::EventSpecType::AsyncApi,
                format: graphql::SpecFormat::Json,
                fetch_request: Some(graphql::FetchRequestInput {
                    url: "https://events.example.com/spec".into(),
                    auth: Some(graphql::AuthInput {
                        credential: Some(graphql::CredentialDataInput {
                            basic: Some(graphql::BasicCredentialDataInput {
                                username: "u".into(),
                                password: "p".into(),
                            }),
                            oauth: None,
                        }),
                        ..Default::default()
                    }),
                    mode: None,
                    filter: None,
                }),
            }),
            ..Default::default()
        };

        let out = conv.multiple_input_from_graphql(&[input]).unwrap();
        assert_eq!(out.len(), 1);
        let fetch_request = out[0].spec.as_ref().unwrap().fetch_request.as_ref().unwrap();
        assert_eq!(fetch_request.url, "https://events.example.com/spec");
        assert!(fetch_request.auth.as_ref().unwrap().credential.is_some());
    }
}
