//! Document input conversion.

use compass_core::{graphql, model};

use super::auth::AuthConverter;
use super::fetch_request;
use crate::error::ConvertError;

pub trait DocumentConverter: Send + Sync {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::DocumentInput],
    ) -> Result<Vec<model::DocumentInput>, ConvertError>;
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
        input: &graphql::DocumentInput,
    ) -> Result<model::DocumentInput, ConvertError> {
        let fetch_request = self
            .fetch_request
            .input_from_graphql(input.fetch_request.as_ref())
            .map_err(|e| e.wrap("while converting FetchRequest for document"))?;

        Ok(model::DocumentInput {
            title: input.title.clone(),
            display_name: input.display_name.clone(),
            description: input.description.clone(),
            format: input.format,
            kind: input.kind.clone(),
            data: input.data.clone(),
            fetch_request,
        })
    }
}

impl<A: AuthConverter> DocumentConverter for Converter<A> {
    fn multiple_input_from_graphql(
        &self,
        inputs: &[graphql::DocumentInput],
    ) -> Result<Vec<model::DocumentInput>, ConvertError> {
        inputs.iter().map(|i| self.input_from_graphql(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth;
    use compass_core::errors::CoreError;

    fn converter() -> Converter<auth::Converter> {
        Converter::new(fetch_request::Converter::new(auth::Converter))
    }

    #[test]
    fn maps_fields_in_order() {
        let inputs = [
            graphql::DocumentInput {
                title: "Guide".into(),
                display_name: "User guide".into(),
                kind: Some("manual".into()),
                data: Some("# Guide".into()),
                ..Default::default()
            },
            graphql::DocumentInput {
                title: "FAQ".into(),
                ..Default::default()
            },
        ];

        let out = converter().multiple_input_from_graphql(&inputs).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].display_name, "User guide");
        assert_eq!(out[0].kind.as_deref(), Some("manual"));
        assert_eq!(out[0].data.as_deref(), Some("# Guide"));
        assert!(out[0].fetch_request.is_none());
        assert_eq!(out[1].title, "FAQ");
    }

    #[test]
    fn blank_fetch_url_names_document() {
        let input = graphql::DocumentInput {
            title: "Guide".into(),
            fetch_request: Some(graphql::FetchRequestInput::default()),
            ..Default::default()
        };

        let err = converter().multiple_input_from_graphql(&[input]).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("while converting FetchRequest for document:")
        );
        assert!(matches!(
            err.root_cause(),
            ConvertError::Core(CoreError::Validation(_))
        ));
    }
}
