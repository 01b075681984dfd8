//! Fetch request input conversion, shared by API, event, and document specs.

use compass_core::errors::CoreError;
use compass_core::{graphql, model};

use super::auth::AuthConverter;
use crate::error::ConvertError;

#[derive(Debug, Clone, Default)]
pub struct Converter<A> {
    auth: A,
}

impl<A: AuthConverter> Converter<A> {
    pub const fn new(auth: A) -> Self {
        Self { auth }
    }

    /// `None` converts to `None`. The URL must not be blank.
    pub fn input_from_graphql(
        &self,
        input: Option<&graphql::FetchRequestInput>,
    ) -> Result<Option<model::FetchRequestInput>, ConvertError> {
        let Some(input) = input else {
            return Ok(None);
        };

        if input.url.trim().is_empty() {
            return Err(CoreError::validation("fetch request URL must not be empty").into());
        }

        let auth = self
            .auth
            .input_from_graphql(input.auth.as_ref())
            .map_err(|e| e.wrap("while converting FetchRequest auth"))?;

        Ok(Some(model::FetchRequestInput {
            url: input.url.clone(),
            auth,
            mode: input.mode,
            filter: input.filter.clone(),
        }))
    }
}
