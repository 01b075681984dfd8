//! Version input conversion.

use compass_core::{graphql, model};

#[must_use]
pub fn input_from_graphql(input: Option<&graphql::VersionInput>) -> Option<model::VersionInput> {
    input.map(|v| model::VersionInput {
        value: v.value.clone(),
        deprecated: v.deprecated,
        deprecated_since: v.deprecated_since.clone(),
        for_removal: v.for_removal,
    })
}
