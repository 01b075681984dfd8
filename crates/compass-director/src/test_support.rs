//! Shared test utilities for compass-director unit tests.

#[cfg(test)]
pub(crate) mod fakes {
    use compass_core::errors::CoreError;
    use compass_core::model::Package;
    use compass_core::{graphql, model};

    use crate::domain::api::ApiConverter;
    use crate::domain::auth::AuthConverter;
    use crate::domain::document::DocumentConverter;
    use crate::domain::event::EventConverter;
    use crate::domain::package::{self, DefaultConverter, Entity, EntityConverter};
    use crate::error::ConvertError;

    /// Which collaborator should fail.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Failing {
        Auth,
        Api,
        Event,
        Document,
    }

    /// Collaborator that fails when asked to act as `Failing` and otherwise
    /// returns empty results.
    #[derive(Debug, Clone, Copy)]
    pub struct FailingCollaborator(pub Failing);

    impl FailingCollaborator {
        fn check(self, kind: Failing) -> Result<(), ConvertError> {
            if self.0 == kind {
                return Err(CoreError::validation(format!("{kind:?} converter failed")).into());
            }
            Ok(())
        }
    }

    impl AuthConverter for FailingCollaborator {
        fn to_graphql(&self, auth: Option<&model::Auth>) -> Result<Option<graphql::Auth>, ConvertError> {
            self.check(Failing::Auth)?;
            crate::domain::auth::Converter.to_graphql(auth)
        }

        fn input_from_graphql(
            &self,
            input: Option<&graphql::AuthInput>,
        ) -> Result<Option<model::AuthInput>, ConvertError> {
            self.check(Failing::Auth)?;
            crate::domain::auth::Converter.input_from_graphql(input)
        }
    }

    impl ApiConverter for FailingCollaborator {
        fn multiple_input_from_graphql(
            &self,
            _inputs: &[graphql::ApiDefinitionInput],
        ) -> Result<Vec<model::ApiDefinitionInput>, ConvertError> {
            self.check(Failing::Api)?;
            Ok(Vec::new())
        }
    }

    impl EventConverter for FailingCollaborator {
        fn multiple_input_from_graphql(
            &self,
            _inputs: &[graphql::EventDefinitionInput],
        ) -> Result<Vec<model::EventDefinitionInput>, ConvertError> {
            self.check(Failing::Event)?;
            Ok(Vec::new())
        }
    }

    impl DocumentConverter for FailingCollaborator {
        fn multiple_input_from_graphql(
            &self,
            _inputs: &[graphql::DocumentInput],
        ) -> Result<Vec<model::DocumentInput>, ConvertError> {
            self.check(Failing::Document)?;
            Ok(Vec::new())
        }
    }

    pub type FailingConverter = package::Converter<
        FailingCollaborator,
        FailingCollaborator,
        FailingCollaborator,
        FailingCollaborator,
    >;

    pub const fn failing_converter(failing: Failing) -> FailingConverter {
        let c = FailingCollaborator(failing);
        package::Converter::new(c, c, c, c)
    }

    /// Package row converter that always yields the same row.
    pub struct FixedEntity(pub Option<Entity>);

    impl EntityConverter for FixedEntity {
        fn to_entity(&self, _model: Option<&Package>) -> Result<Option<Entity>, ConvertError> {
            Ok(self.0.clone())
        }

        fn from_entity(&self, entity: Option<&Entity>) -> Result<Package, ConvertError> {
            DefaultConverter::default().from_entity(entity)
        }
    }
}
