use crate::loc;
use std::marker::PhantomData;
use thiserror::Error;

/// A `String`-named reference to some `TResource` that lives inside a
/// separate data-store (`TResource::Source`).
///
/// Schema types refer to each other this way (e.g. an
/// [`ObjectType`](crate::types::ObjectType) refers to the interfaces it
/// implements by name) so that the [`Schema`](crate::schema::Schema) can own
/// every type without self-references. A [`NamedRef`] is resolved with
/// [`NamedRef::deref()`] given the owning source.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: loc::SourceLocation,
}
impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TResource::Source,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference itself was written (not where the referenced
    /// resource was defined).
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Implement this trait for anything that can be looked up by name within
/// some `Source`. This enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + std::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("No definition found for `{0}`")]
    DanglingReference(String),
}
