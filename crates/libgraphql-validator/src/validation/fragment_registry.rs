use crate::ast;
use indexmap::IndexMap;

/// Fragment definitions that fragment spreads may refer to, keyed by name.
///
/// Definitions are borrowed from the document(s) they were read from. When
/// the same name is registered more than once the first definition is kept;
/// reporting the duplicate is left to a dedicated rule.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry<'doc> {
    fragments: IndexMap<&'doc str, &'doc ast::operation::FragmentDefinition>,
}
impl<'doc> FragmentRegistry<'doc> {
    /// Register every fragment defined in `document`.
    pub fn from_document(document: &'doc ast::operation::Document) -> Self {
        let mut registry = Self::new();
        registry.add_document(document);
        registry
    }

    pub fn add_document(&mut self, document: &'doc ast::operation::Document) {
        for def in &document.definitions {
            if let ast::operation::Definition::Fragment(fragment) = def {
                self.add_fragment(fragment);
            }
        }
    }

    /// Returns `false` (and keeps the existing definition) if a fragment with
    /// the same name is already registered.
    pub fn add_fragment(
        &mut self,
        fragment: &'doc ast::operation::FragmentDefinition,
    ) -> bool {
        if self.fragments.contains_key(fragment.name.as_str()) {
            log::trace!(
                "Ignoring duplicate definition of the `{}` fragment.",
                fragment.name,
            );
            return false;
        }
        self.fragments.insert(fragment.name.as_str(), fragment);
        true
    }

    pub fn get(
        &self,
        fragment_name: &str,
    ) -> Option<&'doc ast::operation::FragmentDefinition> {
        self.fragments.get(fragment_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &'doc str> + '_ {
        self.fragments.keys().copied()
    }

    pub fn new() -> Self {
        Self {
            fragments: IndexMap::new(),
        }
    }
}
