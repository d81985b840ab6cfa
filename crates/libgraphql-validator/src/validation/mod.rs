//! Schema-aware validation of operation documents.
//!
//! A single depth-first [`validate`] pass walks a document while a
//! [`TypeInfo`] tracks the type each selection is made against. Every
//! registered [`ValidationRule`] is notified at each node (in registration
//! order) and reports problems as [`Diagnostic`]s through the shared
//! [`ValidationContext`].

mod diagnostic;
mod fragment_registry;
pub mod rules;
mod type_info;
mod validation_context;
mod validation_rule;
mod validator;

pub use diagnostic::Diagnostic;
pub use fragment_registry::FragmentRegistry;
pub use type_info::TypeContext;
pub use type_info::TypeInfo;
pub use validation_context::ValidationContext;
pub use validation_rule::ValidationRule;
pub use validator::default_rules;
pub use validator::validate;
pub use validator::validate_with_fragments;
pub use validator::ValidateStrError;
pub use validator::Validator;

#[cfg(test)]
mod tests;
