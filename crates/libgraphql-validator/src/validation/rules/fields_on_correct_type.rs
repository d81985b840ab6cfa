use crate::ast;
use crate::schema::Schema;
use crate::suggestion;
use crate::types::GraphQLType;
use crate::validation::Diagnostic;
use crate::validation::TypeContext;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use thiserror::Error;

const META_FIELD_NAMES: [&str; 3] = ["__schema", "__type", "__typename"];

/// Every field selected against an object, interface or union type must be
/// defined on that type.
///
/// <https://spec.graphql.org/October2021/#sec-Field-Selections>
///
/// Fields selected against an unknown context are not checked. Whatever made
/// the context unknown is reported once, at the outermost offending field, so
/// nested selections below it never produce more diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldsOnCorrectType;
impl FieldsOnCorrectType {
    /// Check a selection of `field_name` against `parent_type`.
    pub fn check_field(
        schema: &Schema,
        parent_type: &GraphQLType,
        field_name: &str,
    ) -> Option<FieldSelectionError> {
        if META_FIELD_NAMES.contains(&field_name) {
            return None;
        }

        let own_fields = match parent_type {
            GraphQLType::Interface(iface) => iface.fields(),
            GraphQLType::Object(obj) => obj.fields(),

            // Unions declare no fields of their own.
            GraphQLType::Union(_) => {
                return Some(Self::abstract_selection_error(
                    schema,
                    parent_type,
                    field_name,
                ).unwrap_or_else(|| FieldSelectionError::InvalidFieldSelection {
                    field_name: field_name.to_string(),
                    type_name: parent_type.name().to_string(),
                    suggested_field_names: vec![],
                }));
            },

            // Selections on leaf types are a different rule's concern.
            GraphQLType::Enum(_)
                | GraphQLType::InputObject(_)
                | GraphQLType::Scalar(_)
                => return None,
        };

        if own_fields.contains_key(field_name) {
            return None;
        }

        if let Some(err) = Self::abstract_selection_error(schema, parent_type, field_name) {
            return Some(err);
        }

        Some(FieldSelectionError::InvalidFieldSelection {
            field_name: field_name.to_string(),
            type_name: parent_type.name().to_string(),
            suggested_field_names: suggestion::suggest(
                field_name,
                own_fields.keys().map(|name| name.as_str()),
                suggestion::MAX_SUGGESTIONS,
            )
            .into_iter()
            .map(|name| name.to_string())
            .collect(),
        })
    }

    /// If `parent_type` is abstract and some of its possible types declare
    /// `field_name`, point at those types.
    fn abstract_selection_error(
        schema: &Schema,
        parent_type: &GraphQLType,
        field_name: &str,
    ) -> Option<FieldSelectionError> {
        let suggested_type_names: Vec<String> = schema
            .possible_types(parent_type)
            .into_iter()
            .filter(|type_| {
                type_.fields().is_some_and(|fields| fields.contains_key(field_name))
            })
            .map(|type_| type_.name().to_string())
            .collect();

        if suggested_type_names.is_empty() {
            return None;
        }

        Some(FieldSelectionError::AmbiguousAbstractSelection {
            field_name: field_name.to_string(),
            type_name: parent_type.name().to_string(),
            suggested_type_names,
        })
    }
}
impl ValidationRule for FieldsOnCorrectType {
    fn name(&self) -> &'static str {
        "FieldsOnCorrectType"
    }

    fn enter_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {
        let TypeContext::Known(parent_type) = ctx.current_type() else {
            return;
        };

        if let Some(err) = Self::check_field(ctx.schema(), parent_type, &field.name) {
            ctx.report(Diagnostic::at_ast_pos(err.to_string(), &field.position));
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldSelectionError {
    #[error(
        "Cannot query field \"{field_name}\" on type \"{type_name}\".{}",
        did_you_mean_field(.suggested_field_names),
    )]
    InvalidFieldSelection {
        field_name: String,
        type_name: String,
        suggested_field_names: Vec<String>,
    },

    #[error(
        "Cannot query field \"{field_name}\" on type \"{type_name}\".{}",
        did_you_mean_inline_fragment(.suggested_type_names),
    )]
    AmbiguousAbstractSelection {
        field_name: String,
        type_name: String,
        suggested_type_names: Vec<String>,
    },
}

fn did_you_mean_field(suggested_field_names: &[String]) -> String {
    if suggested_field_names.is_empty() {
        return String::new();
    }
    format!(
        " Did you mean {}?",
        suggestion::quoted_or_list(suggested_field_names),
    )
}

fn did_you_mean_inline_fragment(suggested_type_names: &[String]) -> String {
    if suggested_type_names.is_empty() {
        return String::new();
    }
    format!(
        " Did you mean to use an inline fragment on {}?",
        suggestion::quoted_or_list(suggested_type_names),
    )
}
