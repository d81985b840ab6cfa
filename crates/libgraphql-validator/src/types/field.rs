use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(
        parent_type_name: &str,
        file_path: Option<&Path>,
        ast_field: &ast::schema::Field,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast_field.position,
        );
        Self {
            description: ast_field.description.to_owned(),
            name: ast_field.name.to_string(),
            parameters: ast_field.arguments
                .iter()
                .map(|arg| (
                    arg.name.to_string(),
                    Parameter::from_ast(file_path, arg),
                ))
                .collect(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &ast_field.field_type,
            ),
            def_location,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments accepted by this field, in the order they were defined.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The name of the object or interface type that declares this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The named type this field returns once all list and non-null wrappers
    /// are stripped away.
    pub fn return_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_annotation
            .innermost_named_type_annotation()
            .graphql_type(schema)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
