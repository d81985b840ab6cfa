use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;

/// An input value definition: either an argument of a
/// [`Field`](crate::types::Field) or a field of an
/// [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    /// Stored in its printed GraphQL form.
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(
        file_path: Option<&std::path::Path>,
        ast_input_value: &ast::schema::InputValue,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast_input_value.position,
        );
        Self {
            default_value: ast_input_value.default_value
                .as_ref()
                .map(|value| value.to_string()),
            description: ast_input_value.description.to_owned(),
            name: ast_input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &ast_input_value.value_type,
            ),
            def_location,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
