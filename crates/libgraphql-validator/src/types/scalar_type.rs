use crate::ast;
use crate::loc;
use crate::types::scalar_coercion;
use crate::types::CoercionResult;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars), either
/// one of the five built-in scalars or a custom scalar defined in the schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str, description: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(description.to_string()),
            name: name.to_string(),
        }
    }

    /// Coerce a literal AST value to a value of this scalar.
    ///
    /// See [`coerce_literal()`](crate::types::coerce_literal) for the rules
    /// applied to each built-in scalar.
    pub fn coerce_literal(&self, value: &ast::operation::Value) -> CoercionResult {
        scalar_coercion::coerce_literal(self.name.as_str(), value)
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
