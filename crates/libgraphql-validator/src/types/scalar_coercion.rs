//! Literal coercion for scalar types.
//!
//! Each built-in scalar has a pure [`LiteralCoercionFn`] registered by name in
//! a static table. Custom scalars have no registered function and accept any
//! constant literal unchanged.

use crate::ast;

/// The names of the scalar types built into every schema.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

pub type LiteralCoercionFn = fn(&ast::operation::Value) -> CoercionResult;

const BUILTIN_LITERAL_COERCIONS: [(&str, LiteralCoercionFn); 5] = [
    ("Boolean", coerce_boolean_literal),
    ("Float", coerce_float_literal),
    ("ID", coerce_id_literal),
    ("Int", coerce_int_literal),
    ("String", coerce_string_literal),
];

/// A literal value after it has been successfully coerced to some input
/// type.
#[derive(Clone, Debug, PartialEq)]
pub enum CoercedValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    ID(String),
    Int(i32),
    /// A literal accepted as-is by a custom scalar.
    Literal(ast::operation::Value),
    String(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CoercionResult {
    Invalid,
    Valid(CoercedValue),
}
impl CoercionResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn valid_value(&self) -> Option<&CoercedValue> {
        if let Self::Valid(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

/// Look up the coercion function registered for a built-in scalar.
pub fn builtin_literal_coercion(scalar_name: &str) -> Option<LiteralCoercionFn> {
    BUILTIN_LITERAL_COERCIONS
        .iter()
        .find(|(name, _)| *name == scalar_name)
        .map(|(_, coercion_fn)| *coercion_fn)
}

/// Coerce a literal AST value to the scalar named `scalar_name`.
///
/// `null` and variable references never coerce here: nullability and
/// variable usage are checked by the caller against the surrounding type
/// annotation.
pub fn coerce_literal(
    scalar_name: &str,
    value: &ast::operation::Value,
) -> CoercionResult {
    match builtin_literal_coercion(scalar_name) {
        Some(coercion_fn) => coercion_fn(value),
        None => coerce_custom_scalar_literal(value),
    }
}

fn coerce_boolean_literal(value: &ast::operation::Value) -> CoercionResult {
    match value {
        ast::operation::Value::Boolean(b) =>
            CoercionResult::Valid(CoercedValue::Boolean(*b)),
        _ => CoercionResult::Invalid,
    }
}

fn coerce_custom_scalar_literal(value: &ast::operation::Value) -> CoercionResult {
    match value {
        ast::operation::Value::Null
            | ast::operation::Value::Variable(_)
            => CoercionResult::Invalid,
        _ => CoercionResult::Valid(CoercedValue::Literal(value.to_owned())),
    }
}

fn coerce_float_literal(value: &ast::operation::Value) -> CoercionResult {
    match value {
        ast::operation::Value::Float(f) if f.is_finite() =>
            CoercionResult::Valid(CoercedValue::Float(*f)),
        ast::operation::Value::Int(num) => match num.as_i64() {
            Some(i) => CoercionResult::Valid(CoercedValue::Float(i as f64)),
            None => CoercionResult::Invalid,
        },
        _ => CoercionResult::Invalid,
    }
}

fn coerce_id_literal(value: &ast::operation::Value) -> CoercionResult {
    match value {
        ast::operation::Value::String(s) =>
            CoercionResult::Valid(CoercedValue::ID(s.to_owned())),
        ast::operation::Value::Int(num) => match num.as_i64() {
            Some(i) => CoercionResult::Valid(CoercedValue::ID(i.to_string())),
            None => CoercionResult::Invalid,
        },
        _ => CoercionResult::Invalid,
    }
}

/// Int only accepts integer literals within the 32-bit signed range
/// `[-2^31, 2^31 - 1]`.
fn coerce_int_literal(value: &ast::operation::Value) -> CoercionResult {
    let ast::operation::Value::Int(num) = value else {
        return CoercionResult::Invalid;
    };

    match num.as_i64().map(i32::try_from) {
        Some(Ok(i)) => CoercionResult::Valid(CoercedValue::Int(i)),
        _ => CoercionResult::Invalid,
    }
}

fn coerce_string_literal(value: &ast::operation::Value) -> CoercionResult {
    match value {
        ast::operation::Value::String(s) =>
            CoercionResult::Valid(CoercedValue::String(s.to_owned())),
        _ => CoercionResult::Invalid,
    }
}
