use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type attempts to implement `{non_interface_type_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type attempts to implement \
        `{undefined_interface_name}`, which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "`{type_name}.{field_name}` declares the `{parameter_name}` parameter \
        as `{invalid_parameter_type}`, but the `{interface_name}` interface \
        declares it as `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        def_location: loc::SourceLocation,
        expected_parameter_type: String,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        parameter_name: String,
        outputonly_type_name: String,
    },

    #[error(
        "Union members must be object or interface types, but \
        `{union_type_name}` lists \
        `{invalid_member_type_name}` which is a {} type",
        .invalid_member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SourceLocation,
        union_type_name: String,
        invalid_member_type_name: String,
        invalid_member_type_kind: GraphQLTypeKind,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define the `{field_name}` field required by it"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` is missing the `{missing_parameter_name}` \
        parameter required by the `{interface_name}` interface"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error("Reference to an undefined type: `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
