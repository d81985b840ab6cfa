mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod parameter;
mod scalar_coercion;
mod scalar_type;
mod type_annotation;
mod types_map_builder;
mod union_type;
mod union_type_validator;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_coercion::builtin_literal_coercion;
pub use scalar_coercion::coerce_literal;
pub use scalar_coercion::CoercedValue;
pub use scalar_coercion::CoercionResult;
pub use scalar_coercion::LiteralCoercionFn;
pub use scalar_coercion::BUILTIN_SCALAR_NAMES;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
use union_type_validator::UnionTypeValidator;

pub type NamedGraphQLTypeRef = crate::NamedRef<GraphQLType>;
