use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully built, typechecked, and immutable GraphQL schema.
///
/// A [`Schema`] is built once (see [`SchemaBuilder`]) and is then only ever
/// read. It is `Send + Sync`, so a single instance can back any number of
/// concurrent validations.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    /// AbstractTypeName -> names of the types that can appear where the
    /// abstract type is expected, in declaration order.
    pub(crate) possible_types: HashMap<String, Vec<String>>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Every type in this schema (built-in scalars first, then the types
    /// defined in the schema in the order they were loaded).
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Only the types that were defined by the loaded schema documents.
    pub fn defined_types(&self) -> Vec<&GraphQLType> {
        self.types
            .values()
            .filter(|type_| type_.as_scalar().is_none_or(|scalar| !scalar.is_builtin()))
            .collect()
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Whether `type_name` is one of the
    /// [possible types](Self::possible_types) of `abstract_type`.
    pub fn is_possible_type(
        &self,
        abstract_type: &GraphQLType,
        type_name: &str,
    ) -> bool {
        self.possible_type_names(abstract_type)
            .contains(&type_name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type
            .as_ref()
            .and_then(|type_ref| type_ref.deref(self).ok())
            .and_then(|type_| type_.as_object())
    }

    /// The names of the [possible types](Self::possible_types) of
    /// `abstract_type`.
    pub fn possible_type_names(&self, abstract_type: &GraphQLType) -> Vec<&str> {
        if !abstract_type.is_abstract() {
            return vec![];
        }

        self.possible_types
            .get(abstract_type.name())
            .map(|names| names.iter().map(|name| name.as_str()).collect())
            .unwrap_or_default()
    }

    /// The types that may appear where `abstract_type` is expected.
    ///
    /// For an interface these are the object types declaring that they
    /// implement it, in the order those object types were defined. For a
    /// union these are its members exactly as declared, which may include
    /// interface members. Every other kind of type has no possible types.
    pub fn possible_types(&self, abstract_type: &GraphQLType) -> Vec<&GraphQLType> {
        self.possible_type_names(abstract_type)
            .into_iter()
            .filter_map(|type_name| self.types.get(type_name))
            .collect()
    }

    pub fn query_type(&self) -> &ObjectType {
        self.query_type
            .deref(self)
            .ok()
            .and_then(|type_| type_.as_object())
            .expect("query type is verified to be an object type at build time")
    }

    /// The root type for the given kind of operation, if the schema defines
    /// one.
    pub fn root_operation_type(
        &self,
        operation_type: GraphQLOperationType,
    ) -> Option<&ObjectType> {
        match operation_type {
            GraphQLOperationType::Mutation => self.mutation_type(),
            GraphQLOperationType::Query => Some(self.query_type()),
            GraphQLOperationType::Subscription => self.subscription_type(),
        }
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type
            .as_ref()
            .and_then(|type_ref| type_ref.deref(self).ok())
            .and_then(|type_| type_.as_object())
    }
}
