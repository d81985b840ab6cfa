use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ScalarType;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    (
        "Float",
        "The `Float` scalar type represents signed double-precision \
        fractional values as specified by IEEE 754.",
    ),
    (
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to \
        refetch an object or as the key for a cache.",
    ),
    (
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric \
        values. Int can represent values between -(2^31) and 2^31 - 1.",
    ),
    (
        "String",
        "The `String` scalar type represents textual data, represented as \
        UTF-8 character sequences.",
    ),
];

/// Accumulates every named type of a schema in declaration order.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: BUILTIN_SCALARS
                .iter()
                .map(|(name, description)| (
                    name.to_string(),
                    ScalarType::builtin(name, description).into(),
                ))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Validate all types together and hand back the finished map.
    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Enum(_)
                    | GraphQLType::InputObject(_)
                    | GraphQLType::Scalar(_)
                    => (),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, &self.types)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}
