use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;
use indexmap::IndexMap;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a UnionType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(
        type_: &'a UnionType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for (member_type_name, member_type_ref) in &self.type_.members {
            // Members may be object types or interfaces. An interface member
            // stands for its implementors and keeps its declared position.
            let Some(member_type) = self.types_map.get(member_type_name) else {
                self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: member_type_ref.ref_location().to_owned(),
                    undefined_type_name: member_type_name.to_string(),
                });
                continue;
            };

            if !matches!(member_type, GraphQLType::Interface(_) | GraphQLType::Object(_)) {
                self.errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                    location: member_type_ref.ref_location().to_owned(),
                    union_type_name: self.type_.name().to_string(),
                    invalid_member_type_name: member_type.name().to_string(),
                    invalid_member_type_kind: member_type.into(),
                });
            }
        }

        self.errors
    }
}
