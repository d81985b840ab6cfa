use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use crate::ReadContentError;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLOperationType {
    Mutation,
    Query,
    Subscription,
}
impl GraphQLOperationType {
    /// The conventional name of the root type for this kind of operation
    /// when no `schema { ... }` definition names one explicitly.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

/// Utility for building a [`Schema`] from one or more schema documents.
///
/// ```
/// use libgraphql_validator::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(
///     None,
///     "type Query { hello: String }",
/// )?
/// .build()?;
///
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        log::debug!(
            "Building schema from {} types...",
            self.types_map_builder.len(),
        );
        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_operation_type(
            &types,
            GraphQLOperationType::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mutation_type = Self::resolve_root_operation_type(
            &types,
            GraphQLOperationType::Mutation,
            self.mutation_type.take(),
        )?;

        let subscription_type = Self::resolve_root_operation_type(
            &types,
            GraphQLOperationType::Subscription,
            self.subscription_type.take(),
        )?;

        let possible_types = Self::index_possible_types(&types);

        Ok(Schema {
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn from_ast(
        file_path: Option<&Path>,
        ast_doc: &ast::schema::Document,
    ) -> Result<Self> {
        Self::new().load_ast(file_path, ast_doc)
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    /// Record, for every interface and union, the types that may appear
    /// where it is expected.
    fn index_possible_types(
        types: &IndexMap<String, GraphQLType>,
    ) -> HashMap<String, Vec<String>> {
        let mut possible_types: HashMap<String, Vec<String>> = HashMap::new();
        for type_ in types.values() {
            match type_ {
                GraphQLType::Object(obj_type) => {
                    for iface_name in obj_type.interface_names() {
                        possible_types
                            .entry(iface_name.to_string())
                            .or_default()
                            .push(obj_type.name().to_string());
                    }
                },

                GraphQLType::Union(union_type) => {
                    possible_types.insert(
                        union_type.name().to_string(),
                        union_type.member_type_names()
                            .into_iter()
                            .map(|name| name.to_string())
                            .collect(),
                    );
                },

                GraphQLType::Enum(_)
                    | GraphQLType::InputObject(_)
                    | GraphQLType::Interface(_)
                    | GraphQLType::Scalar(_)
                    => (),
            }
        }
        possible_types
    }

    pub fn load_ast(
        mut self,
        file_path: Option<&Path>,
        ast_doc: &ast::schema::Document,
    ) -> Result<Self> {
        for def in &ast_doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_definition(file_path, schema_def)?,

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_type_definition(file_path, type_def)?,

                ast::schema::Definition::TypeExtension(_) =>
                    log::debug!(
                        "Ignoring a type extension in {file_path:?}: type \
                        extensions do not affect operation validation.",
                    ),

                ast::schema::Definition::DirectiveDefinition(directive_def) =>
                    log::trace!(
                        "Skipping the `@{}` directive definition.",
                        directive_def.name,
                    ),
            }
        }
        Ok(self)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(&[file_path])
    }

    pub fn load_files(mut self, file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::trace!("Loading schema file {file_path:?}...");
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content)?;
        }
        Ok(self)
    }

    pub fn load_str(
        self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        self.load_ast(file_path, &ast_doc)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    fn object_or_interface_data(
        file_path: Option<&Path>,
        def_location: loc::SourceLocation,
        description: &Option<String>,
        type_name: &str,
        implements_interfaces: &[String],
        ast_fields: &[ast::schema::Field],
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut fields: IndexMap<String, Field> = IndexMap::new();
        for ast_field in ast_fields {
            let field = Field::from_ast(type_name, file_path, ast_field);
            if let Some(existing_field) = fields.get(&ast_field.name) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field.def_location().to_owned(),
                });
            }
            fields.insert(ast_field.name.to_string(), field);
        }

        Ok(ObjectOrInterfaceTypeData {
            interfaces: implements_interfaces
                .iter()
                .map(|iface_name| NamedGraphQLTypeRef::new(
                    iface_name,
                    def_location.to_owned(),
                ))
                .collect(),
            def_location,
            description: description.to_owned(),
            fields,
            name: type_name.to_string(),
        })
    }

    fn resolve_root_operation_type(
        types: &IndexMap<String, GraphQLType>,
        operation: GraphQLOperationType,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let Some(typedef_loc) = explicit_def else {
            // Without an explicit `schema { ... }` entry, a type with the
            // conventional root name is used if (and only if) it is an
            // object type.
            let type_name = operation.default_type_name();
            return Ok(match types.get(type_name) {
                Some(GraphQLType::Object(obj_type)) => Some(NamedGraphQLTypeRef::new(
                    type_name,
                    obj_type.def_location().to_owned(),
                )),
                _ => None,
            });
        };

        match types.get(typedef_loc.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                typedef_loc.type_name,
                typedef_loc.def_location,
            ))),

            Some(non_object_type) =>
                Err(SchemaBuildError::RootOperationTypeIsNotAnObjectType {
                    operation,
                    type_name: typedef_loc.type_name,
                    type_kind: non_object_type.into(),
                }),

            None => Err(SchemaBuildError::RootOperationTypeNotDefined {
                operation,
                location: typedef_loc.def_location,
                type_name: typedef_loc.type_name,
            }),
        }
    }

    fn visit_schema_definition(
        &mut self,
        file_path: Option<&Path>,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );

        let root_defs = [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };

            let new_def = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            };
            let slot = match operation {
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_def) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_def.to_owned(),
                    location2: new_def,
                });
            }
            *slot = Some(new_def);
        }

        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: Option<&Path>,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        let (type_name, position) = match type_def {
            ast::schema::TypeDefinition::Enum(def) => (&def.name, &def.position),
            ast::schema::TypeDefinition::InputObject(def) => (&def.name, &def.position),
            ast::schema::TypeDefinition::Interface(def) => (&def.name, &def.position),
            ast::schema::TypeDefinition::Object(def) => (&def.name, &def.position),
            ast::schema::TypeDefinition::Scalar(def) => (&def.name, &def.position),
            ast::schema::TypeDefinition::Union(def) => (&def.name, &def.position),
        };
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            position,
        );

        let type_: GraphQLType = match type_def {
            ast::schema::TypeDefinition::Enum(def) => EnumType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                name: def.name.to_string(),
                values: def.values
                    .iter()
                    .map(|value| (value.name.to_string(), EnumValue {
                        def_location: loc::SourceLocation::from_schema_ast_position(
                            file_path,
                            &value.position,
                        ),
                        description: value.description.to_owned(),
                        name: value.name.to_string(),
                    }))
                    .collect(),
            }.into(),

            ast::schema::TypeDefinition::InputObject(def) => InputObjectType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                fields: def.fields
                    .iter()
                    .map(|input_value| (
                        input_value.name.to_string(),
                        Parameter::from_ast(file_path, input_value),
                    ))
                    .collect(),
                name: def.name.to_string(),
            }.into(),

            ast::schema::TypeDefinition::Interface(def) => InterfaceType(
                Self::object_or_interface_data(
                    file_path,
                    def_location.to_owned(),
                    &def.description,
                    def.name.as_str(),
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            ).into(),

            ast::schema::TypeDefinition::Object(def) => ObjectType(
                Self::object_or_interface_data(
                    file_path,
                    def_location.to_owned(),
                    &def.description,
                    def.name.as_str(),
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            ).into(),

            ast::schema::TypeDefinition::Scalar(def) => ScalarType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                name: def.name.to_string(),
            }.into(),

            ast::schema::TypeDefinition::Union(def) => UnionType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                members: def.types
                    .iter()
                    .map(|member_name| (
                        member_name.to_string(),
                        NamedGraphQLTypeRef::new(
                            member_name,
                            def_location.to_owned(),
                        ),
                    ))
                    .collect(),
                name: def.name.to_string(),
            }.into(),
        };

        log::trace!(
            "Adding the `{type_name}` {} type.",
            GraphQLTypeKind::from(&type_).name(),
        );
        self.types_map_builder.add_new_type(type_name, &def_location, type_)
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Multiple `{operation}` root operation types were defined: \
        `{}` and `{}`",
        .location1.type_name,
        .location2.type_name,
    )]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type is defined with a name that starts with \
        `__`, which is reserved for GraphQL introspection"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("No query type was defined in the schema")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "The `{type_name}` type is declared as the `{operation}` root type, \
        but it is a {} type rather than an object type",
        .type_kind.name(),
    )]
    RootOperationTypeIsNotAnObjectType {
        operation: GraphQLOperationType,
        type_name: String,
        type_kind: GraphQLTypeKind,
    },

    #[error(
        "The `{type_name}` type is declared as the `{operation}` root type, \
        but no such type is defined"
    )]
    RootOperationTypeNotDefined {
        operation: GraphQLOperationType,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<ReadContentError>),

    #[error("Found {} errors while validating schema types", .errors.len())]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
