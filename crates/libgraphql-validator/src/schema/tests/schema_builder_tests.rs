use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::NamedTypeDefLocation;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn schema_loc(line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::Schema(loc::FilePosition {
        file: None,
        position: loc::SourcePosition::new(line, col),
    })
}

mod basics {
    use super::*;

    #[test]
    fn build_without_load() -> Result<()> {
        let schema = SchemaBuilder::new().build();

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        );

        Ok(())
    }

    #[test]
    fn load_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.all_types().len(), 6);
        assert_eq!(schema.defined_types().len(), 1);

        let query_type = schema.query_type();
        assert_eq!(query_type.name(), "Query");
        assert_eq!(query_type.def_location(), &schema_loc(1, 1));
        assert!(query_type.fields().is_empty());

        Ok(())
    }

    #[test]
    fn builtin_scalars_are_registered_first() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?
            .build()?;

        assert_eq!(
            schema.all_types().keys().collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String", "Query"],
        );
        let int_type = schema.get_type("Int").and_then(|t| t.as_scalar()).unwrap();
        assert!(int_type.is_builtin());
        assert_eq!(int_type.def_location(), &loc::SourceLocation::GraphQLBuiltIn);

        Ok(())
    }

    #[test]
    fn load_all_default_operation_types_in_single_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { m: Int }\n",
                "type Query { q: Int }\n",
                "type Subscription { s: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(
            schema.subscription_type().map(|t| t.name()),
            Some("Subscription"),
        );
        assert_eq!(
            schema.root_operation_type(GraphQLOperationType::Mutation)
                .map(|t| t.name()),
            Some("Mutation"),
        );

        Ok(())
    }

    #[test]
    fn load_schema_definition_with_custom_root_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema {\n",
                "  query: RootQuery\n",
                "  mutation: RootMutation\n",
                "}\n",
                "type RootQuery { q: Int }\n",
                "type RootMutation { m: Int }\n",
                "type Query { ignored: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("RootMutation"));
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn default_root_type_name_on_non_object_type_is_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { q: Int }\n",
                "scalar Mutation\n",
            ))?
            .build()?;

        assert!(schema.mutation_type().is_none());

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "this is not valid syntax");

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::ParseError { file: None, .. },
        ));

        Ok(())
    }

    #[test]
    fn load_files_reports_missing_file() -> Result<()> {
        let missing_path = Path::new("/this/path/does/not/exist.graphql");
        let schema = SchemaBuilder::new().load_file(missing_path);

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(_),
        ));

        Ok(())
    }

    #[test]
    fn type_extensions_and_directive_definitions_are_skipped() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @cached(ttl: Int) on FIELD_DEFINITION\n",
                "type Query { a: Int }\n",
                "extend type Query { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(
            schema.query_type().fields().keys().collect::<Vec<_>>(),
            vec!["a"],
        );

        Ok(())
    }
}

mod build_errors {
    use super::*;

    #[test]
    fn duplicate_mutation_operation_across_documents() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type TQuery\n",
                "type TMutation1\n",
                "schema {\n",
                "  mutation: TMutation1,\n",
                "  query: TQuery,\n",
                "}\n",
            ))?
            .load_str(None, concat!(
                "type TMutation2\n",
                "schema {\n",
                "  mutation: TMutation2,\n",
                "}\n",
            ));

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::DuplicateOperationDefinition {
                operation: GraphQLOperationType::Mutation,
                location1: NamedTypeDefLocation {
                    def_location: schema_loc(3, 1),
                    type_name: "TMutation1".to_string(),
                },
                location2: NamedTypeDefLocation {
                    def_location: schema_loc(2, 1),
                    type_name: "TMutation2".to_string(),
                },
            },
        );

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .load_str(None, "\ntype Query { b: Int }");

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition {
                type_name: "Query".to_string(),
                def1: schema_loc(1, 1),
                def2: schema_loc(2, 1),
            },
        );

        Ok(())
    }

    #[test]
    fn redefining_a_builtin_scalar_is_a_duplicate() -> Result<()> {
        let schema = SchemaBuilder::new().load_str(None, "scalar Int");

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. }
                if type_name == "Int",
        ));

        Ok(())
    }

    #[test]
    fn duplicate_field_name_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query {\n  a: Int\n  a: String\n}");

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: "Query".to_string(),
                field_name: "a".to_string(),
                field_def1: schema_loc(2, 3),
                field_def2: schema_loc(3, 3),
            },
        );

        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_name() -> Result<()> {
        let schema = SchemaBuilder::new().load_str(None, "type __Foo { a: Int }");

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: schema_loc(1, 1),
                type_name: "__Foo".to_string(),
            },
        );

        Ok(())
    }

    #[test]
    fn explicit_root_type_not_defined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "schema { query: Missing }")?
            .build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::RootOperationTypeNotDefined {
                operation: GraphQLOperationType::Query,
                type_name,
                ..
            } if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn explicit_root_type_is_not_an_object() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Q }\n",
                "interface Q { a: Int }\n",
            ))?
            .build();

        assert_eq!(
            schema.unwrap_err(),
            SchemaBuildError::RootOperationTypeIsNotAnObjectType {
                operation: GraphQLOperationType::Query,
                type_name: "Q".to_string(),
                type_kind: GraphQLTypeKind::Interface,
            },
        );

        Ok(())
    }

    #[test]
    fn union_members_must_be_object_or_interface_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { u: U }\n",
                "type A { a: Int }\n",
                "union U = A | Float\n",
            ))?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = schema else {
            panic!("expected type validation errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidUnionMemberTypeKind {
                union_type_name,
                invalid_member_type_name,
                invalid_member_type_kind: GraphQLTypeKind::Scalar,
                ..
            } if union_type_name == "U" && invalid_member_type_name == "Float",
        ));

        Ok(())
    }

    #[test]
    fn field_of_undefined_type() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Missing }")?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = schema else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            &errors[..],
            [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
                if undefined_type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn object_missing_interface_field() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { n: Node }\n",
                "interface Node { id: ID }\n",
                "type User implements Node { name: String }\n",
            ))?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = schema else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            &errors[..],
            [TypeValidationError::MissingInterfaceSpecifiedField {
                field_name,
                interface_name,
                type_name,
                ..
            }] if field_name == "id"
                && interface_name == "Node"
                && type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn object_missing_interface_field_parameter() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { n: Node }\n",
                "interface Node { friends(first: Int): [Node] }\n",
                "type User implements Node { friends: [Node] }\n",
            ))?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = schema else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            &errors[..],
            [TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                field_name,
                missing_parameter_name,
                type_name,
                ..
            }] if field_name == "friends"
                && missing_parameter_name == "first"
                && type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn object_interface_field_parameter_type_mismatch() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { n: Node }\n",
                "interface Node { friends(first: Int): [Node] }\n",
                "type User implements Node { friends(first: Int!): [Node] }\n",
            ))?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = schema else {
            panic!("expected type validation errors");
        };
        assert_eq!(errors, vec![
            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                def_location: schema_loc(3, 37),
                expected_parameter_type: "Int".to_string(),
                field_name: "friends".to_string(),
                interface_name: "Node".to_string(),
                invalid_parameter_type: "Int!".to_string(),
                parameter_name: "first".to_string(),
                type_name: "User".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn object_interface_field_parameters_match_across_files() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(Some(Path::new("node.graphql")), concat!(
                "type Query { n: Node }\n",
                "interface Node { friends(first: [Int!]): [Node] }\n",
            ))?
            .load_str(
                Some(Path::new("user.graphql")),
                "type User implements Node { friends(first: [Int!], after: ID): [Node] }",
            )?
            .build()?;

        let user = schema.get_type("User").unwrap().as_object().unwrap();
        assert_eq!(user.field("friends").unwrap().parameters().len(), 2);

        Ok(())
    }
}

mod possible_types {
    use super::*;

    const SCHEMA_SRC: &str = r#"
        type Query { pet: Pet, being: Being }
        interface Being { name: String }
        interface Pet { name: String }
        type Dog implements Being & Pet { name: String }
        type Cat implements Pet { name: String }
        type Human implements Being { name: String }
        union CatOrDog = Cat | Dog
        union DogOrHuman = Human | Dog
    "#;

    #[test]
    fn interface_possible_types_follow_object_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SCHEMA_SRC)?.build()?;

        let pet = schema.get_type("Pet").unwrap();
        assert_eq!(schema.possible_type_names(pet), vec!["Dog", "Cat"]);

        let being = schema.get_type("Being").unwrap();
        assert_eq!(
            schema.possible_types(being)
                .into_iter()
                .map(|obj| obj.name())
                .collect::<Vec<_>>(),
            vec!["Dog", "Human"],
        );

        Ok(())
    }

    #[test]
    fn union_possible_types_follow_member_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SCHEMA_SRC)?.build()?;

        let dog_or_human = schema.get_type("DogOrHuman").unwrap();
        assert_eq!(
            schema.possible_type_names(dog_or_human),
            vec!["Human", "Dog"],
        );
        assert!(schema.is_possible_type(dog_or_human, "Dog"));
        assert!(!schema.is_possible_type(dog_or_human, "Cat"));

        Ok(())
    }

    #[test]
    fn union_with_interface_member_keeps_declared_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { u: U }\n",
            "interface I { a: Int }\n",
            "type A implements I { a: Int }\n",
            "type B { b: Int }\n",
            "union U = I | A | B\n",
        ))?.build()?;

        let union_type = schema.get_type("U").unwrap();
        assert_eq!(
            schema.possible_types(union_type)
                .into_iter()
                .map(|type_| type_.name())
                .collect::<Vec<_>>(),
            vec!["I", "A", "B"],
        );
        assert!(schema.is_possible_type(union_type, "I"));

        Ok(())
    }

    #[test]
    fn concrete_types_have_no_possible_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SCHEMA_SRC)?.build()?;

        let dog = schema.get_type("Dog").unwrap();
        assert!(schema.possible_type_names(dog).is_empty());
        let string = schema.get_type("String").unwrap();
        assert!(schema.possible_types(string).is_empty());

        Ok(())
    }
}
