use crate::ast;
use crate::validation::tests::test_utils::parse_document;
use crate::validation::tests::test_utils::test_schema;
use crate::validation::tests::test_utils::type_context_name;
use crate::validation::tests::test_utils::RecordingRule;
use crate::validation::validate;
use crate::validation::TypeContext;
use crate::validation::TypeInfo;
use crate::validation::ValidationRule;
use std::sync::Arc;
use std::sync::Mutex;

fn record_events(source: &str) -> Vec<String> {
    let schema = test_schema();
    let document = parse_document(source);
    let events = Arc::new(Mutex::new(vec![]));
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(RecordingRule::new("r", &events)),
    ];

    validate(&document, &schema, &rules);

    let events = events.lock().unwrap();
    events.clone()
}

mod traversal {
    use super::*;

    #[test]
    fn contexts_follow_fields_fragments_and_spreads() {
        let events = record_events(r#"
            query {
                simpleInterface {
                    ... on SimpleObjectType { simple }
                    ... { booleanField }
                    ...objFields
                    ...missingFragment
                }
                simpleUnion { __typename }
            }
            fragment objFields on AnotherSimpleObjectType { sample }
        "#);

        assert_eq!(events, vec![
            "r:enter_document@?",
            "r:enter_operation@Query",
            "r:enter_field:simpleInterface@Query",
            "r:enter_inline_fragment@SimpleObjectType",
            "r:enter_field:simple@SimpleObjectType",
            "r:leave_field:simple@SimpleObjectType",
            "r:enter_inline_fragment@SimpleInterfaceType",
            "r:enter_field:booleanField@SimpleInterfaceType",
            "r:leave_field:booleanField@SimpleInterfaceType",
            "r:enter_spread:objFields@AnotherSimpleObjectType",
            "r:enter_spread:missingFragment@?",
            "r:leave_field:simpleInterface@Query",
            "r:enter_field:simpleUnion@Query",
            "r:enter_field:__typename@SimpleSampleUnionType",
            "r:leave_field:__typename@SimpleSampleUnionType",
            "r:leave_field:simpleUnion@Query",
            "r:enter_fragment:objFields@AnotherSimpleObjectType",
            "r:enter_field:sample@AnotherSimpleObjectType",
            "r:leave_field:sample@AnotherSimpleObjectType",
            "r:leave_document@?",
        ]);
    }

    #[test]
    fn unknown_fields_make_their_subtree_unknown() {
        let events = record_events("{ bogus { deeper { deepest } } }");

        assert_eq!(events, vec![
            "r:enter_document@?",
            "r:enter_operation@Query",
            "r:enter_field:bogus@Query",
            "r:enter_field:deeper@?",
            "r:enter_field:deepest@?",
            "r:leave_field:deepest@?",
            "r:leave_field:deeper@?",
            "r:leave_field:bogus@Query",
            "r:leave_document@?",
        ]);
    }

    #[test]
    fn undefined_root_operation_type_is_unknown() {
        let events = record_events("subscription { anything { at all } }");

        assert_eq!(events[1], "r:enter_operation@?");
        assert_eq!(events[2], "r:enter_field:anything@?");
    }

    #[test]
    fn inline_fragment_with_unknown_type_condition() {
        let events = record_events(r#"
            { simpleInterface { ... on Nope { booleanField } } }
        "#);

        assert!(events.contains(&"r:enter_inline_fragment@?".to_string()));
        assert!(events.contains(&"r:enter_field:booleanField@?".to_string()));
    }
}

mod field_return_type {
    use super::*;

    fn return_type_name(parent_type_name: &str, field_name: &str) -> String {
        let schema = test_schema();
        let type_info = TypeInfo::new(&schema);
        let parent_type = schema.get_type(parent_type_name).into();
        type_context_name(type_info.field_return_type(parent_type, field_name))
            .to_string()
    }

    #[test]
    fn named_type_of_declared_field() {
        assert_eq!(return_type_name("Query", "simpleObject"), "SimpleObjectType");
        assert_eq!(return_type_name("SimpleObjectType", "simple"), "String");
    }

    #[test]
    fn list_and_non_null_wrappers_are_stripped() {
        assert_eq!(
            return_type_name("ComplicatedObjectType", "complicatedObjectArray"),
            "ComplicatedObjectType",
        );
    }

    #[test]
    fn interface_own_fields_resolve() {
        assert_eq!(return_type_name("SimpleInterfaceType", "booleanField"), "Boolean");
        assert_eq!(return_type_name("SimpleInterfaceType", "notInterfaceField"), "?");
    }

    #[test]
    fn meta_fields() {
        assert_eq!(return_type_name("SimpleSampleUnionType", "__typename"), "String");
        assert_eq!(return_type_name("Query", "__schema"), "?");
        assert_eq!(return_type_name("Query", "__type"), "?");
    }

    #[test]
    fn fields_of_unions_leaves_and_unknowns_are_unknown() {
        assert_eq!(return_type_name("SimpleSampleUnionType", "booleanField"), "?");
        assert_eq!(return_type_name("Color", "RED"), "?");
        assert_eq!(return_type_name("NotAType", "anything"), "?");
    }
}

mod stack {
    use super::*;

    #[test]
    fn every_enter_is_undone_by_leave() {
        let schema = test_schema();
        let document = parse_document("{ simpleObject { simple } }");
        let ast::operation::Definition::Operation(operation) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };

        let mut type_info = TypeInfo::new(&schema);
        assert_eq!(type_info.current_type(), TypeContext::Unknown);

        type_info.enter_operation_definition(operation);
        assert_eq!(type_info.depth(), 1);
        assert_eq!(type_context_name(type_info.current_type()), "Query");

        type_info.leave();
        assert_eq!(type_info.depth(), 0);
        assert!(type_info.current_type().is_unknown());
    }
}
