use crate::validation::tests::test_utils::parse_document;
use crate::validation::FragmentRegistry;

#[test]
fn registers_every_fragment_in_declaration_order() {
    let document = parse_document(r#"
        { simpleObject { ...b } }
        fragment b on SimpleObjectType { simple }
        fragment a on SimpleObjectType { booleanField }
    "#);

    let registry = FragmentRegistry::from_document(&document);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(registry.get("a").map(|frag| frag.name.as_str()), Some("a"));
    assert!(registry.get("c").is_none());
}

#[test]
fn first_definition_of_a_name_wins() {
    let document = parse_document(r#"
        fragment dup on SimpleObjectType { simple }
        fragment dup on AnotherSimpleObjectType { sample }
    "#);

    let registry = FragmentRegistry::from_document(&document);

    assert_eq!(registry.len(), 1);
    let dup = registry.get("dup").unwrap();
    assert_eq!(dup.position.line, 2);
}

#[test]
fn add_fragment_keeps_existing_definition() {
    let first = parse_document("fragment f on SimpleObjectType { simple }");
    let second = parse_document("fragment f on AnotherSimpleObjectType { sample }");
    let mut registry = FragmentRegistry::from_document(&first);

    let crate::ast::operation::Definition::Fragment(other_f) = &second.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert!(!registry.add_fragment(other_f));
    assert!(registry.get("f").is_some_and(|frag| {
        let crate::ast::operation::TypeCondition::On(type_name) = &frag.type_condition;
        type_name == "SimpleObjectType"
    }));
}

#[test]
fn empty_registry() {
    let registry = FragmentRegistry::new();

    assert!(registry.is_empty());
    assert!(registry.get("anything").is_none());
}
