use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::rules::FieldsOnCorrectType;
use crate::validation::validate;
use crate::validation::Diagnostic;
use crate::validation::TypeContext;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::sync::Arc;
use std::sync::Mutex;

pub(super) const TEST_SCHEMA_SRC: &str = r#"
    type Query {
        simpleObject: SimpleObjectType
        simpleInterface: SimpleInterfaceType
        simpleUnion: SimpleSampleUnionType
        complicatedObject: ComplicatedObjectType
        color: Color
    }

    interface SimpleInterfaceType {
        booleanField: Boolean
    }

    type SimpleObjectType implements SimpleInterfaceType {
        booleanField: Boolean
        simple: String
        notInterfaceField: String
    }

    type AnotherSimpleObjectType implements SimpleInterfaceType {
        booleanField: Boolean
        sample: String
        boolField: Boolean
        notInterfaceField: String
    }

    type ComplicatedObjectType {
        complicatedObjectArray: [ComplicatedObjectType!]!
        intField: Int
        stringField: String
    }

    union SimpleSampleUnionType =
        | SimpleInterfaceType
        | SimpleObjectType
        | AnotherSimpleObjectType

    enum Color {
        RED
        GREEN
    }
"#;

pub(super) fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, TEST_SCHEMA_SRC)
        .unwrap()
        .build()
        .unwrap()
}

pub(super) fn parse_document(source: &str) -> ast::operation::Document {
    ast::operation::parse(source).unwrap()
}

/// Validate `source` against the test schema with only the
/// [`FieldsOnCorrectType`] rule.
pub(super) fn validate_fields(source: &str) -> Vec<Diagnostic> {
    let schema = test_schema();
    let document = parse_document(source);
    let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(FieldsOnCorrectType)];
    validate(&document, &schema, &rules)
}

pub(super) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.message())
        .collect()
}

pub(super) fn type_context_name(type_context: TypeContext<'_>) -> &str {
    match type_context {
        TypeContext::Known(type_) => type_.name(),
        TypeContext::Unknown => "?",
    }
}

/// Logs every callback it receives (along with the type context at that
/// point) into a shared event list.
pub(super) struct RecordingRule {
    pub events: Arc<Mutex<Vec<String>>>,
    pub label: &'static str,
}
impl RecordingRule {
    pub fn new(label: &'static str, events: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            events: Arc::clone(events),
            label,
        }
    }

    fn record(&self, ctx: &ValidationContext<'_>, event: String) {
        self.events.lock().unwrap().push(format!(
            "{}:{event}@{}",
            self.label,
            type_context_name(ctx.current_type()),
        ));
    }
}
impl ValidationRule for RecordingRule {
    fn name(&self) -> &'static str {
        self.label
    }

    fn enter_document(
        &self,
        ctx: &mut ValidationContext<'_>,
        _document: &ast::operation::Document,
    ) {
        self.record(ctx, "enter_document".to_string());
    }

    fn leave_document(
        &self,
        ctx: &mut ValidationContext<'_>,
        _document: &ast::operation::Document,
    ) {
        self.record(ctx, "leave_document".to_string());
    }

    fn enter_operation_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        _operation: &ast::operation::OperationDefinition,
    ) {
        self.record(ctx, "enter_operation".to_string());
    }

    fn enter_fragment_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        fragment: &ast::operation::FragmentDefinition,
    ) {
        self.record(ctx, format!("enter_fragment:{}", fragment.name));
    }

    fn enter_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {
        self.record(ctx, format!("enter_field:{}", field.name));
    }

    fn leave_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {
        self.record(ctx, format!("leave_field:{}", field.name));
    }

    fn enter_inline_fragment(
        &self,
        ctx: &mut ValidationContext<'_>,
        _inline_fragment: &ast::operation::InlineFragment,
    ) {
        self.record(ctx, "enter_inline_fragment".to_string());
    }

    fn enter_fragment_spread(
        &self,
        ctx: &mut ValidationContext<'_>,
        spread: &ast::operation::FragmentSpread,
    ) {
        self.record(ctx, format!("enter_spread:{}", spread.fragment_name));
    }
}
