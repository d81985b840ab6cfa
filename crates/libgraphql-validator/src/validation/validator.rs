use crate::ast;
use crate::schema::Schema;
use crate::validation::rules::FieldsOnCorrectType;
use crate::validation::Diagnostic;
use crate::validation::FragmentRegistry;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use thiserror::Error;

/// The rules shipped with this crate, in the order they run.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(FieldsOnCorrectType),
    ]
}

/// Validate `document` against `schema`, running every rule in `rules`.
///
/// Fragment spreads are resolved against the fragments defined in `document`
/// itself. Diagnostics from all rules are returned in traversal order.
pub fn validate(
    document: &ast::operation::Document,
    schema: &Schema,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<Diagnostic> {
    let fragments = FragmentRegistry::from_document(document);
    validate_with_fragments(document, schema, &fragments, rules)
}

/// Like [`validate`], but fragment spreads are resolved against a
/// caller-supplied [`FragmentRegistry`] (e.g. one holding fragments shared
/// across many documents).
pub fn validate_with_fragments(
    document: &ast::operation::Document,
    schema: &Schema,
    fragments: &FragmentRegistry<'_>,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<Diagnostic> {
    log::debug!(
        "Validating a document of {} definitions with {} rules ({} fragments \
        registered)...",
        document.definitions.len(),
        rules.len(),
        fragments.len(),
    );

    let mut ctx = ValidationContext::new(schema, fragments);
    DocumentWalker { rules }.walk_document(&mut ctx, document);

    let diagnostics = ctx.into_diagnostics();
    log::debug!("Validation finished with {} diagnostics.", diagnostics.len());
    diagnostics
}

/// Drives a single depth-first pass over a document, keeping the
/// [`TypeInfo`](crate::validation::TypeInfo) in step and notifying every rule
/// at every node.
struct DocumentWalker<'r> {
    rules: &'r [Box<dyn ValidationRule>],
}
impl DocumentWalker<'_> {
    fn walk_document(
        &self,
        ctx: &mut ValidationContext<'_>,
        document: &ast::operation::Document,
    ) {
        for rule in self.rules {
            rule.enter_document(ctx, document);
        }

        for def in &document.definitions {
            match def {
                ast::operation::Definition::Fragment(fragment) =>
                    self.walk_fragment_definition(ctx, fragment),
                ast::operation::Definition::Operation(operation) =>
                    self.walk_operation_definition(ctx, operation),
            }
        }

        for rule in self.rules {
            rule.leave_document(ctx, document);
        }
    }

    fn walk_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {
        for rule in self.rules {
            rule.enter_field(ctx, field);
        }

        ctx.type_info_mut().enter_field(field);
        if !field.selection_set.items.is_empty() {
            self.walk_selection_set(ctx, &field.selection_set);
        }
        ctx.type_info_mut().leave();

        for rule in self.rules {
            rule.leave_field(ctx, field);
        }
    }

    fn walk_fragment_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        fragment: &ast::operation::FragmentDefinition,
    ) {
        ctx.type_info_mut().enter_fragment_definition(fragment);
        for rule in self.rules {
            rule.enter_fragment_definition(ctx, fragment);
        }

        self.walk_selection_set(ctx, &fragment.selection_set);

        for rule in self.rules {
            rule.leave_fragment_definition(ctx, fragment);
        }
        ctx.type_info_mut().leave();
    }

    fn walk_fragment_spread(
        &self,
        ctx: &mut ValidationContext<'_>,
        spread: &ast::operation::FragmentSpread,
    ) {
        let fragments = ctx.fragments();
        ctx.type_info_mut().enter_fragment_spread(spread, fragments);
        for rule in self.rules {
            rule.enter_fragment_spread(ctx, spread);
        }
        for rule in self.rules {
            rule.leave_fragment_spread(ctx, spread);
        }
        ctx.type_info_mut().leave();
    }

    fn walk_inline_fragment(
        &self,
        ctx: &mut ValidationContext<'_>,
        inline_fragment: &ast::operation::InlineFragment,
    ) {
        ctx.type_info_mut().enter_inline_fragment(inline_fragment);
        for rule in self.rules {
            rule.enter_inline_fragment(ctx, inline_fragment);
        }

        self.walk_selection_set(ctx, &inline_fragment.selection_set);

        for rule in self.rules {
            rule.leave_inline_fragment(ctx, inline_fragment);
        }
        ctx.type_info_mut().leave();
    }

    fn walk_operation_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        operation: &ast::operation::OperationDefinition,
    ) {
        ctx.type_info_mut().enter_operation_definition(operation);
        for rule in self.rules {
            rule.enter_operation_definition(ctx, operation);
        }

        let selection_set = match operation {
            ast::operation::OperationDefinition::Mutation(mutation) =>
                &mutation.selection_set,
            ast::operation::OperationDefinition::Query(query) =>
                &query.selection_set,
            ast::operation::OperationDefinition::SelectionSet(selection_set) =>
                selection_set,
            ast::operation::OperationDefinition::Subscription(subscription) =>
                &subscription.selection_set,
        };
        self.walk_selection_set(ctx, selection_set);

        for rule in self.rules {
            rule.leave_operation_definition(ctx, operation);
        }
        ctx.type_info_mut().leave();
    }

    fn walk_selection_set(
        &self,
        ctx: &mut ValidationContext<'_>,
        selection_set: &ast::operation::SelectionSet,
    ) {
        for rule in self.rules {
            rule.enter_selection_set(ctx, selection_set);
        }

        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    self.walk_field(ctx, field),
                ast::operation::Selection::FragmentSpread(spread) =>
                    self.walk_fragment_spread(ctx, spread),
                ast::operation::Selection::InlineFragment(inline_fragment) =>
                    self.walk_inline_fragment(ctx, inline_fragment),
            }
        }

        for rule in self.rules {
            rule.leave_selection_set(ctx, selection_set);
        }
    }
}

/// Bundles a [`Schema`] with the list of rules to validate documents
/// against it.
///
/// ```
/// use libgraphql_validator::schema::SchemaBuilder;
/// use libgraphql_validator::Validator;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(None, "type Query { name: String }")?
///     .build()?;
/// let diagnostics = Validator::new(&schema).validate_str("{ nmae }")?;
///
/// assert_eq!(
///     diagnostics[0].message(),
///     "Cannot query field \"nmae\" on type \"Query\". Did you mean \"name\"?",
/// );
/// # Ok(())
/// # }
/// ```
pub struct Validator<'schema> {
    rules: Vec<Box<dyn ValidationRule>>,
    schema: &'schema Schema,
}
impl<'schema> Validator<'schema> {
    /// A validator running [`default_rules()`].
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_rules(schema, default_rules())
    }

    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        self.rules.as_slice()
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    pub fn validate(&self, document: &ast::operation::Document) -> Vec<Diagnostic> {
        validate(document, self.schema, &self.rules)
    }

    /// Parse `source` as an operation document and validate it.
    pub fn validate_str(
        &self,
        source: impl AsRef<str>,
    ) -> Result<Vec<Diagnostic>, ValidateStrError> {
        let document = ast::operation::parse(source.as_ref())
            .map_err(|err| ValidateStrError::ParseError {
                err: err.to_string(),
            })?;
        Ok(self.validate(&document))
    }

    pub fn with_rules(
        schema: &'schema Schema,
        rules: Vec<Box<dyn ValidationRule>>,
    ) -> Self {
        Self { rules, schema }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidateStrError {
    #[error("Error parsing operation document: {err}")]
    ParseError {
        err: String,
    },
}
