use crate::ast;
use crate::validation::ValidationContext;

/// A single validation check, notified of each node as a document is walked.
///
/// Every callback has an empty default so a rule only implements the nodes
/// it cares about. Callbacks take `&self`: a rule list can be shared by any
/// number of concurrent validations, and anything a rule learns during a
/// pass must be reported through the [`ValidationContext`].
///
/// When `enter_field` and `leave_field` run, [`ValidationContext::current_type`]
/// is the type the field is selected against. For every other node it is the
/// type the node's own selections are made against.
#[allow(unused_variables)]
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn enter_document(
        &self,
        ctx: &mut ValidationContext<'_>,
        document: &ast::operation::Document,
    ) {}

    fn leave_document(
        &self,
        ctx: &mut ValidationContext<'_>,
        document: &ast::operation::Document,
    ) {}

    fn enter_operation_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        operation: &ast::operation::OperationDefinition,
    ) {}

    fn leave_operation_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        operation: &ast::operation::OperationDefinition,
    ) {}

    fn enter_fragment_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        fragment: &ast::operation::FragmentDefinition,
    ) {}

    fn leave_fragment_definition(
        &self,
        ctx: &mut ValidationContext<'_>,
        fragment: &ast::operation::FragmentDefinition,
    ) {}

    fn enter_selection_set(
        &self,
        ctx: &mut ValidationContext<'_>,
        selection_set: &ast::operation::SelectionSet,
    ) {}

    fn leave_selection_set(
        &self,
        ctx: &mut ValidationContext<'_>,
        selection_set: &ast::operation::SelectionSet,
    ) {}

    fn enter_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {}

    fn leave_field(
        &self,
        ctx: &mut ValidationContext<'_>,
        field: &ast::operation::Field,
    ) {}

    fn enter_inline_fragment(
        &self,
        ctx: &mut ValidationContext<'_>,
        inline_fragment: &ast::operation::InlineFragment,
    ) {}

    fn leave_inline_fragment(
        &self,
        ctx: &mut ValidationContext<'_>,
        inline_fragment: &ast::operation::InlineFragment,
    ) {}

    fn enter_fragment_spread(
        &self,
        ctx: &mut ValidationContext<'_>,
        spread: &ast::operation::FragmentSpread,
    ) {}

    fn leave_fragment_spread(
        &self,
        ctx: &mut ValidationContext<'_>,
        spread: &ast::operation::FragmentSpread,
    ) {}
}
