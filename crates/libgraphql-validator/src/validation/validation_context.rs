use crate::schema::Schema;
use crate::validation::Diagnostic;
use crate::validation::FragmentRegistry;
use crate::validation::TypeContext;
use crate::validation::TypeInfo;

/// Everything a [`ValidationRule`](crate::validation::ValidationRule) can see
/// (and report to) while a document is walked.
pub struct ValidationContext<'a> {
    diagnostics: Vec<Diagnostic>,
    fragments: &'a FragmentRegistry<'a>,
    schema: &'a Schema,
    type_info: TypeInfo<'a>,
}
impl<'a> ValidationContext<'a> {
    pub fn current_type(&self) -> TypeContext<'a> {
        self.type_info.current_type()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn fragments(&self) -> &'a FragmentRegistry<'a> {
        self.fragments
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn new(schema: &'a Schema, fragments: &'a FragmentRegistry<'a>) -> Self {
        Self {
            diagnostics: vec![],
            fragments,
            schema,
            type_info: TypeInfo::new(schema),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::trace!("Reporting diagnostic: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    pub(crate) fn type_info_mut(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }
}
