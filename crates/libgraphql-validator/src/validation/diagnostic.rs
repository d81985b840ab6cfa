use crate::loc::SourcePosition;

/// A single problem found while validating an operation document.
///
/// `message` wording is stable and safe to match on. `locations` point at the
/// offending node(s) within the validated document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Diagnostic {
    pub(crate) locations: Vec<SourcePosition>,
    pub(crate) message: String,
}
impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        locations: Vec<SourcePosition>,
    ) -> Self {
        Self {
            locations,
            message: message.into(),
        }
    }

    pub(crate) fn at_ast_pos(
        message: impl Into<String>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::new(message, vec![SourcePosition::from_ast_pos(pos)])
    }

    pub fn locations(&self) -> &[SourcePosition] {
        self.locations.as_slice()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message.as_str())?;
        if let [first, rest @ ..] = self.locations.as_slice() {
            write!(f, " ({first}")?;
            for location in rest {
                write!(f, ", {location}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
