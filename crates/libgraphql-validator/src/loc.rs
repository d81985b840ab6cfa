use std::path::Path;
use std::path::PathBuf;

/// A 1-based line/column pair pointing into some GraphQL source text.
///
/// Very similar to [`graphql_parser::Pos`], but serializable and ordered so
/// that it can be carried on [`Diagnostic`](crate::Diagnostic)s.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourcePosition {
    pub line: usize,
    pub col: usize,
}
impl SourcePosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub(crate) fn from_ast_pos(pos: &graphql_parser::Pos) -> Self {
        Self {
            line: pos.line,
            col: pos.column,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A [`SourcePosition`] within a specific schema file (if the schema content
/// was loaded from a file at all).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub file: Option<PathBuf>,
    pub position: SourcePosition,
}

/// Indicates where some schema item (type, field, parameter, ...) was defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Built into every schema (e.g. the `Int` scalar).
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition {
            file: file_path.map(|p| p.to_path_buf()),
            position: SourcePosition::from_ast_pos(pos),
        })
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(file_pos) => Some(file_pos),
        }
    }
}
