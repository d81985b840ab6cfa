use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_validator::ast;
use libgraphql_validator::schema::SchemaBuilder;
use libgraphql_validator::Diagnostic;
use libgraphql_validator::Validator;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files to validate operations \
             against.",
        long,
        num_args = 1..,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL operation files or directories \
             containing GraphQL operation files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file validated as a GraphQL file -- even
        // if its file extension doesn't match one of the file extensions
        // specified in `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = 0;
            file_paths.push(first_arg_path.to_owned());
        }

        (file_paths, num_non_graphql_files)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        log::debug!("Loading {} schema files...", self.schema.len());
        let schema = match SchemaBuilder::from_files(&self.schema)
            .and_then(|builder| builder.build()) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {err:#?}",
                output_utils::RED_X,
            )),
        };
        let validator = Validator::new(&schema);

        let mut errors: Vec<anyhow::Error> = vec![];
        let (file_paths, num_non_graphql_files) =
            self.collect_file_paths(&mut errors);
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let mut report_lines: Vec<String> = vec![];
        let mut num_definitions = 0;
        let mut num_files_with_diagnostics = 0;
        for file_path in &file_paths {
            let document = match load_document(file_path).await {
                Ok(document) => document,
                Err(err) => {
                    errors.push(err);
                    continue;
                },
            };
            num_definitions += document.definitions.len();

            let diagnostics = validator.validate(&document);
            log::debug!(
                "Found {} diagnostics in {file_path:#?}.",
                diagnostics.len(),
            );
            if !diagnostics.is_empty() {
                num_files_with_diagnostics += 1;
            }
            report_lines.extend(
                diagnostics.iter().map(|diag| format_diagnostic(file_path, diag)),
            );
        }
        report_lines.extend(errors.iter().map(|err| format!("{err:#}")));

        if !report_lines.is_empty() {
            return CommandResult::failure(
                report_lines.join("\n"),
                format_args!(
                    "{} Found {} validation errors in {} files and {} errors \
                    loading files.",
                    output_utils::RED_X,
                    report_lines.len() - errors.len(),
                    num_files_with_diagnostics,
                    errors.len(),
                ),
            );
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Loaded {} schema type definitions.\n",
                "  * Validated {} operation and fragment definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_graphql_files,
            schema.defined_types().len(),
            num_definitions,
        ))
    }
}

fn format_diagnostic(file_path: &Path, diagnostic: &Diagnostic) -> String {
    match diagnostic.locations().first() {
        Some(position) => format!(
            "{}:{}:{}: {}",
            file_path.display(),
            position.line,
            position.col,
            diagnostic.message(),
        ),
        None => format!("{}: {}", file_path.display(), diagnostic.message()),
    }
}

async fn load_document(
    file_path: &Path,
) -> anyhow::Result<ast::operation::Document> {
    let source = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    ast::operation::parse(source.as_str())
        .with_context(|| format!("Failed to parse {}", file_path.display()))
}
