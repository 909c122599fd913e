use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_validation::document::DocumentBuilder;
use libgraphql_validation::schema::Schema;
use libgraphql_validation::schema::SchemaBuilder;
use libgraphql_validation::validation::DocumentValidator;
use libgraphql_validation::validation::ValidationResult;
use libgraphql_validation::validation::ValidatorConfig;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=ValidatorConfig::DEFAULT_POOL_CAPACITY,
        help="Maximum number of idle validation contexts kept for reuse.",
        long,
    )]
    pool_capacity: usize,

    #[arg(
        help="Paths to one or more schema (SDL) files or directories \
             containing schema files.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL documents which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    /// Find all GraphQL files recursively located at or under each of
    /// `paths`. Returns the files found and the number of non-file entries
    /// skipped.
    fn collect_graphql_files(
        &self,
        paths: &[PathBuf],
    ) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!("Scanning {} input paths...", paths.len());
        let mut num_skipped = 0;
        let mut file_paths = vec![];
        for path in paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Encountered an error while iterating recursive \
                    filesystem entities at/under {path:#?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    num_skipped += 1;
                    continue;
                }

                log::trace!("Found file at {entry_path:#?}.");
                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if has_graphql_ext {
                    file_paths.push(canonicalize(entry_path)?);
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file loaded as a GraphQL file -- even if
        // its file extension doesn't match one of the `graphql_file_exts`.
        if file_paths.is_empty()
            && paths.len() == 1
            && let Some(first_arg_path) = paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding with {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
        }

        Ok((file_paths, num_skipped))
    }

    async fn validate_documents(
        &self,
        schema: Arc<Schema>,
        document_paths: Vec<PathBuf>,
    ) -> anyhow::Result<Vec<(PathBuf, DocumentOutcome)>> {
        let validator = Arc::new(DocumentValidator::from_config(&ValidatorConfig {
            pool_capacity: self.pool_capacity,
            ..ValidatorConfig::default()
        }));

        // Validation is CPU-bound, so each document gets a blocking task.
        let tasks = document_paths.into_iter().map(|path| {
            let schema = Arc::clone(&schema);
            let validator = Arc::clone(&validator);
            tokio::task::spawn_blocking(move || {
                let outcome = match DocumentBuilder::from_file(path.as_path()) {
                    Ok(builder) => DocumentOutcome::Validated(
                        validator.validate(&schema, &builder.build()),
                    ),
                    Err(err) => DocumentOutcome::LoadFailed(err.to_string()),
                };
                (path, outcome)
            })
        }).collect::<Vec<_>>();

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            outcomes.push(task.await?);
        }
        Ok(outcomes)
    }

    async fn run_impl(&self) -> anyhow::Result<CommandResult> {
        let (schema_paths, _) = self.collect_graphql_files(&self.schema)?;
        log::debug!("Found {} schema files.", schema_paths.len());
        let schema = SchemaBuilder::from_files(&schema_paths)
            .context("Failed to load schema")?
            .build()
            .context("Failed to build schema")?;

        let (document_paths, num_skipped) =
            self.collect_graphql_files(&self.file_or_dir_paths)?;
        log::debug!(
            "Found {} GraphQL documents to be validated.",
            document_paths.len(),
        );
        let num_documents = document_paths.len();

        let outcomes = self.validate_documents(Arc::new(schema), document_paths).await?;

        let mut report = String::new();
        let mut num_errors = 0;
        let mut num_failed_documents = 0;
        for (path, outcome) in &outcomes {
            match outcome {
                DocumentOutcome::Validated(result) if result.is_valid() => {
                    log::debug!("{path:#?} is valid.");
                },
                DocumentOutcome::Validated(result) => {
                    num_failed_documents += 1;
                    writeln!(report, "{} {}", output_utils::RED_X, path.display())?;
                    for err in result.errors() {
                        num_errors += 1;
                        let location = err.locations()
                            .first()
                            .map(|loc| format!("{}:{}", loc.line, loc.col))
                            .unwrap_or_default();
                        writeln!(report, "    {location} {err} [{}]", err.rule())?;
                    }
                },
                DocumentOutcome::LoadFailed(err) => {
                    num_failed_documents += 1;
                    writeln!(report, "{} {}", output_utils::RED_X, path.display())?;
                    writeln!(report, "    {err}")?;
                },
            }
        }

        if num_failed_documents > 0 {
            Ok(CommandResult::failed_stdout(format_args!(
                "{report}{} Found {num_errors} validation errors in \
                {num_failed_documents} of {num_documents} documents.",
                output_utils::RED_X,
            )))
        } else {
            Ok(CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Validated {} documents.\n",
                    "  * Skipped {} non-file entries.",
                ),
                output_utils::GREEN_CHECK,
                num_documents,
                num_skipped,
            )))
        }
    }
}

#[derive(Debug)]
enum DocumentOutcome {
    LoadFailed(String),
    Validated(ValidationResult),
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.run_impl().await {
            Ok(result) => result,
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to canonicalize {path:#?}"))
}
