use crate::input;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use pushql_parser::push::PushPlan;
use pushql_parser::push::PushResolver;
use pushql_parser::Parser;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct PlanCmd {
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
    query_file_exts: Vec<String>,

    #[arg(
        help="Also collect `@push` requests from inside the fragments that \
             spreads refer to.",
        long,
    )]
    follow_fragments: bool,

    #[arg(
        default_value_t=input::DEFAULT_MAX_INPUT_BYTES,
        help="Skip (with an error) documents larger than this many bytes.",
        long,
    )]
    max_input_bytes: u64,

    #[arg(help="Print the plans as JSON.", long)]
    json: bool,

    #[arg(
        help="Paths to one or more query documents or directories containing \
             query documents.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The outcome of planning one document.
struct FilePlan {
    path: PathBuf,
    push_paths: Vec<(String, String)>,
}

#[inherent::inherent]
impl RunnableCommand for PlanCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut diagnostics: Vec<String> = vec![];
        let file_paths = self.find_query_files(&mut diagnostics);
        log::debug!("Found {} query documents to plan.", file_paths.len());

        let mut plans = Vec::with_capacity(file_paths.len());
        for path in file_paths {
            let source = match input::read_file(&path, self.max_input_bytes).await {
                Ok(source) => source,
                Err(e) => {
                    diagnostics.push(format!("{} {e:#}", output_utils::RED_X));
                    plans.push(FilePlan { path, push_paths: vec![] });
                    continue;
                },
            };
            let push_paths = self.plan_document(&path, &source, &mut diagnostics);
            plans.push(FilePlan { path, push_paths });
        }

        let stdout = if self.json {
            match render_json(&plans) {
                Ok(json) => json,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize push plans: {e}",
                    output_utils::RED_X,
                )),
            }
        } else {
            render_text(&plans)
        };
        CommandResult::with_diagnostics(stdout, diagnostics)
    }
}

impl PlanCmd {
    /// Finds every query document located at or under each path argument.
    fn find_query_files(&self, diagnostics: &mut Vec<String>) -> Vec<PathBuf> {
        let query_file_exts: HashSet<String> =
            self.query_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let has_query_ext = path
                            .extension()
                            .is_some_and(|ext| query_file_exts.contains(ext.to_string_lossy().as_ref()));
                        if has_query_ext {
                            log::trace!("Found query document at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        diagnostics.push(format!("{} {e}", output_utils::RED_X));
                    },
                }
            }
        }

        // A single explicit file argument is planned even if its extension
        // is not one of --query-file-exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to plan {first_arg_path:#?} even though it \
                doesn't match any of the --query-file-exts ({}).",
                query_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        file_paths
    }

    /// Parses one document and returns its `(push_path, target_fragment)`
    /// pairs. A document that fails to parse gets an empty plan.
    fn plan_document(
        &self,
        path: &Path,
        source: &str,
        diagnostics: &mut Vec<String>,
    ) -> Vec<(String, String)> {
        let result = Parser::new(source).parse();
        let plan = match result.valid_ast() {
            Some(doc) => PushPlan::from_resources(
                PushResolver::new(doc)
                    .follow_fragments(self.follow_fragments)
                    .resolve(),
            ),
            None => {
                log::debug!("Falling back to an empty push plan for {path:#?}.");
                diagnostics.push(format!(
                    "{} {}:\n{}",
                    output_utils::RED_X,
                    path.display(),
                    result.format_error(Some(source)),
                ));
                PushPlan::empty()
            },
        };
        plan.entries()
            .iter()
            .map(|entry| (entry.push_path.clone(), entry.target_fragment.to_string()))
            .collect()
    }
}

fn render_text(plans: &[FilePlan]) -> String {
    let mut out = vec![];
    for plan in plans {
        out.push(format!("{}:", plan.path.display()));
        if plan.push_paths.is_empty() {
            out.push("  (nothing to push)".to_string());
        }
        for (push_path, target_fragment) in &plan.push_paths {
            out.push(format!("  {push_path}  ({target_fragment})"));
        }
    }
    let num_modules: usize = plans.iter().map(|plan| plan.push_paths.len()).sum();
    out.push(format!(
        "{} Planned {num_modules} module push(es) across {} documents.",
        output_utils::GREEN_CHECK,
        plans.len(),
    ));
    out.join("\n")
}

fn render_json(plans: &[FilePlan]) -> serde_json::Result<String> {
    let value: Vec<serde_json::Value> = plans
        .iter()
        .map(|plan| {
            serde_json::json!({
                "path": plan.path.display().to_string(),
                "push": plan.push_paths
                    .iter()
                    .map(|(push_path, target_fragment)| serde_json::json!({
                        "push_path": push_path,
                        "target_fragment": target_fragment,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&value)
}
