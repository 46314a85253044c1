use crate::input::InputArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use pushql_parser::Parser;

#[derive(Debug, clap::Args)]
pub(crate) struct AstCmd {
    #[command(flatten)]
    input: InputArgs,

    #[arg(help="Print the AST as JSON instead of Rust debug syntax.", long)]
    json: bool,
}

#[inherent::inherent]
impl RunnableCommand for AstCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match self.input.read().await {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let result = Parser::new(&source).parse();
        let rendered = if self.json {
            match serde_json::to_string_pretty(result.ast()) {
                Ok(json) => json,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize AST: {e}",
                    output_utils::RED_X,
                )),
            }
        } else {
            format!("{:#?}", result.ast())
        };

        // The partial AST is still printed so the failure can be inspected.
        let diagnostics = match result.error() {
            Some(error) => {
                log::debug!(
                    "Parse of {} failed: {}",
                    self.input.display_name(),
                    error.format_oneline(),
                );
                vec![format!(
                    "{} {}:\n{}",
                    output_utils::RED_X,
                    self.input.display_name(),
                    error.format_detailed(Some(&source)),
                )]
            },
            None => vec![],
        };
        CommandResult::with_diagnostics(rendered, diagnostics)
    }
}
