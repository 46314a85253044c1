use crate::input::InputArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use pushql_parser::token::Token;
use pushql_parser::token::TokenKind;
use pushql_parser::token_source::Lexer;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[command(flatten)]
    input: InputArgs,

    #[arg(help="Print the tokens as JSON.", long)]
    json: bool,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match self.input.read().await {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let tokens: Vec<Token<'_>> = Lexer::new(&source).collect();
        let num_illegal = tokens.iter().filter(|t| t.is(TokenKind::Illegal)).count();
        log::debug!(
            "Lexed {} tokens ({num_illegal} illegal) from {}.",
            tokens.len(),
            self.input.display_name(),
        );

        if self.json {
            return match serde_json::to_string_pretty(&tokens) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize tokens: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        CommandResult::stdout(format_args!("{}", format_tokens(&tokens)))
    }
}

/// One line per token: `line:col KIND literal`, with lexer notes indented
/// under illegal tokens.
fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut lines = Vec::with_capacity(tokens.len());
    for token in tokens {
        let position = &token.span.start_inclusive;
        let marker = if token.is(TokenKind::Illegal) {
            format!(" {}", output_utils::RED_X)
        } else {
            String::new()
        };
        lines.push(format!(
            "{}:{}\t{}\t{:?}{marker}",
            position.line() + 1,
            position.col() + 1,
            token.kind,
            token.literal(),
        ));
        for note in &token.error_notes {
            lines.push(format!("\t\t{:?}: {}", note.kind, note.message));
        }
    }
    lines.join("\n")
}
