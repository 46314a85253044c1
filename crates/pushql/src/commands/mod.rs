mod ast;
mod plan;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use ast::AstCmd;
use plan::PlanCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "pushql")]
pub(crate) enum CommandEnum {
    /// Print the token stream of a query document.
    Tokens(Box<TokensCmd>),

    /// Print the parsed AST of a query document.
    Ast(Box<AstCmd>),

    /// Print the deduplicated list of modules each document asks to push.
    Plan(Box<PlanCmd>),
}
impl CommandEnum {
    /// The subcommand name as typed on the command line.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Tokens(_) => "tokens",
            Self::Ast(_) => "ast",
            Self::Plan(_) => "plan",
        }
    }

    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Tokens(cmd) => cmd.run(cli).await,
            Self::Ast(cmd) => cmd.run(cli).await,
            Self::Plan(cmd) => cmd.run(cli).await,
        }
    }
}
