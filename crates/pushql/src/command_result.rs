use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Output on both streams. The command failed if anything went to
    /// stderr.
    pub fn with_diagnostics(stdout: String, diagnostics: Vec<String>) -> Self {
        if diagnostics.is_empty() {
            return Self {
                exit_code: ExitCode::SUCCESS,
                stderr: None,
                stdout: Some(stdout),
            };
        }
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(diagnostics.join("\n")),
            stdout: Some(stdout),
        }
    }
}
