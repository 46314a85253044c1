use anyhow::Context;
use std::path::Path;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;

/// Default cap on the size of a single query document.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

/// Where a command reads its query document from.
#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
    #[arg(
        help="Path to a query document, or `-` to read from stdin.",
        name="PATH",
    )]
    pub input: String,

    #[arg(
        default_value_t=DEFAULT_MAX_INPUT_BYTES,
        help="Refuse to read documents larger than this many bytes.",
        long,
    )]
    pub max_input_bytes: u64,
}

impl InputArgs {
    /// Human-readable name of the input for diagnostics.
    pub fn display_name(&self) -> &str {
        if self.input == "-" {
            "<stdin>"
        } else {
            &self.input
        }
    }

    pub async fn read(&self) -> anyhow::Result<String> {
        if self.input == "-" {
            read_stdin(self.max_input_bytes).await
        } else {
            read_file(Path::new(&self.input), self.max_input_bytes).await
        }
    }
}

/// Reads a whole file as UTF-8, refusing files over `max_bytes`.
pub(crate) async fn read_file(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to stat {path:?}"))?;
    if metadata.len() > max_bytes {
        anyhow::bail!(
            "{path:?} is {} bytes, which exceeds --max-input-bytes ({max_bytes})",
            metadata.len(),
        );
    }
    log::trace!("Reading {} bytes from {path:?}.", metadata.len());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {path:?} as UTF-8 text"))
}

async fn read_stdin(max_bytes: u64) -> anyhow::Result<String> {
    read_capped(tokio::io::stdin(), "stdin", max_bytes).await
}

/// Reads `reader` to the end, refusing more than `max_bytes`. The size is
/// checked before decoding so a cut through a multi-byte character still
/// reports the size limit.
async fn read_capped<R: AsyncRead + Unpin>(
    reader: R,
    name: &str,
    max_bytes: u64,
) -> anyhow::Result<String> {
    let mut bytes = vec![];
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .await
        .with_context(|| format!("Failed to read {name}"))?;
    if bytes.len() as u64 > max_bytes {
        anyhow::bail!("{name} exceeds --max-input-bytes ({max_bytes})");
    }
    String::from_utf8(bytes).with_context(|| format!("Failed to read {name} as UTF-8 text"))
}
