use std::path::PathBuf;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Where report lines go: stdout, or a file that is truncated on the first write
/// of a run and appended to afterwards
pub struct OutputSink {
    path: Option<PathBuf>,
    started: bool,
}

impl OutputSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        OutputSink {
            path,
            started: false,
        }
    }

    /// Write `lines`, each followed by a newline
    pub async fn write_lines(&mut self, lines: &[String]) -> std::io::Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(!self.started)
                    .append(self.started)
                    .open(path)
                    .await?;
                write_to(&mut file, lines).await?;
                debug!("Wrote {} lines to {}", lines.len(), path.display());
            }
            None => {
                let mut stdout = tokio::io::stdout();
                write_to(&mut stdout, lines).await?;
            }
        }
        self.started = true;
        Ok(())
    }
}

async fn write_to<W: AsyncWrite + Unpin>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    let mut text = lines.join("\n");
    text.push('\n');
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}
