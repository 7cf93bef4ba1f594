use async_trait::async_trait;
use tokio::process::Command;
use tracing::warn;

/// Renders speech-bubble text by invoking an external command.
///
/// Injected as a trait object so the test suite never spawns a real
/// process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Captured stdout on success; empty string on any failure.
    async fn render(&self, input: &str) -> String;
}

pub struct CowsayRenderer {
    command: String,
}

impl CowsayRenderer {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

/// Strips the input to `[A-Za-z0-9 ]` before it reaches the external
/// command, matching the original service's filter.
pub(crate) fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

#[async_trait]
impl Renderer for CowsayRenderer {
    async fn render(&self, input: &str) -> String {
        let message = sanitize(input);

        match Command::new(&self.command).arg(&message).output().await {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                warn!("Failed to run {}: {}", self.command, e);
                String::new()
            }
        }
    }
}
