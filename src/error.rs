use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a comment from being posted.
///
/// None of these are retried; they all propagate to `main`, which prints the
/// message and exits non-zero.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A required option is missing, or two exclusive options are both set.
    #[error("{0}")]
    Config(String),

    #[error("failed to read template file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template")]
    Template(#[from] handlebars::RenderError),

    /// Connection, DNS, or timeout failure talking to the forge.
    #[error("failed to send comment")]
    Network(#[from] reqwest::Error),

    /// The forge answered with something other than `201 Created`.
    #[error("error posting comment (HTTP {status}){}", detail(.message))]
    Remote { status: u16, message: String },
}

impl PluginError {
    pub fn config(message: impl Into<String>) -> Self {
        PluginError::Config(message.into())
    }
}

fn detail(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}
