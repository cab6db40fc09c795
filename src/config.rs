use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use clap::Args;

use crate::error::PluginError;
use crate::gitea::types::CommentTarget;

/// Plugin options, read from the `PLUGIN_*` / `DRONE_*` environment
/// variables a CI runner exports for each step.
#[derive(Args, Debug, Clone, Default)]
pub struct PluginArgs {
    /// Base URL of the Gitea instance
    #[arg(long, env = "PLUGIN_URL")]
    pub url: Option<String>,

    /// Access token sent as `Authorization: token <TOKEN>`
    #[arg(long, env = "PLUGIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Inline comment template
    #[arg(long, env = "PLUGIN_BODY")]
    pub body: Option<String>,

    /// Path to a comment template file
    #[arg(long, env = "PLUGIN_BODY_FILE")]
    pub body_file: Option<String>,

    /// Repository owner
    #[arg(long, env = "DRONE_REPO_OWNER")]
    pub repo_owner: Option<String>,

    /// Repository name
    #[arg(long, env = "DRONE_REPO_NAME")]
    pub repo_name: Option<String>,

    /// Pull request number
    #[arg(long, env = "DRONE_PULL_REQUEST")]
    pub pull_request: Option<String>,
}

/// Where the comment template comes from
#[derive(Debug, Clone, PartialEq)]
pub enum BodySource {
    Inline(String),
    File(PathBuf),
}

/// Validated configuration for a single comment run
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub target: CommentTarget,
    pub body: BodySource,
}

impl Config {
    /// Validate raw options. Checks run in a fixed order and the first
    /// failure is returned. Empty values count as unset.
    pub fn from_args(args: PluginArgs) -> Result<Self, PluginError> {
        let base_url =
            non_empty(args.url).ok_or_else(|| PluginError::config("url is not set"))?;
        let token =
            non_empty(args.token).ok_or_else(|| PluginError::config("token is not set"))?;
        let pull_request = non_empty(args.pull_request)
            .ok_or_else(|| PluginError::config("empty pull request"))?;

        let body = match (non_empty(args.body), non_empty(args.body_file)) {
            (Some(_), Some(_)) => {
                return Err(PluginError::config(
                    "body and body_file are mutually exclusive",
                ));
            }
            (Some(inline), None) => BodySource::Inline(inline),
            (None, Some(path)) => BodySource::File(PathBuf::from(path)),
            (None, None) => return Err(PluginError::config("body OR body_file must be set")),
        };

        // Owner and repo are always exported by the CI runner alongside the
        // pull request number, so they are not checked here.
        let target = CommentTarget {
            owner: args.repo_owner.unwrap_or_default(),
            repo: args.repo_name.unwrap_or_default(),
            pull_request,
        };

        Ok(Self {
            base_url,
            token,
            target,
            body,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Snapshot of the process environment, taken once at startup and handed to
/// the template helpers.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn capture() -> Self {
        // Variables that are not valid UTF-8 cannot be rendered into a
        // comment anyway.
        env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
