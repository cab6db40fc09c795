use tracing::info;

use crate::config::{Config, Environment, PluginArgs};
use crate::error::PluginError;
use crate::gitea::client::GiteaClient;
use crate::template::renderer::TemplateRenderer;

/// Validate the options, then render and post the comment.
/// Returns the comment's URL (possibly empty).
pub async fn run(args: PluginArgs, env: &Environment) -> Result<String, PluginError> {
    let config = Config::from_args(args)?;
    post_comment(&config, env).await
}

/// Render the configured template and post it to the pull request.
pub async fn post_comment(config: &Config, env: &Environment) -> Result<String, PluginError> {
    let body = TemplateRenderer::new(env).render(&config.body)?;

    let client = GiteaClient::new(&config.base_url, &config.token)?;
    let comment = client.create_comment(&config.target, &body).await?;

    info!(
        owner = %config.target.owner,
        repo = %config.target.repo,
        pull_request = %config.target.pull_request,
        url = %comment.html_url,
        "comment posted"
    );

    Ok(comment.html_url)
}
