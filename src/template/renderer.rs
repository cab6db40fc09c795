use std::borrow::Cow;
use std::fs;

use handlebars::Handlebars;
use tracing::debug;

use super::helpers::{ReadEnvHelper, ReadFileHelper};
use crate::config::{BodySource, Environment};
use crate::error::PluginError;

/// Renders comment bodies.
///
/// Templates see no data of their own; everything comes from the `readEnv`
/// and `readFile` helpers. Output is not HTML-escaped, and referencing an
/// undefined variable is an error.
pub struct TemplateRenderer {
    hb: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new(env: &Environment) -> Self {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        hb.register_escape_fn(handlebars::no_escape);
        hb.register_helper("readEnv", Box::new(ReadEnvHelper::new(env.clone())));
        hb.register_helper("readFile", Box::new(ReadFileHelper));

        Self { hb }
    }

    pub fn render(&self, source: &BodySource) -> Result<String, PluginError> {
        let template = load(source)?;
        let rendered = self.hb.render_template(&template, &())?;
        debug!(bytes = rendered.len(), "rendered comment body");
        Ok(rendered)
    }
}

fn load(source: &BodySource) -> Result<Cow<'_, str>, PluginError> {
    match source {
        BodySource::Inline(template) => Ok(Cow::Borrowed(template)),
        BodySource::File(path) => {
            debug!(path = %path.display(), "reading template file");
            fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| PluginError::Io {
                    path: path.clone(),
                    source,
                })
        }
    }
}
