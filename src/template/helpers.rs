use std::fs;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};

use crate::config::Environment;

/// `{{ readEnv "NAME" }}`: value of an environment variable, empty if unset.
#[derive(Clone)]
pub struct ReadEnvHelper {
    env: Environment,
}

impl ReadEnvHelper {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }
}

impl HelperDef for ReadEnvHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let name = string_param(h, "readEnv")?;
        out.write(self.env.get(name).unwrap_or_default())?;
        Ok(())
    }
}

/// `{{ readFile "path" }}`: file contents, empty if the file can't be read.
#[derive(Clone, Copy)]
pub struct ReadFileHelper;

impl HelperDef for ReadFileHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let path = string_param(h, "readFile")?;
        let contents = fs::read(path).unwrap_or_default();
        out.write(&String::from_utf8_lossy(&contents))?;
        Ok(())
    }
}

fn string_param<'a>(h: &'a Helper<'_>, helper: &'static str) -> Result<&'a str, RenderError> {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, 0))?;

    param
        .value()
        .as_str()
        .ok_or_else(|| RenderErrorReason::InvalidParamType("string").into())
}
