// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Script runtime with the compatibility shims installed

use std::path::Path;
use std::sync::Arc;

use boa_engine::{Context, JsObject, Source};

use super::browser_api::{install_browser_compat_shim, BrowserGlobals, BROWSER_GLOBALS};
use super::console::{install_console_shim, OutputSink, StdioSink};
use super::value::JsValue;
use crate::config::ShimConfig;
use crate::error::{Error, ErrorContext, Result};

/// One engine context, shimmed once at construction and kept for the
/// runtime's lifetime.
pub struct ShimRuntime {
    config: ShimConfig,
    context: Context,
    sink: Arc<dyn OutputSink>,
    browser: Option<BrowserGlobals>,
    console: Option<JsObject>,
}

impl ShimRuntime {
    /// Create a runtime and install the configured shims
    pub fn new(config: ShimConfig, sink: Arc<dyn OutputSink>) -> Result<Self> {
        config.validate()?;

        let mut context = Context::default();
        if let Some(limit) = config.loop_iteration_limit {
            context.runtime_limits_mut().set_loop_iteration_limit(limit);
        }
        if let Some(limit) = config.recursion_limit {
            context.runtime_limits_mut().set_recursion_limit(limit);
        }

        let mut runtime = Self {
            config,
            context,
            sink,
            browser: None,
            console: None,
        };
        runtime.install()?;

        Ok(runtime)
    }

    /// Create a runtime writing console output to stdout/stderr
    pub fn with_stdio(config: ShimConfig) -> Result<Self> {
        Self::new(config, Arc::new(StdioSink))
    }

    /// Create a runtime with default config
    pub fn default_runtime() -> Result<Self> {
        Self::with_stdio(ShimConfig::default())
    }

    fn install(&mut self) -> Result<()> {
        if self.config.install_browser_stubs {
            self.browser = Some(install_browser_compat_shim(&mut self.context)?);
        }
        if self.config.install_console {
            self.console = Some(install_console_shim(
                &mut self.context,
                self.sink.clone(),
                &self.config.console_alias,
            )?);
        }

        tracing::debug!(globals = ?self.installed_globals(), "Shims installed");
        Ok(())
    }

    /// Run the installers again. The new bindings replace the old ones;
    /// nothing is duplicated.
    pub fn reinstall(&mut self) -> Result<()> {
        self.install()
    }

    /// Execute JavaScript code
    pub fn execute(&mut self, code: &str) -> Result<JsValue> {
        let value = self
            .context
            .eval(Source::from_bytes(code))
            .map_err(|e| Error::js(e.to_string()))?;

        Ok(JsValue::from_boa(&value, &mut self.context))
    }

    /// Evaluate an expression and coerce the result to a string
    pub fn eval_to_string(&mut self, expression: &str) -> Result<String> {
        let value = self
            .context
            .eval(Source::from_bytes(expression))
            .map_err(|e| Error::js(e.to_string()))?;

        value
            .to_string(&mut self.context)
            .map(|s| s.to_std_string_escaped())
            .map_err(|e| Error::js(e.to_string()))
    }

    /// Read and execute a script file
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<JsValue> {
        let path = path.as_ref();
        let code = std::fs::read_to_string(path)?;
        let name = path.display().to_string();

        tracing::info!(script = %name, bytes = code.len(), "Running script");
        self.execute(&code).with_script(&name)
    }

    /// Names bound on the global object by the installed shims
    pub fn installed_globals(&self) -> Vec<&str> {
        let mut globals = Vec::new();
        if self.browser.is_some() {
            globals.extend(BROWSER_GLOBALS);
        }
        if self.console.is_some() {
            globals.push("console");
            globals.push(self.config.console_alias.as_str());
        }
        globals
    }

    /// Handles to the bound browser stubs, if installed
    pub fn browser_globals(&self) -> Option<&BrowserGlobals> {
        self.browser.as_ref()
    }

    /// The console facade, if installed
    pub fn console(&self) -> Option<&JsObject> {
        self.console.as_ref()
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Direct access to the engine context
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}
