// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Shim runtime configuration

use crate::error::{Error, Result};
use crate::js::BROWSER_GLOBALS;

/// Default name of the second global bound to the console facade
pub const DEFAULT_CONSOLE_ALIAS: &str = "logger";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct ShimConfig {
    /// Install `document`, `getComputedStyle`, `PIXI` and the other browser stubs
    pub install_browser_stubs: bool,
    /// Install the console facade and its alias
    pub install_console: bool,
    /// Global name bound to the same object as `console`
    pub console_alias: String,
    /// Maximum iterations of a single loop before the engine aborts the script
    pub loop_iteration_limit: Option<u64>,
    /// Maximum call depth before the engine aborts the script
    pub recursion_limit: Option<usize>,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            install_browser_stubs: true,
            install_console: true,
            console_alias: DEFAULT_CONSOLE_ALIAS.to_string(),
            loop_iteration_limit: None,
            recursion_limit: None,
        }
    }
}

impl ShimConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable the browser stubs
    pub fn install_browser_stubs(mut self, enabled: bool) -> Self {
        self.install_browser_stubs = enabled;
        self
    }

    /// Enable/disable the console facade
    pub fn install_console(mut self, enabled: bool) -> Self {
        self.install_console = enabled;
        self
    }

    /// Set the console alias name
    pub fn console_alias(mut self, alias: impl Into<String>) -> Self {
        self.console_alias = alias.into();
        self
    }

    /// Set loop iteration limit
    pub fn loop_iteration_limit(mut self, limit: u64) -> Self {
        self.loop_iteration_limit = Some(limit);
        self
    }

    /// Set recursion limit
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    /// Config for untrusted scripts: both shims plus engine limits
    pub fn sandboxed() -> Self {
        Self {
            loop_iteration_limit: Some(10_000_000),
            recursion_limit: Some(512),
            ..Default::default()
        }
    }

    /// Check the config before a runtime is built from it
    pub fn validate(&self) -> Result<()> {
        if self.install_console {
            if !is_identifier(&self.console_alias) {
                return Err(Error::config(format!(
                    "console alias '{}' is not a valid identifier",
                    self.console_alias
                )));
            }
            if self.console_alias == "console" {
                return Err(Error::config("console alias must differ from 'console'"));
            }
            let collides = BROWSER_GLOBALS.contains(&self.console_alias.as_str());
            if self.install_browser_stubs && collides {
                return Err(Error::config(format!(
                    "console alias '{}' collides with a browser global",
                    self.console_alias
                )));
            }
        }
        if self.loop_iteration_limit == Some(0) {
            return Err(Error::config("loop iteration limit must be positive"));
        }
        if self.recursion_limit == Some(0) {
            return Err(Error::config("recursion limit must be positive"));
        }
        Ok(())
    }
}

/// ASCII subset of the identifier grammar; enough for global names.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_config() {
        let config = ShimConfig::new()
            .console_alias("log")
            .install_browser_stubs(false);

        assert_eq!(config.console_alias, "log");
        assert!(!config.install_browser_stubs);
        assert!(config.install_console);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_alias() {
        assert!(ShimConfig::new().console_alias("1abc").validate().is_err());
        assert!(ShimConfig::new().console_alias("").validate().is_err());
        assert!(ShimConfig::new().console_alias("console").validate().is_err());
        assert!(ShimConfig::new()
            .console_alias("")
            .install_console(false)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_alias_colliding_with_browser_global() {
        for name in ["document", "PIXI", "FormData", "getComputedStyle"] {
            let err = ShimConfig::new().console_alias(name).validate().unwrap_err();
            assert!(matches!(err, Error::Config(_)));
        }
        assert!(ShimConfig::new()
            .console_alias("document")
            .install_browser_stubs(false)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_sandboxed_limits() {
        let config = ShimConfig::sandboxed();
        assert!(config.loop_iteration_limit.is_some());
        assert!(config.recursion_limit.is_some());
        assert!(config.validate().is_ok());
        assert!(ShimConfig::new().recursion_limit(0).validate().is_err());
    }
}
