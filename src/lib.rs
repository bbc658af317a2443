// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # vtt-shim - Browser-API compatibility shim
//!
//! Lets scripts written for a browser run inside an embedded boa_engine
//! context. The shim binds placeholder versions of the browser globals those
//! scripts reach for and routes `console` to a host output primitive.
//!
//! ## What gets installed
//!
//! - `document` with `documentElement` and `createElement`
//! - `getComputedStyle`, whose results answer 0 for every property
//! - `FormData`, `DOMParser`, `HTMLElement`, `HTMLHtmlElement` constructors
//! - `PIXI` with placeholder rendering types and `settings.PRECISION_VERTEX = null`
//! - `console` (`log`, `debug`, `info`, `warn`, `error`) and an alias for it
//!
//! The stubs are shapes only. They never throw, and they never compute
//! anything real.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vtt_shim::{CaptureSink, ShimConfig, ShimRuntime};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = CaptureSink::new();
//!     let mut runtime = ShimRuntime::new(ShimConfig::default(), Arc::new(sink.clone()))?;
//!
//!     runtime.execute(
//!         "console.info(getComputedStyle(document.documentElement).getPropertyValue('width'))",
//!     )?;
//!     assert_eq!(sink.stdout(), "[out]: 0\n");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod js;
pub mod pixi;

// Re-exports for convenience

// Configuration
pub use config::{ShimConfig, DEFAULT_CONSOLE_ALIAS};

// Host-side stub model
pub use dom::{Document, DomParser, Element, ElementKind, FormData, StyleDeclaration};
pub use pixi::{RenderingNamespace, RenderingSettings, RenderingType};

// Errors
pub use error::{Error, ErrorContext, Result};

// JavaScript
pub use js::{install_browser_compat_shim, install_console_shim, BrowserGlobals};
pub use js::{CaptureSink, ConsoleLevel, OutputLine, OutputSink, StdioSink, TracingSink};
pub use js::{JsValue, ShimRuntime};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
