// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JavaScript side of the shim, on boa_engine
//!
//! Installs the browser stubs and the console redirector into an engine
//! context and runs scripts against it.

mod browser_api;
mod class;
mod console;
mod globals;
mod runtime;
mod value;

pub use browser_api::{install_browser_compat_shim, BrowserGlobals, BROWSER_GLOBALS};
pub use console::{
    install_console_shim, render_arg, CaptureSink, ConsoleLevel, OutputLine, OutputSink,
    StdioSink, TracingSink, UNRENDERABLE,
};
pub use runtime::ShimRuntime;
pub use value::JsValue;
