// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Console redirector
//!
//! Scripts get a `console` whose methods render every argument with
//! `JSON.stringify`, join them with spaces and hand the line to a host
//! [`OutputSink`]. A second global name points at the very same object.
//!
//! Arguments `JSON.stringify` rejects (cycles, BigInt) or turns into
//! `undefined` (functions, symbols, `undefined` itself) are rendered with
//! plain string coercion instead; if even that throws, `[object]` is
//! printed. The console never throws back into the script.

use std::io::Write;
use std::sync::Arc;

use boa_engine::object::FunctionObjectBuilder;
use boa_engine::{Context, JsObject, JsResult, JsString, JsValue as BoaJsValue, NativeFunction};
use boa_gc::{Finalize, Trace};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::globals::{bind_global, json_stringify};
use crate::error::{Error, Result};

/// Rendering used when an argument cannot be rendered at all
pub const UNRENDERABLE: &str = "[object]";

/// Host output primitive: one call per console line
pub trait OutputSink: Send + Sync {
    /// Write `text` (already newline-terminated) to the normal or error stream
    fn print(&self, text: &str, is_error: bool);
}

/// Console log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleLevel {
    Log,
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleLevel {
    pub const ALL: [ConsoleLevel; 5] = [
        ConsoleLevel::Log,
        ConsoleLevel::Debug,
        ConsoleLevel::Info,
        ConsoleLevel::Warn,
        ConsoleLevel::Error,
    ];

    /// Method name on the console object
    pub fn method(self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Debug => "debug",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
        }
    }

    /// Line prefix
    pub fn tag(self) -> &'static str {
        match self {
            ConsoleLevel::Log | ConsoleLevel::Debug | ConsoleLevel::Info => "[out]",
            ConsoleLevel::Warn => "[warn]",
            ConsoleLevel::Error => "[err]",
        }
    }

    /// Whether the line goes to the error stream
    pub fn is_error(self) -> bool {
        matches!(self, ConsoleLevel::Warn | ConsoleLevel::Error)
    }

    /// Full line for already-rendered arguments
    pub fn format_line<S: AsRef<str>>(self, rendered: &[S]) -> String {
        let joined = rendered
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}: {}\n", self.tag(), joined)
    }
}

/// Writes to the process stdout/stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn print(&self, text: &str, is_error: bool) {
        let result = if is_error {
            let mut stderr = std::io::stderr().lock();
            stderr.write_all(text.as_bytes()).and_then(|_| stderr.flush())
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush())
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, is_error, "Failed to write console output");
        }
    }
}

/// Forwards console lines as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn print(&self, text: &str, is_error: bool) {
        let line = text.trim_end_matches('\n');
        if is_error {
            tracing::warn!(target: "vtt_shim::script", "{}", line);
        } else {
            tracing::info!(target: "vtt_shim::script", "{}", line);
        }
    }
}

/// One line captured by a [`CaptureSink`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub is_error: bool,
}

/// Records every line; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<RwLock<Vec<OutputLine>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get captured lines
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines.read().clone()
    }

    /// Everything written to the normal stream, concatenated
    pub fn stdout(&self) -> String {
        self.collect(false)
    }

    /// Everything written to the error stream, concatenated
    pub fn stderr(&self) -> String {
        self.collect(true)
    }

    fn collect(&self, is_error: bool) -> String {
        self.lines
            .read()
            .iter()
            .filter(|line| line.is_error == is_error)
            .map(|line| line.text.as_str())
            .collect()
    }

    /// Clear captured lines
    pub fn clear(&self) {
        self.lines.write().clear();
    }
}

impl OutputSink for CaptureSink {
    fn print(&self, text: &str, is_error: bool) {
        self.lines.write().push(OutputLine {
            text: text.to_string(),
            is_error,
        });
    }
}

/// State captured by each console method
#[derive(Clone, Trace, Finalize)]
struct ConsoleMethod {
    #[unsafe_ignore_trace]
    level: ConsoleLevel,
    #[unsafe_ignore_trace]
    sink: Arc<dyn OutputSink>,
    /// `JSON.stringify` as it was at install time
    stringify: Option<JsObject>,
}

fn forward(
    _this: &BoaJsValue,
    args: &[BoaJsValue],
    method: &ConsoleMethod,
    context: &mut Context,
) -> JsResult<BoaJsValue> {
    let rendered = args
        .iter()
        .map(|arg| render_arg(arg, method.stringify.as_ref(), context))
        .collect::<Vec<_>>();

    method
        .sink
        .print(&method.level.format_line(&rendered), method.level.is_error());

    Ok(BoaJsValue::undefined())
}

/// Structural rendering of one argument, with the fallbacks described in
/// the module docs.
pub fn render_arg(
    value: &BoaJsValue,
    stringify: Option<&JsObject>,
    context: &mut Context,
) -> String {
    if let Some(stringify) = stringify {
        if let Ok(rendered) = stringify.call(&BoaJsValue::undefined(), &[value.clone()], context) {
            if let Some(s) = rendered.as_string() {
                return s.to_std_string_escaped();
            }
        }
    }

    if value.is_symbol() {
        return value.display().to_string();
    }

    value
        .to_string(context)
        .map(|s| s.to_std_string_escaped())
        .unwrap_or_else(|_| UNRENDERABLE.to_string())
}

/// Install the console facade as `console` and `alias`.
///
/// Both names are bound to one object, so a method replaced through one
/// name is seen through the other. Returns that object.
pub fn install_console_shim(
    context: &mut Context,
    sink: Arc<dyn OutputSink>,
    alias: &str,
) -> Result<JsObject> {
    let stringify = json_stringify(context);
    if stringify.is_none() {
        tracing::warn!("JSON.stringify unavailable; console arguments use string coercion");
    }

    let console = JsObject::with_object_proto(context.intrinsics());

    for level in ConsoleLevel::ALL {
        let method = ConsoleMethod {
            level,
            sink: sink.clone(),
            stringify: stringify.clone(),
        };
        let function = FunctionObjectBuilder::new(
            context.realm(),
            NativeFunction::from_copy_closure_with_captures(forward, method),
        )
        .name(JsString::from(level.method()))
        .length(0)
        .constructor(false)
        .build();

        console
            .set(JsString::from(level.method()), function, true, context)
            .map_err(|e| Error::install(format!("console.{}", level.method()), e))?;
    }

    bind_global(context, "console", console.clone())?;
    bind_global(context, alias, console.clone())?;

    tracing::debug!(alias, "Installed console redirector");

    Ok(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boa_engine::Source;

    fn installed() -> (Context, CaptureSink) {
        let mut context = Context::default();
        let sink = CaptureSink::new();
        install_console_shim(&mut context, Arc::new(sink.clone()), "logger").unwrap();
        (context, sink)
    }

    fn run(context: &mut Context, code: &str) {
        context.eval(Source::from_bytes(code)).unwrap();
    }

    #[test]
    fn test_info_line() {
        let (mut context, sink) = installed();
        run(&mut context, r#"console.info("a", 1, {x: 1})"#);

        assert_eq!(
            sink.lines(),
            vec![OutputLine {
                text: "[out]: \"a\" 1 {\"x\":1}\n".to_string(),
                is_error: false,
            }]
        );
    }

    #[test]
    fn test_error_and_warn_lines() {
        let (mut context, sink) = installed();
        run(&mut context, r#"console.error("a", 1, {x: 1}); console.warn([1, "b"]);"#);

        let lines = sink.lines();
        assert_eq!(lines[0].text, "[err]: \"a\" 1 {\"x\":1}\n");
        assert!(lines[0].is_error);
        assert_eq!(lines[1].text, "[warn]: [1,\"b\"]\n");
        assert!(lines[1].is_error);
        assert_eq!(sink.stdout(), "");
    }

    #[test]
    fn test_alias_is_same_object() {
        let (mut context, sink) = installed();
        run(&mut context, "if (console !== logger) throw new Error('not aliased');");

        run(&mut context, "logger.info('via alias'); console.info('via alias');");
        let lines = sink.lines();
        assert_eq!(lines[0], lines[1]);

        run(&mut context, "logger.info = function () { return 7; };");
        let value = context
            .eval(Source::from_bytes("console.info()"))
            .unwrap();
        assert_eq!(value.as_number(), Some(7.0));
    }

    #[test]
    fn test_unserializable_arguments_fall_back() {
        let (mut context, sink) = installed();
        run(
            &mut context,
            "const a = {}; a.self = a; console.log(a, undefined, 10n, Symbol('s'));",
        );

        assert_eq!(
            sink.stdout(),
            "[out]: [object Object] undefined 10 Symbol(s)\n"
        );
    }

    #[test]
    fn test_no_arguments() {
        let (mut context, sink) = installed();
        run(&mut context, "console.debug()");
        assert_eq!(sink.stdout(), "[out]: \n");
    }

    #[test]
    fn test_reinstall_overwrites() {
        let (mut context, first) = installed();
        let second = CaptureSink::new();
        install_console_shim(&mut context, Arc::new(second.clone()), "logger").unwrap();

        run(&mut context, "console.info(1)");
        assert!(first.lines().is_empty());
        assert_eq!(second.stdout(), "[out]: 1\n");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(ConsoleLevel::Error.format_line(&["a", "b"]), "[err]: a b\n");
        assert!(!ConsoleLevel::Log.is_error());
        assert!(ConsoleLevel::Warn.is_error());
    }
}
