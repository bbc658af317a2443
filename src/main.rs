// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! vtt-shim CLI - run browser-flavored scripts with the shims installed

use std::env;
use std::process::ExitCode;

use vtt_shim::{JsValue, ShimConfig, ShimRuntime};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vtt_shim=info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let (config, rest) = match parse_flags(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            return ExitCode::from(1);
        }
    };

    let Some(command) = rest.first() else {
        print_usage();
        return ExitCode::from(1);
    };

    match command.as_str() {
        "run" => {
            let Some(path) = rest.get(1) else {
                eprintln!("Usage: vtt-shim run <file>");
                return ExitCode::from(1);
            };
            run_file(config, path)
        }
        "eval" => {
            if rest.len() < 2 {
                eprintln!("Usage: vtt-shim eval <code>");
                return ExitCode::from(1);
            }
            eval_code(config, &rest[1..].join(" "))
        }
        "globals" => list_globals(config),
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("vtt-shim {}", vtt_shim::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

/// Split leading option flags from the command and its arguments
fn parse_flags(args: &[String]) -> Result<(ShimConfig, Vec<String>), String> {
    let mut config = ShimConfig::new();
    let mut iter = args.iter();
    let mut rest = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-console" => config = config.install_console(false),
            "--no-browser" => config = config.install_browser_stubs(false),
            "--sandbox" => {
                config = ShimConfig {
                    install_console: config.install_console,
                    install_browser_stubs: config.install_browser_stubs,
                    console_alias: config.console_alias,
                    ..ShimConfig::sandboxed()
                }
            }
            "--alias" => {
                let alias = iter
                    .next()
                    .ok_or_else(|| "--alias needs a name".to_string())?;
                config = config.console_alias(alias.clone());
            }
            _ => {
                rest.push(arg.clone());
                rest.extend(iter.by_ref().cloned());
            }
        }
    }

    Ok((config, rest))
}

fn print_usage() {
    println!(
        r#"vtt-shim - Run browser-flavored scripts with compatibility shims

USAGE:
    vtt-shim [OPTIONS] <COMMAND>

COMMANDS:
    run <file>      Execute a script file
    eval <code>     Evaluate code and print the result
    globals         List the globals the shims install
    help            Show this help message
    version         Show version information

OPTIONS:
    --no-console    Do not install the console redirector
    --no-browser    Do not install the browser stubs
    --alias <name>  Second global name for the console (default: logger)
    --sandbox       Apply loop and recursion limits

EXAMPLES:
    vtt-shim run main.js
    vtt-shim eval "getComputedStyle(document.documentElement).getPropertyValue('width')"
    vtt-shim --alias log eval "log.info('hi')"
"#
    );
}

fn build_runtime(config: ShimConfig) -> Option<ShimRuntime> {
    match ShimRuntime::with_stdio(config) {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            eprintln!("Failed to create runtime: {}", e);
            None
        }
    }
}

fn run_file(config: ShimConfig, path: &str) -> ExitCode {
    let Some(mut runtime) = build_runtime(config) else {
        return ExitCode::from(1);
    };

    match runtime.run_file(path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            if let Some(script) = e.script() {
                eprintln!("  in {}", script);
            }
            ExitCode::from(1)
        }
    }
}

fn eval_code(config: ShimConfig, code: &str) -> ExitCode {
    let Some(mut runtime) = build_runtime(config) else {
        return ExitCode::from(1);
    };

    match runtime.execute(code) {
        Ok(JsValue::Undefined) => ExitCode::SUCCESS,
        Ok(value) => {
            println!("{}", value.to_json());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn list_globals(config: ShimConfig) -> ExitCode {
    let Some(runtime) = build_runtime(config) else {
        return ExitCode::from(1);
    };

    for name in runtime.installed_globals() {
        println!("{}", name);
    }
    ExitCode::SUCCESS
}
