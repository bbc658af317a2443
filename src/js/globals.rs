// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Global-object binding

use boa_engine::property::PropertyDescriptorBuilder;
use boa_engine::{js_string, Context, JsObject, JsString, JsValue as BoaJsValue};

use crate::error::{Error, Result};

/// Define `name` on the global object as a plain writable, enumerable,
/// configurable data property.
///
/// No existence check: whatever was bound before is replaced, read-only
/// bindings included. Only a non-configurable global refuses.
pub(crate) fn bind_global(
    context: &mut Context,
    name: &str,
    value: impl Into<BoaJsValue>,
) -> Result<()> {
    let global = context.global_object();
    let replaced = global
        .has_own_property(JsString::from(name), context)
        .unwrap_or(false);

    global
        .define_property_or_throw(
            JsString::from(name),
            PropertyDescriptorBuilder::new()
                .value(value)
                .writable(true)
                .enumerable(true)
                .configurable(true)
                .build(),
            context,
        )
        .map_err(|e| Error::install(name, e))?;

    tracing::debug!(binding = name, replaced, "Bound global");
    Ok(())
}

/// Look up the engine's `JSON.stringify`
pub(crate) fn json_stringify(context: &mut Context) -> Option<JsObject> {
    let json = context
        .global_object()
        .get(js_string!("JSON"), context)
        .ok()?;
    let stringify = json
        .as_object()?
        .get(js_string!("stringify"), context)
        .ok()?;
    stringify.as_callable().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boa_engine::Source;

    #[test]
    fn test_replaces_read_only_global() {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(
                "Object.defineProperty(globalThis, 'PIXI', \
                 { value: 1, writable: false, configurable: true });",
            ))
            .unwrap();

        bind_global(&mut context, "PIXI", js_string!("replaced")).unwrap();

        let value = context
            .eval(Source::from_bytes("PIXI = 'again'; PIXI"))
            .unwrap();
        assert_eq!(
            value.as_string().map(|s| s.to_std_string_escaped()),
            Some("again".to_string())
        );
    }

    #[test]
    fn test_non_configurable_global_refused() {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(
                "Object.defineProperty(globalThis, 'locked', { value: 1 });",
            ))
            .unwrap();

        let err = bind_global(&mut context, "locked", 2).unwrap_err();
        assert!(err.is_install_error());
    }
}
