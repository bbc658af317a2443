// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser-API stub registry
//!
//! Binds `FormData`, `document`, `getComputedStyle`, `DOMParser`,
//! `HTMLElement`, `HTMLHtmlElement` and `PIXI` onto the global object so that
//! scripts written for a browser resolve those names. Nothing behind them
//! is real: style queries answer 0, `createElement` hands back a generic
//! element, and the rendering types construct empty objects. None of the
//! stubs ever throw.

use std::collections::HashMap;

use boa_engine::object::{FunctionObjectBuilder, ObjectInitializer};
use boa_engine::property::Attribute;
use boa_engine::{
    js_string, Context, JsObject, JsResult, JsString, JsValue as BoaJsValue, NativeFunction,
};

use super::class::{InstanceTemplate, StubClass};
use super::globals::bind_global;
use super::value::JsValue;
use crate::dom::{Document, DomParser, ElementKind, FormData, StyleKind, STYLE_SENTINEL};
use crate::error::{Error, Result};
use crate::pixi::{RenderingNamespace, NAMESPACE_NAME, PRECISION_VERTEX, SETTINGS_NAME};

/// Every global name this registry binds
pub const BROWSER_GLOBALS: [&str; 7] = [
    FormData::CLASS_NAME,
    "document",
    "getComputedStyle",
    DomParser::CLASS_NAME,
    "HTMLElement",
    "HTMLHtmlElement",
    NAMESPACE_NAME,
];

/// Handles to the objects bound by [`install_browser_compat_shim`]
#[derive(Debug, Clone)]
pub struct BrowserGlobals {
    /// The `document` singleton
    pub document: JsObject,
    /// The `PIXI` namespace
    pub pixi: JsObject,
}

/// Install the browser stubs into `context`'s global object.
///
/// Existing bindings with the same names are overwritten; calling this
/// twice simply replaces the first set.
pub fn install_browser_compat_shim(context: &mut Context) -> Result<BrowserGlobals> {
    let form_data = StubClass::builder(FormData::CLASS_NAME)
        .build(context)
        .map_err(|e| Error::install(FormData::CLASS_NAME, e))?;
    bind_global(context, FormData::CLASS_NAME, form_data.constructor().clone())?;

    let styles = install_style_classes(context)?;
    let elements = install_element_classes(context, &styles[&StyleKind::Css2Properties])?;

    let document = install_document(context, &elements)?;
    install_computed_style(context, &styles[&StyleKind::Declaration])?;

    let dom_parser = StubClass::builder(DomParser::CLASS_NAME)
        .build(context)
        .map_err(|e| Error::install(DomParser::CLASS_NAME, e))?;
    bind_global(context, DomParser::CLASS_NAME, dom_parser.constructor().clone())?;

    let pixi = install_rendering_namespace(context, &RenderingNamespace::new())?;

    tracing::debug!(globals = ?BROWSER_GLOBALS, "Installed browser compatibility stubs");

    Ok(BrowserGlobals { document, pixi })
}

/// `CSSStyleDeclaration` and its `CSS2Properties` specialization. Neither is
/// bound as a global.
fn install_style_classes(context: &mut Context) -> Result<HashMap<StyleKind, StubClass>> {
    let mut classes = HashMap::new();

    for kind in [StyleKind::Declaration, StyleKind::Css2Properties] {
        let mut builder = StubClass::builder(kind.class_name());
        if let Some(parent) = kind.parent() {
            builder = builder.inherits(&classes[&parent]);
        }
        let class = builder
            .build(context)
            .map_err(|e| Error::install(kind.class_name(), e))?;
        classes.insert(kind, class);
    }

    classes[&StyleKind::Declaration]
        .define_method(
            "getPropertyValue",
            1,
            NativeFunction::from_fn_ptr(get_property_value),
            context,
        )
        .map_err(|e| Error::install("CSSStyleDeclaration.prototype.getPropertyValue", e))?;

    Ok(classes)
}

fn get_property_value(
    _this: &BoaJsValue,
    _args: &[BoaJsValue],
    _context: &mut Context,
) -> JsResult<BoaJsValue> {
    Ok(BoaJsValue::from(STYLE_SENTINEL))
}

/// `Element` → `HTMLElement` → `HTMLHtmlElement`, each owning a style
fn install_element_classes(
    context: &mut Context,
    inline_style: &StubClass,
) -> Result<HashMap<ElementKind, StubClass>> {
    let mut classes: HashMap<ElementKind, StubClass> = HashMap::new();

    for kind in ElementKind::ALL {
        let class = match kind.parent() {
            Some(parent) => StubClass::builder(kind.class_name())
                .inherits(&classes[&parent])
                .build(context),
            None => StubClass::builder(kind.class_name())
                .owns("style", inline_style)
                .build(context),
        }
        .map_err(|e| Error::install(kind.class_name(), e))?;

        if kind.is_global() {
            bind_global(context, kind.class_name(), class.constructor().clone())?;
        }
        classes.insert(kind, class);
    }

    Ok(classes)
}

/// Build the `HTMLDocument` class and bind one instance as `document`
fn install_document(
    context: &mut Context,
    elements: &HashMap<ElementKind, StubClass>,
) -> Result<JsObject> {
    let model = Document::new();
    let root = &elements[&model.document_element().kind()];
    let generic = &elements[&model.create_element("", None).kind()];

    let class = StubClass::builder("HTMLDocument")
        .owns("documentElement", root)
        .build(context)
        .map_err(|e| Error::install("HTMLDocument", e))?;

    class
        .define_method(
            "createElement",
            1,
            NativeFunction::from_copy_closure_with_captures(
                create_element,
                generic.template().clone(),
            ),
            context,
        )
        .map_err(|e| Error::install("HTMLDocument.prototype.createElement", e))?;

    let document = class
        .instantiate(context)
        .map_err(|e| Error::install("document", e))?;
    bind_global(context, "document", document.clone())?;

    Ok(document)
}

/// `document.createElement(tagName, options)`; both arguments are ignored.
fn create_element(
    _this: &BoaJsValue,
    _args: &[BoaJsValue],
    element: &InstanceTemplate,
    context: &mut Context,
) -> JsResult<BoaJsValue> {
    Ok(element.instantiate(context)?.into())
}

/// `getComputedStyle(...args)`; always a fresh declaration.
fn install_computed_style(context: &mut Context, declaration: &StubClass) -> Result<()> {
    let function = FunctionObjectBuilder::new(
        context.realm(),
        NativeFunction::from_copy_closure_with_captures(
            |_, _, style: &InstanceTemplate, context| Ok(style.instantiate(context)?.into()),
            declaration.template().clone(),
        ),
    )
    .name(js_string!("getComputedStyle"))
    .length(1)
    .constructor(false)
    .build();

    bind_global(context, "getComputedStyle", function)
}

/// `PIXI` with one placeholder class per rendering type and `settings`
fn install_rendering_namespace(
    context: &mut Context,
    namespace: &RenderingNamespace,
) -> Result<JsObject> {
    let mut constructors = Vec::with_capacity(namespace.types.len());
    for rendering_type in &namespace.types {
        let binding = format!("{}.{}", NAMESPACE_NAME, rendering_type.name());
        let class = StubClass::builder(rendering_type.name())
            .build(context)
            .map_err(|e| Error::install(binding, e))?;
        constructors.push((rendering_type.name(), class.constructor().clone()));
    }

    let precision_vertex = JsValue::from(namespace.settings.precision_vertex.clone())
        .to_boa(context)
        .map_err(|e| Error::install(PRECISION_VERTEX, e))?;
    let settings = ObjectInitializer::new(context)
        .property(JsString::from(PRECISION_VERTEX), precision_vertex, Attribute::all())
        .build();

    let mut pixi = ObjectInitializer::new(context);
    for (name, constructor) in constructors {
        pixi.property(JsString::from(name), constructor, Attribute::all());
    }
    let pixi = pixi
        .property(JsString::from(SETTINGS_NAME), settings, Attribute::all())
        .build();

    bind_global(context, NAMESPACE_NAME, pixi.clone())?;

    Ok(pixi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boa_engine::Source;

    fn installed() -> Context {
        let mut context = Context::default();
        install_browser_compat_shim(&mut context).unwrap();
        context
    }

    fn eval(context: &mut Context, code: &str) -> JsValue {
        let value = context.eval(Source::from_bytes(code)).unwrap();
        JsValue::from_boa(&value, context)
    }

    fn assert_true(context: &mut Context, code: &str) {
        assert_eq!(eval(context, code), JsValue::Boolean(true), "{}", code);
    }

    #[test]
    fn test_all_globals_resolve() {
        let mut context = installed();
        for name in BROWSER_GLOBALS {
            assert_true(&mut context, &format!("typeof {} !== 'undefined'", name));
        }
    }

    #[test]
    fn test_computed_style_sentinel() {
        let mut context = installed();
        assert_eq!(
            eval(&mut context, "getComputedStyle().getPropertyValue('width')"),
            JsValue::Number(0.0)
        );
        assert_eq!(
            eval(
                &mut context,
                "getComputedStyle(document.documentElement, null, 42).getPropertyValue()"
            ),
            JsValue::Number(0.0)
        );
        assert_true(&mut context, "getComputedStyle() !== getComputedStyle()");
    }

    #[test]
    fn test_create_element_is_generic() {
        let mut context = installed();
        assert_true(
            &mut context,
            r#"
            const generic = Object.getPrototypeOf(document.createElement('p'));
            ['div', 'canvas', 'html', ''].every(tag => {
                const el = document.createElement(tag, { is: 'x-thing' });
                return el instanceof Object.getPrototypeOf(HTMLElement)
                    && !(el instanceof HTMLElement)
                    && Object.getPrototypeOf(el) === generic;
            })
            "#,
        );
    }

    #[test]
    fn test_elements_own_style() {
        let mut context = installed();
        assert_true(&mut context, "new HTMLElement().style !== null");
        assert_true(&mut context, "typeof new HTMLHtmlElement().style === 'object'");
        assert_true(&mut context, "new HTMLElement().style !== new HTMLElement().style");
        assert_true(&mut context, "Object.keys(document.createElement('div')).includes('style')");
        assert_eq!(
            eval(&mut context, "document.createElement('div').style.getPropertyValue('color')"),
            JsValue::Number(0.0)
        );
    }

    #[test]
    fn test_document_element_stable() {
        let mut context = installed();
        assert_true(&mut context, "document.documentElement === document.documentElement");
        assert_true(&mut context, "document.documentElement instanceof HTMLHtmlElement");
        assert_true(&mut context, "document.documentElement instanceof HTMLElement");
    }

    #[test]
    fn test_constructors_usable_with_new() {
        let mut context = installed();
        assert_true(&mut context, "new FormData() instanceof FormData");
        assert_true(&mut context, "new DOMParser() instanceof DOMParser");
        assert_true(&mut context, "Object.keys(new FormData()).length === 0");
        assert_true(
            &mut context,
            "class Custom extends HTMLElement { hello() { return 1; } }; \
             new Custom().hello() === 1",
        );
    }

    #[test]
    fn test_rendering_namespace() {
        let mut context = installed();
        assert_true(&mut context, "PIXI.settings.PRECISION_VERTEX === null");
        assert_true(
            &mut context,
            "['Shader', 'Container', 'Color', 'Point', 'Mesh', 'Polygon']
                .every(name => new PIXI[name]() instanceof PIXI[name])",
        );
    }

    #[test]
    fn test_overwrites_read_only_globals() {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(
                r#"
                for (const name of ['document', 'PIXI', 'FormData']) {
                    Object.defineProperty(globalThis, name, {
                        value: 1, writable: false, enumerable: false, configurable: true,
                    });
                }
                "#,
            ))
            .unwrap();

        install_browser_compat_shim(&mut context).unwrap();
        assert_true(&mut context, "typeof document.createElement === 'function'");
        assert_true(&mut context, "PIXI.settings.PRECISION_VERTEX === null");
        assert_true(&mut context, "new FormData() instanceof FormData");
        assert_true(&mut context, "Object.keys(globalThis).includes('PIXI')");
    }

    #[test]
    fn test_overwrites_existing_globals() {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes("globalThis.document = 'mine'; globalThis.PIXI = 1;"))
            .unwrap();
        let first = install_browser_compat_shim(&mut context).unwrap();
        assert_true(&mut context, "typeof document === 'object'");

        let second = install_browser_compat_shim(&mut context).unwrap();
        let current = context
            .global_object()
            .get(js_string!("document"), &mut context)
            .unwrap();
        assert!(BoaJsValue::same_value(&current, &second.document.clone().into()));
        assert!(!BoaJsValue::same_value(&current, &first.document.into()));
    }
}
