// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Placeholder classes: a prototype, a constructor usable with `new`, and
//! the objects every instance owns from construction.

use boa_engine::object::FunctionObjectBuilder;
use boa_engine::property::PropertyDescriptorBuilder;
use boa_engine::{
    js_string, Context, JsObject, JsResult, JsString, JsValue as BoaJsValue, NativeFunction,
};
use boa_gc::{Finalize, Trace};

/// How to build one instance
#[derive(Clone, Trace, Finalize)]
pub(crate) struct InstanceTemplate {
    prototype: JsObject,
    slots: Vec<OwnedSlot>,
}

/// A property holding an object created together with its owner
#[derive(Clone, Trace, Finalize)]
struct OwnedSlot {
    #[unsafe_ignore_trace]
    name: &'static str,
    template: InstanceTemplate,
}

impl InstanceTemplate {
    /// Create an instance with the class prototype
    pub(crate) fn instantiate(&self, context: &mut Context) -> JsResult<JsObject> {
        self.instantiate_with(self.prototype.clone(), context)
    }

    fn instantiate_with(&self, prototype: JsObject, context: &mut Context) -> JsResult<JsObject> {
        let instance = JsObject::with_null_proto();
        instance.set_prototype(Some(prototype));

        // Owned objects exist before the constructor returns, never lazily.
        for slot in &self.slots {
            let owned = slot.template.instantiate(context)?;
            instance.set(JsString::from(slot.name), owned, true, context)?;
        }

        Ok(instance)
    }
}

/// Constructor body shared by every placeholder class.
///
/// Called with `new`, boa passes `new.target` as `this`; its `prototype`
/// wins so that script subclasses (`class X extends HTMLElement {}`) get
/// their own methods.
fn construct(
    this: &BoaJsValue,
    _args: &[BoaJsValue],
    template: &InstanceTemplate,
    context: &mut Context,
) -> JsResult<BoaJsValue> {
    let mut prototype = template.prototype.clone();
    if let Some(target) = this.as_object() {
        if target.is_callable() {
            if let Some(proto) = target.get(js_string!("prototype"), context)?.as_object() {
                prototype = proto.clone();
            }
        }
    }

    Ok(template.instantiate_with(prototype, context)?.into())
}

/// A placeholder class installed in a context
#[derive(Clone, Trace, Finalize)]
pub(crate) struct StubClass {
    constructor: JsObject,
    template: InstanceTemplate,
}

impl StubClass {
    pub(crate) fn builder<'a>(name: &'static str) -> StubClassBuilder<'a> {
        StubClassBuilder {
            name,
            parent: None,
            slots: Vec::new(),
        }
    }

    pub(crate) fn constructor(&self) -> &JsObject {
        &self.constructor
    }

    pub(crate) fn prototype(&self) -> &JsObject {
        &self.template.prototype
    }

    pub(crate) fn template(&self) -> &InstanceTemplate {
        &self.template
    }

    pub(crate) fn instantiate(&self, context: &mut Context) -> JsResult<JsObject> {
        self.template.instantiate(context)
    }

    /// Add a non-enumerable method to the prototype
    pub(crate) fn define_method(
        &self,
        name: &'static str,
        length: usize,
        body: NativeFunction,
        context: &mut Context,
    ) -> JsResult<()> {
        let function = FunctionObjectBuilder::new(context.realm(), body)
            .name(JsString::from(name))
            .length(length)
            .constructor(false)
            .build();

        self.template.prototype.define_property_or_throw(
            JsString::from(name),
            PropertyDescriptorBuilder::new()
                .value(function)
                .writable(true)
                .enumerable(false)
                .configurable(true)
                .build(),
            context,
        )?;
        Ok(())
    }
}

/// Builder for [`StubClass`]
pub(crate) struct StubClassBuilder<'a> {
    name: &'static str,
    parent: Option<&'a StubClass>,
    slots: Vec<OwnedSlot>,
}

impl<'a> StubClassBuilder<'a> {
    /// Inherit prototype and statics from `parent`
    pub(crate) fn inherits(mut self, parent: &'a StubClass) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Every instance gets its own `class` instance under `name`
    pub(crate) fn owns(mut self, name: &'static str, class: &StubClass) -> Self {
        self.slots.push(OwnedSlot {
            name,
            template: class.template.clone(),
        });
        self
    }

    pub(crate) fn build(self, context: &mut Context) -> JsResult<StubClass> {
        let prototype = JsObject::with_object_proto(context.intrinsics());
        let mut slots = Vec::new();
        if let Some(parent) = self.parent {
            prototype.set_prototype(Some(parent.prototype().clone()));
            slots.extend(parent.template.slots.iter().cloned());
        }
        slots.extend(self.slots);

        let template = InstanceTemplate { prototype, slots };

        let function = FunctionObjectBuilder::new(
            context.realm(),
            NativeFunction::from_copy_closure_with_captures(construct, template.clone()),
        )
        .name(JsString::from(self.name))
        .length(0)
        .constructor(true)
        .build();
        let constructor: JsObject = (*function).clone();

        if let Some(parent) = self.parent {
            constructor.set_prototype(Some(parent.constructor().clone()));
        }

        constructor.define_property_or_throw(
            js_string!("prototype"),
            PropertyDescriptorBuilder::new()
                .value(template.prototype.clone())
                .writable(false)
                .enumerable(false)
                .configurable(false)
                .build(),
            context,
        )?;
        template.prototype.define_property_or_throw(
            js_string!("constructor"),
            PropertyDescriptorBuilder::new()
                .value(constructor.clone())
                .writable(true)
                .enumerable(false)
                .configurable(true)
                .build(),
            context,
        )?;

        tracing::trace!(class = self.name, "Defined placeholder class");

        Ok(StubClass {
            constructor,
            template,
        })
    }
}
