// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host-side model of the browser stubs
//!
//! These types describe the stub object graph installed into the engine.
//! The JS bindings in [`crate::js`] are built from them.

mod document;
mod element;
mod parser;
mod style;

pub use document::Document;
pub use element::{Element, ElementKind};
pub use parser::{DomParser, FormData};
pub use style::{get_computed_style, StyleDeclaration, StyleKind, STYLE_SENTINEL};
