// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document placeholder

use super::element::{Element, ElementKind};
use crate::js::JsValue;

/// The global `document`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    document_element: Element,
}

impl Document {
    /// Create a document with its root element already in place
    pub fn new() -> Self {
        Self {
            document_element: Element::new(ElementKind::HtmlRoot),
        }
    }

    /// The root `<html>` element; created once with the document.
    pub fn document_element(&self) -> &Element {
        &self.document_element
    }

    /// Always a generic element. Neither the tag name nor the options are
    /// looked at, so callers never get tag-specific behavior.
    pub fn create_element(&self, _tag_name: &str, _options: Option<&JsValue>) -> Element {
        Element::generic()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
