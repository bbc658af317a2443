// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element placeholders
//!
//! The element hierarchy is a capability tag rather than a type hierarchy:
//! nothing about an element's behavior varies by kind, only what it claims
//! to be.

use super::style::StyleDeclaration;

/// What an element placeholder is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Generic `Element`
    Element,
    /// `HTMLElement`
    HtmlElement,
    /// `HTMLHtmlElement`, the document root
    HtmlRoot,
}

impl ElementKind {
    /// Every kind, parents before children
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Element,
        ElementKind::HtmlElement,
        ElementKind::HtmlRoot,
    ];

    /// Constructor name as seen by scripts
    pub fn class_name(self) -> &'static str {
        match self {
            ElementKind::Element => "Element",
            ElementKind::HtmlElement => "HTMLElement",
            ElementKind::HtmlRoot => "HTMLHtmlElement",
        }
    }

    pub fn parent(self) -> Option<ElementKind> {
        match self {
            ElementKind::Element => None,
            ElementKind::HtmlElement => Some(ElementKind::Element),
            ElementKind::HtmlRoot => Some(ElementKind::HtmlElement),
        }
    }

    /// Whether scripts can reach the constructor as a global
    pub fn is_global(self) -> bool {
        !matches!(self, ElementKind::Element)
    }

    /// `instanceof`-style check along the parent chain
    pub fn is_a(self, other: ElementKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    pub fn is_html(self) -> bool {
        self.is_a(ElementKind::HtmlElement)
    }

    pub fn is_root(self) -> bool {
        self == ElementKind::HtmlRoot
    }
}

/// Element placeholder; owns its style from construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    style: StyleDeclaration,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: StyleDeclaration::inline(),
        }
    }

    /// Generic element, as returned by `document.createElement`
    pub fn generic() -> Self {
        Self::new(ElementKind::Element)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }
}
