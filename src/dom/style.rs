// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Computed-style placeholder

/// Value every style query answers with
pub const STYLE_SENTINEL: f64 = 0.0;

/// Kind of style object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Result of `getComputedStyle`
    Declaration,
    /// `element.style`; specializes [`StyleKind::Declaration`]
    Css2Properties,
}

impl StyleKind {
    /// Global constructor name
    pub fn class_name(self) -> &'static str {
        match self {
            StyleKind::Declaration => "CSSStyleDeclaration",
            StyleKind::Css2Properties => "CSS2Properties",
        }
    }

    /// Kind this one inherits from
    pub fn parent(self) -> Option<StyleKind> {
        match self {
            StyleKind::Declaration => None,
            StyleKind::Css2Properties => Some(StyleKind::Declaration),
        }
    }
}

/// Style declaration with no real values behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDeclaration {
    kind: StyleKind,
}

impl StyleDeclaration {
    /// Style returned by a computed-style query
    pub fn computed() -> Self {
        Self {
            kind: StyleKind::Declaration,
        }
    }

    /// Inline style owned by an element
    pub fn inline() -> Self {
        Self {
            kind: StyleKind::Css2Properties,
        }
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    /// Always [`STYLE_SENTINEL`], whatever the property.
    pub fn get_property_value(&self, _property: &str) -> f64 {
        STYLE_SENTINEL
    }
}

/// Host-side `getComputedStyle`; arguments are accepted and ignored.
pub fn get_computed_style<A>(_args: &[A]) -> StyleDeclaration {
    StyleDeclaration::computed()
}
