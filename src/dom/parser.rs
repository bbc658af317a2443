// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inert `FormData` and `DOMParser` placeholders
//!
//! Neither type does anything. Scripts that depend on real multipart
//! encoding or on parsing markup are unsupported.

/// Placeholder for the multipart form builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormData;

impl FormData {
    pub const CLASS_NAME: &'static str = "FormData";

    pub fn new() -> Self {
        Self
    }
}

/// Placeholder parser; has no parse behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomParser;

impl DomParser {
    pub const CLASS_NAME: &'static str = "DOMParser";

    pub fn new() -> Self {
        Self
    }
}
