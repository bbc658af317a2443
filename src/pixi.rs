// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Placeholder for the PIXI rendering-library namespace
//!
//! Scripts only need `PIXI.*` to resolve. None of the types render
//! anything.

/// Global name of the namespace object
pub const NAMESPACE_NAME: &str = "PIXI";

/// Name of the nested settings object
pub const SETTINGS_NAME: &str = "settings";

/// Name of the one settings constant
pub const PRECISION_VERTEX: &str = "PRECISION_VERTEX";

/// Placeholder types exposed under the namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingType {
    Shader,
    Container,
    Color,
    Point,
    Mesh,
    Polygon,
}

impl RenderingType {
    pub const ALL: [RenderingType; 6] = [
        RenderingType::Shader,
        RenderingType::Container,
        RenderingType::Color,
        RenderingType::Point,
        RenderingType::Mesh,
        RenderingType::Polygon,
    ];

    /// Property name under the namespace
    pub fn name(self) -> &'static str {
        match self {
            RenderingType::Shader => "Shader",
            RenderingType::Container => "Container",
            RenderingType::Color => "Color",
            RenderingType::Point => "Point",
            RenderingType::Mesh => "Mesh",
            RenderingType::Polygon => "Polygon",
        }
    }
}

/// `PIXI.settings`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderingSettings {
    /// Vertex shader precision. `None` is exposed as `null`: not yet
    /// determined, and left that way rather than guessing a value.
    pub precision_vertex: Option<String>,
}

/// The whole `PIXI` surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingNamespace {
    pub types: Vec<RenderingType>,
    pub settings: RenderingSettings,
}

impl Default for RenderingNamespace {
    fn default() -> Self {
        Self {
            types: RenderingType::ALL.to_vec(),
            settings: RenderingSettings::default(),
        }
    }
}

impl RenderingNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a placeholder type by property name
    pub fn get(&self, name: &str) -> Option<RenderingType> {
        self.types.iter().copied().find(|t| t.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace() {
        let pixi = RenderingNamespace::new();
        assert_eq!(pixi.types.len(), 6);
        assert_eq!(pixi.get("Mesh"), Some(RenderingType::Mesh));
        assert_eq!(pixi.get("Sprite"), None);
        assert!(pixi.settings.precision_vertex.is_none());
    }
}
