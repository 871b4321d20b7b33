//! Pipeline configuration
//!
//! One value carries everything a build-layout-render run needs. It is
//! passed explicitly through the pipeline and can be loaded from YAML; any
//! section left out falls back to its defaults.

use crate::error::{LexigraphError, LexigraphResult};
use crate::graph::{AssemblyPlan, RegistryOptions};
use crate::layout::RadialLayoutConfig;
use crate::render::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexigraphConfig {
    /// Which row columns carry nodes and relationships
    pub plan: AssemblyPlan,

    /// Node registration policy and language projection
    pub registry: RegistryOptions,

    /// Radial layout parameters
    pub layout: RadialLayoutConfig,

    /// Render sizing parameters
    pub render: RenderConfig,

    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,
}

impl Default for LexigraphConfig {
    fn default() -> Self {
        Self {
            plan: AssemblyPlan::default(),
            registry: RegistryOptions::default(),
            layout: RadialLayoutConfig::default(),
            render: RenderConfig::default(),
            width: 800.0,
            height: 600.0,
        }
    }
}

impl LexigraphConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> LexigraphResult<Self> {
        let config: LexigraphConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> LexigraphResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> LexigraphResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> LexigraphResult<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(LexigraphError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.render.word_radius_min > self.render.word_radius_max {
            return Err(LexigraphError::InvalidConfig(format!(
                "word radius range is inverted: [{}, {}]",
                self.render.word_radius_min, self.render.word_radius_max
            )));
        }
        for binding in &self.plan.nodes {
            if binding.id_property.is_empty() {
                return Err(LexigraphError::InvalidConfig(format!(
                    "node column '{}' has an empty id_property",
                    binding.column
                )));
            }
        }
        self.layout.validate()
    }
}
