//! Anchor-plus-satellites radial layout
//!
//! The anchor (a root) sits at the center of the canvas. Satellites (words)
//! are spread around it at successive multiples of the golden angle, which
//! gives a near-uniform angular spread without collision checks, the same
//! way seeds are packed in a sunflower head. Each satellite's distance and
//! final pixel offset carry a little randomness so the picture looks drawn
//! rather than plotted.
//!
//! The random source is injected. `layout` uses the thread-local generator;
//! `layout_with_rng` takes any `Rng`, so a seeded generator reproduces a
//! layout exactly.

use crate::error::{LexigraphError, LexigraphResult};
use crate::graph::{GraphNode, ROOT_TYPE, WORD_TYPE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Golden angle in radians, `PI * (3 - sqrt 5)` (about 137.5 degrees)
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

/// Radial layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialLayoutConfig {
    /// Node type placed at the center
    pub anchor_type: String,

    /// Node type placed around the anchor
    pub satellite_type: String,

    /// Base radius as a fraction of `min(width, height)`
    pub radius_fraction: f64,

    /// Lower bound of the per-satellite radius factor
    pub min_radius_factor: f64,

    /// Upper bound of the per-satellite radius factor
    pub max_radius_factor: f64,

    /// Maximum per-axis pixel offset added after placement
    pub pixel_jitter: f64,
}

impl Default for RadialLayoutConfig {
    fn default() -> Self {
        Self {
            anchor_type: ROOT_TYPE.to_string(),
            satellite_type: WORD_TYPE.to_string(),
            radius_fraction: 0.35,
            min_radius_factor: 0.8,
            max_radius_factor: 1.2,
            pixel_jitter: 10.0,
        }
    }
}

impl RadialLayoutConfig {
    /// Reject parameters that would place nodes nowhere sensible
    pub fn validate(&self) -> LexigraphResult<()> {
        if !(self.radius_fraction.is_finite() && self.radius_fraction > 0.0) {
            return Err(LexigraphError::InvalidConfig(format!(
                "radius_fraction must be positive, got {}",
                self.radius_fraction
            )));
        }
        if !(self.min_radius_factor > 0.0 && self.min_radius_factor <= self.max_radius_factor)
            || !self.max_radius_factor.is_finite()
        {
            return Err(LexigraphError::InvalidConfig(format!(
                "radius factors must satisfy 0 < min <= max, got [{}, {}]",
                self.min_radius_factor, self.max_radius_factor
            )));
        }
        if !(self.pixel_jitter.is_finite() && self.pixel_jitter >= 0.0) {
            return Err(LexigraphError::InvalidConfig(format!(
                "pixel_jitter must be non-negative, got {}",
                self.pixel_jitter
            )));
        }
        Ok(())
    }

    /// Base radius for a canvas
    pub fn base_radius(&self, width: f64, height: f64) -> f64 {
        self.radius_fraction * width.min(height)
    }
}

/// Fixed-position radial layout
#[derive(Debug, Clone, Default)]
pub struct StaticRadialLayout {
    config: RadialLayoutConfig,
}

impl StaticRadialLayout {
    /// Create a layout with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layout with custom parameters
    pub fn with_config(config: RadialLayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RadialLayoutConfig {
        &self.config
    }

    /// Position nodes using the thread-local random generator
    ///
    /// Returns the number of nodes positioned; zero when there is no anchor.
    pub fn layout(&self, nodes: &mut [GraphNode], width: f64, height: f64) -> usize {
        self.layout_with_rng(nodes, width, height, &mut rand::thread_rng())
    }

    /// Position nodes using the given random generator
    ///
    /// The first node of the anchor type is centered. Satellites are placed
    /// in list order; for each one the generator is drawn for the radius
    /// factor, then the x offset, then the y offset. Nodes of other types
    /// (and any further anchors) keep whatever position they had.
    pub fn layout_with_rng<R: Rng>(&self, nodes: &mut [GraphNode], width: f64, height: f64, rng: &mut R) -> usize {
        let anchor_type = self.config.anchor_type.as_str();
        let Some(anchor_idx) = nodes.iter().position(|n| n.is_type(anchor_type)) else {
            debug!("No {} node in snapshot, skipping layout", anchor_type);
            return 0;
        };

        let extra_anchors = nodes.iter().filter(|n| n.is_type(anchor_type)).count() - 1;
        if extra_anchors > 0 {
            warn!(
                "Snapshot has {} extra {} nodes; only {} is centered",
                extra_anchors, anchor_type, nodes[anchor_idx].id
            );
        }

        let (cx, cy) = (width / 2.0, height / 2.0);
        nodes[anchor_idx].set_position(cx, cy);

        let base_radius = self.config.base_radius(width, height);
        let step = golden_angle();
        let jitter = self.config.pixel_jitter;
        let mut placed = 1;

        for (i, node) in nodes
            .iter_mut()
            .filter(|n| n.is_type(&self.config.satellite_type))
            .enumerate()
        {
            let angle = i as f64 * step;
            let radius = base_radius
                * uniform(rng, self.config.min_radius_factor, self.config.max_radius_factor);
            let dx = uniform(rng, -jitter, jitter);
            let dy = uniform(rng, -jitter, jitter);

            node.set_position(cx + radius * angle.cos() + dx, cy + radius * angle.sin() + dy);
            placed += 1;
        }

        debug!("Radial layout placed {} nodes on {}x{}", placed, width, height);
        placed
    }
}

/// One draw from `[low, high]`; a span too wide for `gen_range` is
/// interpolated from a unit draw instead
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high && (high - low).is_finite() {
        rng.gen_range(low..=high)
    } else if low < high {
        let t: f64 = rng.gen();
        low * (1.0 - t) + high * t
    } else {
        low
    }
}
