//! Static layout
//!
//! Layouts assign fixed positions (`fx`/`fy`) once per snapshot. They keep no
//! memory of earlier placements; re-run them in full whenever the snapshot
//! changes.

pub mod radial;

pub use radial::{golden_angle, RadialLayoutConfig, StaticRadialLayout};
