//! Shape parameter structs.
//!
//! The UI owns and mutates these; generators receive them by reference and
//! keep nothing between calls. Each struct carries the ranges the UI clamps
//! its widgets to, and a `validate` that enforces the hard topological
//! minimums and the `u32` index range regardless of where the values came
//! from.

use std::ops::RangeInclusive;

use serde::Deserialize;

use super::error::{MeshError, ensure_addressable, ensure_count, ensure_positive};

/// UI range for radii and heights.
pub const LENGTH_RANGE: RangeInclusive<f32> = 0.1..=100.0;

/// Selectable primitive shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    #[default]
    Box,
    Cylinder,
    Sphere,
    Torus,
}

impl Primitive {
    /// All primitives in UI order.
    pub const ALL: [Primitive; 4] = [
        Primitive::Box,
        Primitive::Cylinder,
        Primitive::Sphere,
        Primitive::Torus,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::Torus => "torus",
        }
    }
}

/// Capped cylinder (or truncated cone when the radii differ).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Radius of the ring at `y = +height / 2`.
    pub upper_radius: f32,
    /// Radius of the ring at `y = -height / 2`.
    pub lower_radius: f32,
    /// Number of sides around the axis.
    pub segment_count: u32,
    /// Distance between the two caps.
    pub height: f32,
}

impl CylinderParams {
    pub const MIN_SEGMENTS: u32 = 3;
    pub const SEGMENT_RANGE: RangeInclusive<u32> = 3..=128;

    pub fn validate(&self) -> Result<(), MeshError> {
        ensure_positive("cylinder", "upper_radius", self.upper_radius)?;
        ensure_positive("cylinder", "lower_radius", self.lower_radius)?;
        ensure_positive("cylinder", "height", self.height)?;
        ensure_count(
            "cylinder",
            "segment_count",
            self.segment_count,
            Self::MIN_SEGMENTS,
        )?;
        let n = u64::from(self.segment_count);
        ensure_addressable("cylinder", 2 * (n + 1), 12 * n)
    }
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            upper_radius: 0.5,
            lower_radius: 0.5,
            segment_count: 32,
            height: 1.0,
        }
    }
}

/// UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f32,
    /// Longitude divisions.
    pub sector_count: u32,
    /// Latitude divisions.
    pub stack_count: u32,
}

impl SphereParams {
    pub const MIN_SECTORS: u32 = 3;
    pub const MIN_STACKS: u32 = 3;
    pub const COUNT_RANGE: RangeInclusive<u32> = 3..=100;

    pub fn validate(&self) -> Result<(), MeshError> {
        ensure_positive("sphere", "radius", self.radius)?;
        ensure_count(
            "sphere",
            "sector_count",
            self.sector_count,
            Self::MIN_SECTORS,
        )?;
        ensure_count("sphere", "stack_count", self.stack_count, Self::MIN_STACKS)?;
        let sectors = u64::from(self.sector_count);
        let stacks = u64::from(self.stack_count);
        ensure_addressable(
            "sphere",
            (stacks + 1).saturating_mul(sectors + 1),
            (6 * sectors).saturating_mul(stacks - 1),
        )
    }
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            sector_count: 32,
            stack_count: 16,
        }
    }
}

/// Ring torus ("donut").
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Distance from the torus center to the tube center.
    pub ring_radius: f32,
    /// Radius of the tube cross-section.
    pub tube_radius: f32,
    /// Divisions around the ring.
    pub ring_segments: u32,
    /// Divisions around the tube.
    pub tube_segments: u32,
}

impl TorusParams {
    pub const MIN_SEGMENTS: u32 = 3;
    pub const SEGMENT_RANGE: RangeInclusive<u32> = 3..=128;

    pub fn validate(&self) -> Result<(), MeshError> {
        ensure_positive("torus", "ring_radius", self.ring_radius)?;
        ensure_positive("torus", "tube_radius", self.tube_radius)?;
        ensure_count(
            "torus",
            "ring_segments",
            self.ring_segments,
            Self::MIN_SEGMENTS,
        )?;
        ensure_count(
            "torus",
            "tube_segments",
            self.tube_segments,
            Self::MIN_SEGMENTS,
        )?;
        if self.tube_radius >= self.ring_radius {
            return Err(MeshError::TubeTooThick {
                ring_radius: self.ring_radius,
                tube_radius: self.tube_radius,
            });
        }
        let ring = u64::from(self.ring_segments);
        let tube = u64::from(self.tube_segments);
        ensure_addressable(
            "torus",
            (ring + 1).saturating_mul(tube + 1),
            (6 * ring).saturating_mul(tube),
        )
    }
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            ring_radius: 0.5,
            tube_radius: 0.2,
            ring_segments: 32,
            tube_segments: 16,
        }
    }
}

/// Parameters for every parametric primitive, as edited by the UI.
///
/// The box has no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    pub cylinder: CylinderParams,
    pub sphere: SphereParams,
    pub torus: TorusParams,
}

impl ShapeParams {
    /// Validate the parameters that `primitive` would be generated from.
    pub fn validate(&self, primitive: Primitive) -> Result<(), MeshError> {
        match primitive {
            Primitive::Box => Ok(()),
            Primitive::Cylinder => self.cylinder.validate(),
            Primitive::Sphere => self.sphere.validate(),
            Primitive::Torus => self.torus.validate(),
        }
    }

    /// True when `primitive` would generate the same mesh from `self` and
    /// `other`. Parameters of the other shapes are ignored.
    pub fn same_for(&self, primitive: Primitive, other: &ShapeParams) -> bool {
        match primitive {
            Primitive::Box => true,
            Primitive::Cylinder => self.cylinder == other.cylinder,
            Primitive::Sphere => self.sphere == other.sphere,
            Primitive::Torus => self.torus == other.torus,
        }
    }

    /// Restore the defaults of one primitive's parameters from `defaults`.
    pub fn reset(&mut self, primitive: Primitive, defaults: &ShapeParams) {
        match primitive {
            Primitive::Box => {}
            Primitive::Cylinder => self.cylinder = defaults.cylinder,
            Primitive::Sphere => self.sphere = defaults.sphere,
            Primitive::Torus => self.torus = defaults.torus,
        }
    }
}
