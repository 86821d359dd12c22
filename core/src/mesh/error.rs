//! Mesh generation errors.

use thiserror::Error;

/// Errors produced when shape parameters or generated buffers are invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A segment/sector/stack count is below the minimum the topology needs.
    #[error("{shape}: {parameter} must be at least {min}, got {value}")]
    CountTooLow {
        shape: &'static str,
        parameter: &'static str,
        value: u32,
        min: u32,
    },
    /// A radius or length is zero, negative, or not finite.
    #[error("{shape}: {parameter} must be a positive finite number, got {value}")]
    NotPositive {
        shape: &'static str,
        parameter: &'static str,
        value: f32,
    },
    /// The counts describe more vertices or indices than a `u32` index
    /// buffer can address.
    #[error("{shape}: {vertices} vertices and {indices} indices exceed the u32 index range")]
    TooManyElements {
        shape: &'static str,
        vertices: u64,
        indices: u64,
    },
    /// A torus tube would self-intersect through the center hole.
    #[error("torus: tube radius {tube_radius} must be smaller than ring radius {ring_radius}")]
    TubeTooThick { ring_radius: f32, tube_radius: f32 },
    /// An index references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        index: u32,
        position: usize,
        vertex_count: u32,
    },
}

/// Check that a count parameter is at least `min`.
pub(crate) fn ensure_count(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    min: u32,
) -> Result<(), MeshError> {
    if value < min {
        return Err(MeshError::CountTooLow {
            shape,
            parameter,
            value,
            min,
        });
    }
    Ok(())
}

/// Check that a mesh with `vertices` vertices and `indices` indices can be
/// indexed with `u32`. Counts are computed in `u64` by the caller.
pub(crate) fn ensure_addressable(
    shape: &'static str,
    vertices: u64,
    indices: u64,
) -> Result<(), MeshError> {
    let limit = u64::from(u32::MAX);
    if vertices > limit || indices > limit {
        return Err(MeshError::TooManyElements {
            shape,
            vertices,
            indices,
        });
    }
    Ok(())
}

/// Check that a length parameter is finite and strictly positive.
pub(crate) fn ensure_positive(
    shape: &'static str,
    parameter: &'static str,
    value: f32,
) -> Result<(), MeshError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::NotPositive {
            shape,
            parameter,
            value,
        });
    }
    Ok(())
}
