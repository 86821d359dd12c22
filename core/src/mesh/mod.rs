//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data:
//!
//! - [`Mesh`] - typed vertices plus triangle-list indices, as generated
//! - [`CpuMesh`] - raw vertex/index bytes and a [`VertexLayout`] for upload
//! - [`ShapeParams`] and the per-shape parameter structs the UI edits
//! - Generators for the box, cylinder, sphere and torus
//!
//! [`generate`] dispatches on a [`Primitive`] and is what the viewer calls.

mod data;
mod error;
pub mod generators;
mod layout;
mod params;

pub use data::{
    CpuMesh, Mesh, MeshStats, PositionNormalUvVertex, PositionUvVertex, PositionVertex, Vertex,
};
pub use error::MeshError;
pub use generators::{generate_box, generate_cylinder, generate_sphere, generate_torus};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
pub use params::{CylinderParams, LENGTH_RANGE, Primitive, ShapeParams, SphereParams, TorusParams};

/// Generate the selected primitive from `params` in upload-ready form.
pub fn generate(primitive: Primitive, params: &ShapeParams) -> Result<CpuMesh, MeshError> {
    let mesh = match primitive {
        Primitive::Box => generate_box().into_cpu_mesh(),
        Primitive::Cylinder => generate_cylinder(&params.cylinder)?.into_cpu_mesh(),
        Primitive::Sphere => generate_sphere(&params.sphere)?.into_cpu_mesh(),
        Primitive::Torus => generate_torus(&params.torus)?.into_cpu_mesh(),
    };
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_dispatches_per_primitive() {
        let params = ShapeParams::default();
        let expected = [
            (Primitive::Box, 24, "box"),
            (Primitive::Cylinder, 66, "cylinder"),
            (Primitive::Sphere, 17 * 33, "sphere"),
            (Primitive::Torus, 33 * 17, "torus"),
        ];
        for (primitive, vertices, label) in expected {
            let mesh = generate(primitive, &params).unwrap();
            assert_eq!(mesh.vertex_count(), vertices);
            assert_eq!(mesh.label(), Some(label));
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn generate_propagates_validation_errors() {
        let mut params = ShapeParams::default();
        params.sphere.radius = -1.0;
        assert!(generate(Primitive::Sphere, &params).is_err());
        assert!(generate(Primitive::Box, &params).is_ok());
    }
}
