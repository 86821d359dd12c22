//! Mesh generators for the viewer's primitives.
//!
//! Every generator is a pure function of its parameters: calling it twice
//! with equal inputs yields bit-identical buffers. Parametric generators
//! validate their input first and return [`MeshError`] rather than emit
//! degenerate geometry. The results convert into [`CpuMesh`](super::CpuMesh)
//! via [`Mesh::into_cpu_mesh`] for upload.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::data::{Mesh, PositionNormalUvVertex, PositionUvVertex, PositionVertex};
use super::error::MeshError;
use super::params::{CylinderParams, SphereParams, TorusParams};

/// Per-face corner table of the unit box: 6 faces x 4 corners of
/// (position, uv). Faces are -Z, +Z, -X, +X, -Y, +Y.
#[rustfmt::skip]
const BOX_VERTICES: [([f32; 3], [f32; 2]); 24] = [
    ([-0.5, -0.5, -0.5], [0.0, 0.0]),
    ([ 0.5, -0.5, -0.5], [1.0, 0.0]),
    ([ 0.5,  0.5, -0.5], [1.0, 1.0]),
    ([-0.5,  0.5, -0.5], [0.0, 1.0]),

    ([-0.5, -0.5,  0.5], [0.0, 0.0]),
    ([ 0.5, -0.5,  0.5], [1.0, 0.0]),
    ([ 0.5,  0.5,  0.5], [1.0, 1.0]),
    ([-0.5,  0.5,  0.5], [0.0, 1.0]),

    ([-0.5,  0.5,  0.5], [1.0, 0.0]),
    ([-0.5,  0.5, -0.5], [1.0, 1.0]),
    ([-0.5, -0.5, -0.5], [0.0, 1.0]),
    ([-0.5, -0.5,  0.5], [0.0, 0.0]),

    ([ 0.5,  0.5,  0.5], [1.0, 0.0]),
    ([ 0.5,  0.5, -0.5], [1.0, 1.0]),
    ([ 0.5, -0.5, -0.5], [0.0, 1.0]),
    ([ 0.5, -0.5,  0.5], [0.0, 0.0]),

    ([-0.5, -0.5, -0.5], [0.0, 1.0]),
    ([ 0.5, -0.5, -0.5], [1.0, 1.0]),
    ([ 0.5, -0.5,  0.5], [1.0, 0.0]),
    ([-0.5, -0.5,  0.5], [0.0, 0.0]),

    ([-0.5,  0.5, -0.5], [0.0, 1.0]),
    ([ 0.5,  0.5, -0.5], [1.0, 1.0]),
    ([ 0.5,  0.5,  0.5], [1.0, 0.0]),
    ([-0.5,  0.5,  0.5], [0.0, 0.0]),
];

#[rustfmt::skip]
const BOX_INDICES: [u32; 36] = [
     0,  2,  1,  2,  0,  3,
     4,  5,  6,  6,  7,  4,
     8,  9, 10, 10, 11,  8,
    12, 14, 13, 14, 12, 15,
    16, 17, 18, 18, 19, 16,
    20, 22, 21, 22, 20, 23,
];

/// Generate the unit box.
///
/// Side length 1, centered at the origin. Each face has its own four
/// vertices so texture coordinates can span `[0, 1]` per face, giving
/// 24 vertices and 36 indices.
pub fn generate_box() -> Mesh<PositionUvVertex> {
    let vertices = BOX_VERTICES
        .iter()
        .map(|&(position, uv)| PositionUvVertex { position, uv })
        .collect();

    Mesh::new("box", vertices, BOX_INDICES.to_vec())
}

/// Generate a capped cylinder (a truncated cone when the radii differ).
///
/// Vertex order: bottom center, `n` bottom ring vertices, top center, `n`
/// top ring vertices, for `2(n + 1)` vertices in total. Indices are the
/// bottom fan, the top fan and two wall triangles per side, for `4n`
/// triangles, all wound counter-clockwise seen from outside. The last side
/// wraps back to ring vertex 0.
pub fn generate_cylinder(params: &CylinderParams) -> Result<Mesh<PositionVertex>, MeshError> {
    params.validate()?;

    let n = params.segment_count;
    let half_height = params.height / 2.0;
    let mut vertices = Vec::with_capacity(2 * (n as usize + 1));
    let mut indices = Vec::with_capacity(12 * n as usize);

    for (y, radius) in [
        (-half_height, params.lower_radius),
        (half_height, params.upper_radius),
    ] {
        vertices.push(PositionVertex {
            position: [0.0, y, 0.0],
        });
        for k in 0..n {
            let angle = TAU * k as f32 / n as f32;
            vertices.push(PositionVertex {
                position: [angle.cos() * radius, y, angle.sin() * radius],
            });
        }
    }

    let bottom_center = 0;
    let top_center = n + 1;
    let bottom = |k: u32| 1 + k % n;
    let top = |k: u32| n + 2 + k % n;

    for k in 0..n {
        indices.extend_from_slice(&[bottom_center, bottom(k), bottom(k + 1)]);
    }
    for k in 0..n {
        indices.extend_from_slice(&[top_center, top(k + 1), top(k)]);
    }
    for k in 0..n {
        indices.extend_from_slice(&[bottom(k), top(k), bottom(k + 1)]);
        indices.extend_from_slice(&[top(k), top(k + 1), bottom(k + 1)]);
    }

    Ok(Mesh::new("cylinder", vertices, indices))
}

/// Generate a UV sphere.
///
/// Stack angle runs from +90 degrees (north pole, +Z) to -90 degrees and
/// sector angle from 0 to 360 degrees. Seam and pole vertices are
/// duplicated so each one carries its own texture coordinate, giving
/// `(stacks + 1) * (sectors + 1)` vertices. The pole rows emit only one
/// triangle per sector, for `2 * sectors * (stacks - 1)` triangles.
pub fn generate_sphere(params: &SphereParams) -> Result<Mesh<PositionNormalUvVertex>, MeshError> {
    params.validate()?;

    let radius = params.radius;
    let sectors = params.sector_count;
    let stacks = params.stack_count;
    let length_inv = 1.0 / radius;
    let sector_step = TAU / sectors as f32;
    let stack_step = PI / stacks as f32;

    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * sectors * (stacks - 1)) as usize);

    for i in 0..=stacks {
        let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
        let xy = radius * stack_angle.cos();
        let z = radius * stack_angle.sin();

        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step;
            let x = xy * sector_angle.cos();
            let y = xy * sector_angle.sin();

            vertices.push(PositionNormalUvVertex {
                position: [x, y, z],
                normal: [x * length_inv, y * length_inv, z * length_inv],
                uv: [j as f32 / sectors as f32, i as f32 / stacks as f32],
            });
        }
    }

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;

        for _ in 0..sectors {
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    Ok(Mesh::new("sphere", vertices, indices))
}

/// Generate a torus lying in the XZ plane.
///
/// Produces `(ring_segments + 1) * (tube_segments + 1)` vertices with
/// duplicated seams for texture wrapping, and two triangles per grid cell.
pub fn generate_torus(params: &TorusParams) -> Result<Mesh<PositionNormalUvVertex>, MeshError> {
    params.validate()?;

    let ring_segments = params.ring_segments;
    let tube_segments = params.tube_segments;
    let mut vertices = Vec::with_capacity(((ring_segments + 1) * (tube_segments + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * ring_segments * tube_segments) as usize);

    for i in 0..=ring_segments {
        let u = i as f32 / ring_segments as f32;
        let theta = u * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32;
            let phi = v * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let distance = params.ring_radius + params.tube_radius * cos_phi;
            vertices.push(PositionNormalUvVertex {
                position: [
                    distance * cos_theta,
                    params.tube_radius * sin_phi,
                    distance * sin_theta,
                ],
                normal: [cos_phi * cos_theta, sin_phi, cos_phi * sin_theta],
                uv: [u, v],
            });
        }
    }

    let row = tube_segments + 1;
    for i in 0..ring_segments {
        for j in 0..tube_segments {
            let current = i * row + j;
            let next = current + row;

            indices.extend_from_slice(&[current, current + 1, next + 1]);
            indices.extend_from_slice(&[current, next + 1, next]);
        }
    }

    Ok(Mesh::new("torus", vertices, indices))
}
