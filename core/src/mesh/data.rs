//! CPU-side mesh data structures.
//!
//! This module provides:
//! - Vertex types ([`PositionVertex`], [`PositionUvVertex`], [`PositionNormalUvVertex`])
//! - [`Mesh`] - typed vertices and triangle-list indices, as produced by generators
//! - [`CpuMesh`] - the byte-level form handed to a GPU upload collaborator
//! - [`MeshStats`] - vertex and triangle counts for display

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};

use super::error::MeshError;
use super::layout::VertexLayout;

/// A vertex type that generators can emit.
pub trait Vertex: Pod {
    /// The interleaved layout matching this struct's memory representation.
    fn layout() -> Arc<VertexLayout>;

    /// Object-space position.
    fn position(&self) -> [f32; 3];
}

/// Position-only vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl Vertex for PositionVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position()
    }

    fn position(&self) -> [f32; 3] {
        self.position
    }
}

/// Position + texture coordinate vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionUvVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex for PositionUvVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position_uv()
    }

    fn position(&self) -> [f32; 3] {
        self.position
    }
}

/// Position + normal + texture coordinate vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionNormalUvVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex for PositionNormalUvVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position_normal_uv()
    }

    fn position(&self) -> [f32; 3] {
        self.position
    }
}

/// Vertex and triangle counts of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshStats {
    pub vertices: u32,
    pub triangles: u32,
}

/// A generated triangle-list mesh with typed vertices.
///
/// Vertex order is tied to the generator's loop order and the index buffer
/// relies on it, so the vertex list is never reordered after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
    label: &'static str,
}

impl<V: Vertex> Mesh<V> {
    pub(crate) fn new(label: &'static str, vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            label,
        }
    }

    /// The vertex list.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The index list, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The primitive name this mesh was generated for.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex and triangle counts.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count(),
            triangles: self.triangle_count(),
        }
    }

    /// Check that the index list forms whole triangles over existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        validate_indices(&self.indices, self.vertex_count())
    }

    /// Convert into the byte-level form for GPU upload.
    pub fn into_cpu_mesh(self) -> CpuMesh {
        let vertex_bytes = bytemuck::cast_slice(&self.vertices).to_vec();
        CpuMesh::new(V::layout())
            .with_vertex_data(vertex_bytes)
            .with_indices_u32(self.indices)
            .with_label(self.label)
    }
}

impl Mesh<PositionNormalUvVertex> {
    /// Split the interleaved vertices into separate position, normal and
    /// texture coordinate arrays, for consumers that bind them separately.
    pub fn split_attributes(&self) -> (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<[f32; 2]>) {
        let positions = self.vertices.iter().map(|v| v.position).collect();
        let normals = self.vertices.iter().map(|v| v.normal).collect();
        let tex_coords = self.vertices.iter().map(|v| v.uv).collect();
        (positions, normals, tex_coords)
    }
}

fn validate_indices(indices: &[u32], vertex_count: u32) -> Result<(), MeshError> {
    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index >= vertex_count)
    {
        return Err(MeshError::IndexOutOfRange {
            index,
            position,
            vertex_count,
        });
    }
    Ok(())
}

/// A CPU-side mesh holding raw vertex bytes and u32 indices.
///
/// This is the GPU-agnostic representation handed to the renderer. Vertex
/// data is a single interleaved buffer described by [`VertexLayout`]; the
/// index buffer is always 32-bit.
#[derive(Debug, Clone)]
pub struct CpuMesh {
    layout: Arc<VertexLayout>,
    vertex_data: Vec<u8>,
    vertex_count: u32,
    indices: Vec<u32>,
    label: Option<String>,
}

impl CpuMesh {
    /// Create a new empty CpuMesh with the given layout.
    pub fn new(layout: Arc<VertexLayout>) -> Self {
        Self {
            layout,
            vertex_data: Vec::new(),
            vertex_count: 0,
            indices: Vec::new(),
            label: None,
        }
    }

    /// Set raw vertex data.
    ///
    /// Vertex count is inferred from the data length and stride.
    pub fn with_vertex_data(mut self, data: Vec<u8>) -> Self {
        let stride = self.layout.stride as usize;
        if stride > 0 {
            self.vertex_count = (data.len() / stride) as u32;
        }
        self.vertex_data = data;
        self
    }

    /// Set index data.
    pub fn with_indices_u32(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Interleaved vertex bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        &self.vertex_data
    }

    /// Index list.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Index bytes (native-endian u32).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertex buffer length in bytes.
    pub fn vertex_byte_len(&self) -> u64 {
        self.vertex_data.len() as u64
    }

    /// Index buffer length in bytes.
    pub fn index_byte_len(&self) -> u64 {
        (self.indices.len() * std::mem::size_of::<u32>()) as u64
    }

    /// Vertex and triangle counts.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count,
            triangles: self.triangle_count(),
        }
    }

    /// Check that every index references an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        validate_indices(&self.indices, self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh<PositionUvVertex> {
        let v = |x: f32, y: f32| PositionUvVertex {
            position: [x, y, 0.0],
            uv: [x, y],
        };
        Mesh::new(
            "triangle",
            vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn vertex_sizes_match_layouts() {
        assert_eq!(
            std::mem::size_of::<PositionVertex>(),
            PositionVertex::layout().stride as usize
        );
        assert_eq!(
            std::mem::size_of::<PositionUvVertex>(),
            PositionUvVertex::layout().stride as usize
        );
        assert_eq!(
            std::mem::size_of::<PositionNormalUvVertex>(),
            PositionNormalUvVertex::layout().stride as usize
        );
    }

    #[test]
    fn mesh_counts() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut mesh = triangle();
        mesh.indices[2] = 7;
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 7,
                position: 2,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn cpu_mesh_byte_lengths() {
        let cpu = triangle().into_cpu_mesh();
        assert_eq!(cpu.label(), Some("triangle"));
        assert_eq!(cpu.vertex_count(), 3);
        assert_eq!(cpu.vertex_byte_len(), 3 * 20);
        assert_eq!(cpu.vertex_bytes().len(), 60);
        assert_eq!(cpu.index_byte_len(), 12);
        assert_eq!(cpu.index_bytes().len(), 12);
        assert_eq!(cpu.stats(), MeshStats { vertices: 3, triangles: 1 });
        assert!(cpu.validate().is_ok());
    }

    #[test]
    fn split_attributes_keeps_order() {
        let v = |i: f32| PositionNormalUvVertex {
            position: [i, 0.0, 0.0],
            normal: [0.0, i, 0.0],
            uv: [i, i],
        };
        let mesh = Mesh::new("pnu", vec![v(0.0), v(1.0), v(2.0)], vec![0, 1, 2]);
        let (positions, normals, uvs) = mesh.split_attributes();
        assert_eq!(positions[2], [2.0, 0.0, 0.0]);
        assert_eq!(normals[1], [0.0, 1.0, 0.0]);
        assert_eq!(uvs.len(), 3);
    }
}
