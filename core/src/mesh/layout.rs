//! Vertex layout definitions for generated meshes.
//!
//! Every generator writes a single interleaved vertex buffer, so a layout is
//! one stride plus a list of attributes at byte offsets. Offsets and strides
//! are taken from the vertex structs themselves. Layouts are shared via
//! `Arc`; there are only three combinations across all primitives.

use std::mem::{offset_of, size_of};
use std::sync::Arc;

use super::data::{PositionNormalUvVertex, PositionUvVertex, PositionVertex};

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    Position,
    Normal,
    /// Texture coordinates set 0.
    TexCoord0,
}

impl VertexAttributeSemantic {
    /// Shader input location this semantic binds to.
    ///
    /// Location 1 is reserved for normals even on layouts that lack them,
    /// so texture coordinates always sit at location 2.
    pub fn shader_location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::TexCoord0 => 2,
        }
    }

    /// Every semantic has exactly one format in generated meshes.
    pub fn format(&self) -> VertexAttributeFormat {
        match self {
            Self::Position | Self::Normal => VertexAttributeFormat::Float3,
            Self::TexCoord0 => VertexAttributeFormat::Float2,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    Float2,
    Float3,
}

impl VertexAttributeFormat {
    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.components() * size_of::<f32>()
    }

    pub fn components(&self) -> usize {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
        }
    }
}

/// One attribute inside an interleaved vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    pub semantic: VertexAttributeSemantic,
    pub format: VertexAttributeFormat,
    /// Byte offset within a vertex.
    pub offset: u32,
}

impl VertexAttribute {
    fn at(semantic: VertexAttributeSemantic, offset: usize) -> Self {
        Self {
            semantic,
            format: semantic.format(),
            offset: offset as u32,
        }
    }
}

/// Describes one interleaved vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: u32,
    pub attributes: Vec<VertexAttribute>,
    pub label: &'static str,
}

impl VertexLayout {
    fn interleaved(
        label: &'static str,
        stride: usize,
        attributes: &[(VertexAttributeSemantic, usize)],
    ) -> Arc<Self> {
        Arc::new(Self {
            stride: stride as u32,
            attributes: attributes
                .iter()
                .map(|&(semantic, offset)| VertexAttribute::at(semantic, offset))
                .collect(),
            label,
        })
    }

    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|attr| attr.semantic == semantic)
    }

    /// Layout of [`PositionVertex`].
    pub fn position() -> Arc<Self> {
        Self::interleaved(
            "position",
            size_of::<PositionVertex>(),
            &[(
                VertexAttributeSemantic::Position,
                offset_of!(PositionVertex, position),
            )],
        )
    }

    /// Layout of [`PositionUvVertex`].
    pub fn position_uv() -> Arc<Self> {
        Self::interleaved(
            "position_uv",
            size_of::<PositionUvVertex>(),
            &[
                (
                    VertexAttributeSemantic::Position,
                    offset_of!(PositionUvVertex, position),
                ),
                (
                    VertexAttributeSemantic::TexCoord0,
                    offset_of!(PositionUvVertex, uv),
                ),
            ],
        )
    }

    /// Layout of [`PositionNormalUvVertex`].
    pub fn position_normal_uv() -> Arc<Self> {
        Self::interleaved(
            "position_normal_uv",
            size_of::<PositionNormalUvVertex>(),
            &[
                (
                    VertexAttributeSemantic::Position,
                    offset_of!(PositionNormalUvVertex, position),
                ),
                (
                    VertexAttributeSemantic::Normal,
                    offset_of!(PositionNormalUvVertex, normal),
                ),
                (
                    VertexAttributeSemantic::TexCoord0,
                    offset_of!(PositionNormalUvVertex, uv),
                ),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_strides_match_attributes() {
        for (layout, stride) in [
            (VertexLayout::position(), 12),
            (VertexLayout::position_uv(), 20),
            (VertexLayout::position_normal_uv(), 32),
        ] {
            assert_eq!(layout.stride, stride, "{}", layout.label);
            let end = layout
                .attributes
                .iter()
                .map(|a| a.offset as usize + a.format.size())
                .max()
                .unwrap();
            assert_eq!(end, layout.stride as usize, "{}", layout.label);
        }
    }

    #[test]
    fn semantics() {
        let layout = VertexLayout::position_uv();
        assert!(layout.get_attribute(VertexAttributeSemantic::Position).is_some());
        assert!(layout.get_attribute(VertexAttributeSemantic::TexCoord0).is_some());
        assert!(layout.get_attribute(VertexAttributeSemantic::Normal).is_none());

        let uv = layout
            .get_attribute(VertexAttributeSemantic::TexCoord0)
            .unwrap();
        assert_eq!(uv.offset, 12);
        assert_eq!(uv.format, VertexAttributeFormat::Float2);
        assert_eq!(uv.semantic.shader_location(), 2);
    }

    #[test]
    fn normal_sits_between_position_and_uv() {
        let layout = VertexLayout::position_normal_uv();
        let offsets: Vec<u32> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }
}
