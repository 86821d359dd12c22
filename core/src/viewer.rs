//! Per-frame viewer state.
//!
//! [`ViewerState`] owns everything the UI edits and the renderer consumes:
//! the selected primitive and its parameters, texture slot, clear color,
//! camera, model transform and the current mesh. Each frame it produces a
//! [`FramePacket`] with the mesh and matrices to draw.

use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::input::{KeyCode, MouseButton};
use crate::math::Mat4;
use crate::mesh::{self, CpuMesh, MeshError, MeshStats, Primitive, ShapeParams};
use crate::scene::{CameraController, FlyCamera, FreeFlyController, ModelTransform};

/// Selectable texture, each bound to its own texture unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureSlot {
    #[default]
    Wood,
    Metal,
    Earth,
}

impl TextureSlot {
    /// All slots in UI order.
    pub const ALL: [TextureSlot; 3] = [TextureSlot::Wood, TextureSlot::Metal, TextureSlot::Earth];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Earth => "earth",
        }
    }

    /// Texture unit the slot is bound to.
    pub fn unit(&self) -> u32 {
        match self {
            Self::Wood => 0,
            Self::Metal => 1,
            Self::Earth => 2,
        }
    }

    /// Asset path used when the config does not name one.
    pub fn default_path(&self) -> &'static str {
        match self {
            Self::Wood => "image/wood.png",
            Self::Metal => "image/metal.jpg",
            Self::Earth => "image/earth.jpg",
        }
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FramePacket {
    /// `None` until a mesh has been generated; the frame is then only
    /// cleared and the UI drawn.
    pub mesh: Option<Arc<CpuMesh>>,
    /// The mesh was rebuilt this frame and needs re-uploading.
    pub regenerated: bool,
    pub primitive: Primitive,
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    /// `projection * view * model`.
    pub transform: Mat4,
    pub texture: TextureSlot,
    pub clear_color: [f32; 4],
    pub stats: MeshStats,
}

/// Viewer state driven by the UI and input, sampled once per frame.
pub struct ViewerState {
    primitive: Primitive,
    /// Shape parameters as currently edited.
    pub shapes: ShapeParams,
    defaults: ShapeParams,
    pub texture: TextureSlot,
    pub clear_color: [f32; 4],
    default_clear_color: [f32; 4],
    camera: FlyCamera,
    controller: FreeFlyController,
    pub transform: ModelTransform,
    mesh: Option<Arc<CpuMesh>>,
    mesh_key: Option<(Primitive, ShapeParams)>,
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            primitive: config.primitive,
            shapes: config.shapes,
            defaults: config.shapes,
            texture: TextureSlot::default(),
            clear_color: config.clear_color,
            default_clear_color: config.clear_color,
            camera: FlyCamera::new(&config.camera),
            controller: FreeFlyController::new(&config.camera),
            transform: ModelTransform::default(),
            mesh: None,
            mesh_key: None,
        }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn set_primitive(&mut self, primitive: Primitive) {
        if primitive != self.primitive {
            log::debug!(
                "Primitive changed: {} -> {}",
                self.primitive.name(),
                primitive.name()
            );
            self.primitive = primitive;
        }
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    pub fn controller(&self) -> &FreeFlyController {
        &self.controller
    }

    /// The last successfully generated mesh, if any.
    pub fn mesh(&self) -> Option<&Arc<CpuMesh>> {
        self.mesh.as_ref()
    }

    /// Counts of the last successfully generated mesh.
    pub fn stats(&self) -> MeshStats {
        self.mesh.as_ref().map(|m| m.stats()).unwrap_or_default()
    }

    pub fn on_key(&mut self, key: KeyCode, pressed: bool) {
        self.controller.on_key_state(key.direction(), pressed);
    }

    pub fn on_pointer_button(&mut self, button: MouseButton, pressed: bool, x: f32, y: f32) {
        self.controller.on_pointer_button(button, pressed, x, y);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.controller.on_pointer_move(&mut self.camera, x, y);
    }

    /// Release all held keys and end any drag, e.g. when focus is lost.
    pub fn release_input(&mut self) {
        self.controller.reset();
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
        self.controller.reset();
    }

    pub fn reset_clear_color(&mut self) {
        self.clear_color = self.default_clear_color;
    }

    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    /// Restore the configured parameters of the selected primitive.
    pub fn reset_shape(&mut self) {
        self.shapes.reset(self.primitive, &self.defaults);
    }

    fn mesh_is_current(&self) -> bool {
        match &self.mesh_key {
            Some((primitive, params)) => {
                *primitive == self.primitive && params.same_for(self.primitive, &self.shapes)
            }
            None => false,
        }
    }

    /// Regenerate the mesh if the primitive or its parameters changed.
    ///
    /// Returns the current mesh and whether it was rebuilt. On error the
    /// previous mesh is kept.
    fn refresh_mesh(&mut self) -> Result<(Arc<CpuMesh>, bool), MeshError> {
        if let Some(mesh) = self.mesh.as_ref().filter(|_| self.mesh_is_current()) {
            return Ok((Arc::clone(mesh), false));
        }
        let mesh = Arc::new(mesh::generate(self.primitive, &self.shapes)?);
        log::debug!(
            "Regenerated {}: {} vertices, {} triangles",
            self.primitive.name(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.mesh = Some(Arc::clone(&mesh));
        self.mesh_key = Some((self.primitive, self.shapes));
        Ok((mesh, true))
    }

    /// Advance one frame: apply camera movement, regenerate the mesh if
    /// needed and compute the transforms.
    ///
    /// Invalid parameters return the error and leave the previous mesh in
    /// place; [`ViewerState::packet`] can still draw it.
    pub fn frame(&mut self, aspect: f32, elapsed_secs: f32) -> Result<FramePacket, MeshError> {
        self.controller.update(&mut self.camera);
        let (mesh, regenerated) = self.refresh_mesh()?;
        Ok(self.build_packet(Some(mesh), regenerated, aspect, elapsed_secs))
    }

    /// Build a packet from the last good mesh without advancing anything.
    /// Its mesh is `None` if generation has never succeeded.
    pub fn packet(&self, aspect: f32, elapsed_secs: f32) -> FramePacket {
        self.build_packet(self.mesh.clone(), false, aspect, elapsed_secs)
    }

    fn build_packet(
        &self,
        mesh: Option<Arc<CpuMesh>>,
        regenerated: bool,
        aspect: f32,
        elapsed_secs: f32,
    ) -> FramePacket {
        let model = self.transform.model_matrix(elapsed_secs);
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(aspect);
        let primitive = self
            .mesh_key
            .map(|(primitive, _)| primitive)
            .unwrap_or(self.primitive);
        FramePacket {
            stats: mesh.as_ref().map(|m| m.stats()).unwrap_or_default(),
            mesh,
            regenerated,
            primitive,
            model,
            view,
            projection,
            transform: projection * view * model,
            texture: self.texture,
            clear_color: self.clear_color,
        }
    }
}
