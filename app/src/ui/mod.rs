//! Debug UI for the viewer.
//!
//! - [`EguiController`] - egui context, input collection and tessellation
//! - [`show_viewer_panel`] - the "ui window" that edits a [`ViewerState`]

mod controller;
mod input;

pub use controller::{EguiController, UiFrame};
pub use input::EguiInputState;

use primview_core::TextureSlot;
use primview_core::ViewerState;
use primview_core::math::Vec3;
use primview_core::mesh::{CylinderParams, LENGTH_RANGE, Primitive, SphereParams, TorusParams};
use primview_core::scene::AnimationMode;

/// Title of the viewer panel window.
pub const PANEL_TITLE: &str = "ui window";

/// Build the viewer panel for one frame.
pub fn show_viewer_panel(ctx: &egui::Context, viewer: &mut ViewerState) {
    egui::Window::new(PANEL_TITLE)
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            clear_color_section(ui, viewer);
            ui.separator();
            camera_section(ui, viewer);
            ui.separator();
            shape_section(ui, viewer);
            ui.separator();
            texture_section(ui, viewer);
            ui.separator();
            transform_section(ui, viewer);
        });
}

fn clear_color_section(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    ui.horizontal(|ui| {
        ui.label("clear color");
        ui.color_edit_button_rgba_unmultiplied(&mut viewer.clear_color);
    });
    if ui.button("reset clear color").clicked() {
        viewer.reset_clear_color();
    }
}

fn camera_section(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    let camera = viewer.camera_mut();
    drag_vec3(ui, "camera pos", &mut camera.position, 0.01);

    let mut yaw = camera.yaw();
    let mut pitch = camera.pitch();
    let limit = camera.pitch_limit();
    ui.horizontal(|ui| {
        ui.label("camera yaw");
        if ui
            .add(egui::DragValue::new(&mut yaw).speed(0.5).suffix("°"))
            .changed()
        {
            camera.set_yaw(yaw);
        }
    });
    ui.horizontal(|ui| {
        ui.label("camera pitch");
        if ui
            .add(
                egui::DragValue::new(&mut pitch)
                    .speed(0.5)
                    .range(-limit..=limit)
                    .suffix("°"),
            )
            .changed()
        {
            camera.set_pitch(pitch);
        }
    });

    if ui.button("reset camera").clicked() {
        viewer.reset_camera();
    }
}

fn shape_section(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    let mut primitive = viewer.primitive();
    egui::ComboBox::from_label("primitive")
        .selected_text(primitive.name())
        .show_ui(ui, |ui| {
            for candidate in Primitive::ALL {
                ui.selectable_value(&mut primitive, candidate, candidate.name());
            }
        });
    viewer.set_primitive(primitive);

    match primitive {
        Primitive::Box => {}
        Primitive::Cylinder => cylinder_params(ui, &mut viewer.shapes.cylinder),
        Primitive::Sphere => sphere_params(ui, &mut viewer.shapes.sphere),
        Primitive::Torus => torus_params(ui, &mut viewer.shapes.torus),
    }
    if primitive != Primitive::Box && ui.button(format!("reset {}", primitive.name())).clicked() {
        viewer.reset_shape();
    }

    let stats = viewer.stats();
    ui.label(format!("vertices: {}", stats.vertices));
    ui.label(format!("triangles: {}", stats.triangles));
}

fn cylinder_params(ui: &mut egui::Ui, params: &mut CylinderParams) {
    drag_length(ui, "upper radius", &mut params.upper_radius);
    drag_length(ui, "lower radius", &mut params.lower_radius);
    drag_count(
        ui,
        "segments",
        &mut params.segment_count,
        CylinderParams::SEGMENT_RANGE,
    );
    drag_length(ui, "height", &mut params.height);
}

fn sphere_params(ui: &mut egui::Ui, params: &mut SphereParams) {
    drag_length(ui, "radius", &mut params.radius);
    drag_count(
        ui,
        "sectors",
        &mut params.sector_count,
        SphereParams::COUNT_RANGE,
    );
    drag_count(
        ui,
        "stacks",
        &mut params.stack_count,
        SphereParams::COUNT_RANGE,
    );
}

fn torus_params(ui: &mut egui::Ui, params: &mut TorusParams) {
    drag_length(ui, "ring radius", &mut params.ring_radius);
    drag_length(ui, "tube radius", &mut params.tube_radius);
    drag_count(
        ui,
        "ring segments",
        &mut params.ring_segments,
        TorusParams::SEGMENT_RANGE,
    );
    drag_count(
        ui,
        "tube segments",
        &mut params.tube_segments,
        TorusParams::SEGMENT_RANGE,
    );
    if params.tube_radius >= params.ring_radius {
        let warn = ui.visuals().warn_fg_color;
        ui.colored_label(warn, "tube radius must be smaller than ring radius");
    }
}

fn texture_section(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    egui::ComboBox::from_label("texture")
        .selected_text(viewer.texture.name())
        .show_ui(ui, |ui| {
            for slot in TextureSlot::ALL {
                ui.selectable_value(&mut viewer.texture, slot, slot.name());
            }
        });
}

fn transform_section(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    let animation = &mut viewer.transform.animation;
    let mut index = animation.index();
    egui::ComboBox::from_label("animation")
        .selected_text(AnimationMode::NAMES[index])
        .show_ui(ui, |ui| {
            for (i, name) in AnimationMode::NAMES.iter().enumerate() {
                ui.selectable_value(&mut index, i, *name);
            }
        });
    if index != animation.index() {
        *animation = animation.switch_to(index);
    }

    match animation {
        AnimationMode::Static => {}
        AnimationMode::FixedOffset {
            axis,
            angle_degrees,
        } => {
            drag_vec3(ui, "axis", axis, 0.01);
            ui.horizontal(|ui| {
                ui.label("angle");
                ui.add(egui::DragValue::new(angle_degrees).speed(0.5).suffix("°"));
            });
        }
        AnimationMode::Spinning {
            axis,
            degrees_per_second,
        } => {
            drag_vec3(ui, "axis", axis, 0.01);
            ui.horizontal(|ui| {
                ui.label("speed");
                ui.add(
                    egui::DragValue::new(degrees_per_second)
                        .speed(1.0)
                        .suffix("°/s"),
                );
            });
        }
    }

    drag_vec3(ui, "scale", &mut viewer.transform.scale, 0.01);
    if ui.button("reset transform").clicked() {
        viewer.reset_transform();
    }
}

fn drag_vec3(ui: &mut egui::Ui, name: &str, value: &mut Vec3, speed: f64) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.add(egui::DragValue::new(&mut value.x).speed(speed).prefix("x: "));
        ui.add(egui::DragValue::new(&mut value.y).speed(speed).prefix("y: "));
        ui.add(egui::DragValue::new(&mut value.z).speed(speed).prefix("z: "));
    });
}

fn drag_length(ui: &mut egui::Ui, name: &str, value: &mut f32) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.add(
            egui::DragValue::new(value)
                .speed(0.01)
                .range(LENGTH_RANGE),
        );
    });
}

fn drag_count(ui: &mut egui::Ui, name: &str, value: &mut u32, range: std::ops::RangeInclusive<u32>) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.add(egui::DragValue::new(value).speed(0.1).range(range));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use primview_core::ViewerConfig;

    #[test]
    fn panel_renders_for_every_primitive() {
        let mut viewer = ViewerState::new(&ViewerConfig::default());
        let mut controller = EguiController::new(1280, 720, 1.0);
        for primitive in Primitive::ALL {
            viewer.set_primitive(primitive);
            viewer.transform.animation = AnimationMode::spinning();
            let frame = controller.run(0.0, |ctx| show_viewer_panel(ctx, &mut viewer));
            assert!(!frame.is_empty(), "{}", primitive.name());
            assert_eq!(viewer.primitive(), primitive);
        }
    }

    #[test]
    fn idle_panel_leaves_state_untouched() {
        let config = ViewerConfig::default();
        let mut viewer = ViewerState::new(&config);
        let mut controller = EguiController::new(1280, 720, 1.0);
        controller.run(0.0, |ctx| show_viewer_panel(ctx, &mut viewer));
        assert_eq!(viewer.shapes, config.shapes);
        assert_eq!(viewer.clear_color, config.clear_color);
        assert_eq!(viewer.texture, TextureSlot::Wood);
    }
}
