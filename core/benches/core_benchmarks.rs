use criterion::{Criterion, black_box, criterion_group, criterion_main};

use primview_core::ViewerConfig;
use primview_core::ViewerState;
use primview_core::mesh::generators::{
    generate_box, generate_cylinder, generate_sphere, generate_torus,
};
use primview_core::mesh::{
    CylinderParams, Primitive, ShapeParams, SphereParams, TorusParams, VertexAttributeSemantic,
    VertexLayout,
};

// ---------------------------------------------------------------------------
// Mesh generation
// ---------------------------------------------------------------------------

fn bench_generate_box(c: &mut Criterion) {
    c.bench_function("generate_box", |b| {
        b.iter(|| black_box(generate_box()));
    });
}

fn bench_generate_cylinder(c: &mut Criterion) {
    let low = CylinderParams {
        segment_count: 16,
        ..Default::default()
    };
    let high = CylinderParams {
        segment_count: 128,
        ..Default::default()
    };
    c.bench_function("generate_cylinder_16", |b| {
        b.iter(|| generate_cylinder(black_box(&low)));
    });
    c.bench_function("generate_cylinder_128", |b| {
        b.iter(|| generate_cylinder(black_box(&high)));
    });
}

fn bench_generate_sphere_low(c: &mut Criterion) {
    let params = SphereParams {
        radius: 1.0,
        sector_count: 16,
        stack_count: 8,
    };
    c.bench_function("generate_sphere_16x8", |b| {
        b.iter(|| generate_sphere(black_box(&params)));
    });
}

fn bench_generate_sphere_medium(c: &mut Criterion) {
    let params = SphereParams {
        radius: 1.0,
        sector_count: 64,
        stack_count: 32,
    };
    c.bench_function("generate_sphere_64x32", |b| {
        b.iter(|| generate_sphere(black_box(&params)));
    });
}

fn bench_generate_sphere_high(c: &mut Criterion) {
    let params = SphereParams {
        radius: 1.0,
        sector_count: 100,
        stack_count: 100,
    };
    c.bench_function("generate_sphere_100x100", |b| {
        b.iter(|| generate_sphere(black_box(&params)));
    });
}

fn bench_generate_torus(c: &mut Criterion) {
    let params = TorusParams::default();
    c.bench_function("generate_torus_32x16", |b| {
        b.iter(|| generate_torus(black_box(&params)));
    });
}

fn bench_into_cpu_mesh(c: &mut Criterion) {
    let params = ShapeParams::default();
    c.bench_function("generate_sphere_cpu_mesh", |b| {
        b.iter(|| primview_core::mesh::generate(black_box(Primitive::Sphere), &params));
    });
}

// ---------------------------------------------------------------------------
// Viewer frame
// ---------------------------------------------------------------------------

fn bench_viewer_frame_cached(c: &mut Criterion) {
    let mut viewer = ViewerState::new(&ViewerConfig::default());
    viewer.set_primitive(Primitive::Sphere);
    c.bench_function("viewer_frame_cached", |b| {
        b.iter(|| black_box(viewer.frame(black_box(16.0 / 9.0), black_box(1.0))).is_ok());
    });
}

// ---------------------------------------------------------------------------
// Vertex layout lookup
// ---------------------------------------------------------------------------

fn bench_vertex_layout_get_attribute(c: &mut Criterion) {
    let layout = VertexLayout::position_normal_uv();
    c.bench_function("vertex_layout_get_attribute", |b| {
        b.iter(|| {
            black_box(layout.get_attribute(black_box(VertexAttributeSemantic::Normal)));
        });
    });
}

criterion_group!(
    benches,
    bench_generate_box,
    bench_generate_cylinder,
    bench_generate_sphere_low,
    bench_generate_sphere_medium,
    bench_generate_sphere_high,
    bench_generate_torus,
    bench_into_cpu_mesh,
    bench_viewer_frame_cached,
    bench_vertex_layout_get_attribute,
);
criterion_main!(benches);
