use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rig_math::{Matrix4, Quaternion, Transform, Vector3, consts::FRAC_PI_3};

fn create_transform() -> Transform {
    Transform::new(
        Vector3::new(1.0, -2.0, 0.5),
        Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0).normalized(), FRAC_PI_3),
        Vector3::new(1.5, 0.5, 2.0),
    )
}

pub fn bench_quaternion_product(c: &mut Criterion) {
    let a = Quaternion::from_axis_angle(&Vector3::unit_x(), 0.3);
    let b = Quaternion::from_axis_angle(&Vector3::unit_y(), 1.2);
    c.bench_function("quaternion_product", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b));
    });
}

pub fn bench_transform_combine(c: &mut Criterion) {
    let parent = create_transform();
    let child = create_transform().inverted();
    c.bench_function("transform_combine", |bencher| {
        bencher.iter(|| black_box(parent).combined(&black_box(child)));
    });
}

pub fn bench_transform_combine_joint_chain(c: &mut Criterion) {
    let joints = vec![create_transform(); 64];
    c.bench_function("transform_combine_joint_chain", |bencher| {
        bencher.iter(|| {
            joints
                .iter()
                .fold(Transform::identity(), |accum, joint| accum * joint)
        });
    });
}

pub fn bench_transform_mix(c: &mut Criterion) {
    let from = create_transform();
    let to = Transform::from_rotation(Quaternion::from_axis_angle(&Vector3::unit_z(), 2.5));
    c.bench_function("transform_mix", |bencher| {
        bencher.iter(|| black_box(from).mixed(&black_box(to), black_box(0.4)));
    });
}

pub fn bench_transform_to_matrix(c: &mut Criterion) {
    let transform = create_transform();
    c.bench_function("transform_to_matrix", |bencher| {
        bencher.iter(|| black_box(transform).to_matrix());
    });
}

pub fn bench_matrix_to_transform(c: &mut Criterion) {
    let matrix: Matrix4 = create_transform().to_matrix();
    c.bench_function("matrix_to_transform", |bencher| {
        bencher.iter(|| Transform::from_matrix(&black_box(matrix)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        bench_quaternion_product,
        bench_transform_combine,
        bench_transform_combine_joint_chain,
        bench_transform_mix,
        bench_transform_to_matrix,
        bench_matrix_to_transform,
);
criterion_main!(benches);
