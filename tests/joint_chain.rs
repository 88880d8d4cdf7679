//! Skeleton pose tests.

use approx::assert_abs_diff_eq;
use rig_math::{
    Matrix4, Quaternion, Transform, Vector3,
    consts::{FRAC_PI_2, PI},
    transform,
};

const EPSILON: f32 = 1e-5;

/// Local joint transforms for a three-bone arm lying along the x-axis, with
/// each bone one unit long and bent a quarter turn about z at the elbow.
fn arm_local_pose() -> [Transform; 3] {
    [
        Transform::from_translation(Vector3::new(0.0, 1.0, 0.0)),
        Transform::new(
            Vector3::new(1.0, 0.0, 0.0),
            Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2),
            Vector3::same(1.0),
        ),
        Transform::from_translation(Vector3::new(1.0, 0.0, 0.0)),
    ]
}

fn world_pose(local_pose: &[Transform]) -> Vec<Transform> {
    let mut world = Vec::with_capacity(local_pose.len());
    let mut parent = Transform::identity();
    for joint in local_pose {
        parent = transform::combine(&parent, joint);
        world.push(parent);
    }
    world
}

#[test]
fn world_pose_places_each_joint_after_its_parent() {
    let world = world_pose(&arm_local_pose());

    assert_abs_diff_eq!(world[0].position, Vector3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    assert_abs_diff_eq!(world[1].position, Vector3::new(1.0, 1.0, 0.0), epsilon = EPSILON);
    assert_abs_diff_eq!(world[2].position, Vector3::new(1.0, 2.0, 0.0), epsilon = EPSILON);
}

#[test]
fn world_matrices_agree_with_world_transforms() {
    for joint in world_pose(&arm_local_pose()) {
        let matrix = transform::transform_to_matrix(&joint);
        let point = Vector3::new(0.3, -0.7, 2.0);
        assert_abs_diff_eq!(
            matrix.transform_point(&point),
            transform::transform_point(&joint, &point),
            epsilon = EPSILON
        );
    }
}

#[test]
fn combining_matrices_matches_combining_transforms() {
    let local = arm_local_pose();
    let world = world_pose(&local);
    let matrix_product = local
        .iter()
        .fold(Matrix4::identity(), |accum, joint| accum * joint.to_matrix());
    assert_abs_diff_eq!(matrix_product, world[2].to_matrix(), epsilon = EPSILON);
}

#[test]
fn scaled_root_scales_the_whole_chain() {
    let mut local = arm_local_pose();
    local[0].scale = Vector3::same(2.0);
    let world = world_pose(&local);

    assert_abs_diff_eq!(world[2].position, Vector3::new(2.0, 3.0, 0.0), epsilon = EPSILON);
    assert_abs_diff_eq!(world[2].scale, Vector3::same(2.0), epsilon = EPSILON);
}

#[test]
fn inverse_world_transform_maps_back_to_joint_space() {
    let world = world_pose(&arm_local_pose());
    let tip = world[2];
    let bind_point = Vector3::new(0.5, 0.25, -1.0);
    let posed_point = tip.transform_point(&bind_point);

    assert_abs_diff_eq!(
        transform::inverse(&tip).transform_point(&posed_point),
        bind_point,
        epsilon = EPSILON
    );
}

#[test]
fn blending_poses_takes_the_short_way_per_joint() {
    let rest = arm_local_pose();
    let mut bent = arm_local_pose();
    // Half turn written in the hemisphere opposite the rest elbow rotation.
    bent[1].rotation = -Quaternion::from_axis_angle(&Vector3::unit_z(), PI);

    let blended: Vec<Transform> = rest
        .iter()
        .zip(&bent)
        .map(|(from, to)| transform::mix(from, to, 0.5))
        .collect();

    let expected = Quaternion::from_axis_angle(&Vector3::unit_z(), 3.0 * PI / 4.0);
    assert!(blended[1].rotation.same_orientation(&expected));
    assert!(blended[1].rotation.dot(&rest[1].rotation) >= 0.0);
    assert!(blended[0].approx_eq(&rest[0]));
}

#[test]
fn decomposing_world_matrices_recovers_uniformly_scaled_joints() {
    let mut local = arm_local_pose();
    local[1].scale = Vector3::same(0.5);
    for joint in world_pose(&local) {
        let recovered = transform::matrix_to_transform(&transform::transform_to_matrix(&joint));
        assert!(recovered.approx_eq(&joint), "{recovered:?} != {joint:?}");
    }
}
