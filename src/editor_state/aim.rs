//! # Aim Resolution Module
//!
//! Computes the grid cell a tool action targets. The target is probed at a
//! fixed distance along the viewer's look direction and rounded to the
//! nearest cell; no ray-cast against occupied cells is performed, so
//! intervening geometry never changes the target.

use cgmath::{Point3, Vector3};

/// How far in front of the eye the aim probe sits, in world units.
pub const AIM_PROBE_DISTANCE: f32 = 1.5;

/// Resolves the aimed grid cell for a viewer.
///
/// A pure function of its inputs: the probe point `eye + direction * distance`
/// is rounded half-up per component. Callers bounds-check the result against
/// the world before acting on it.
pub fn aim_cell(eye: Point3<f32>, direction: Vector3<f32>, distance: f32) -> Point3<i32> {
    let probe = eye + direction * distance;
    Point3::new(
        round_half_up(probe.x),
        round_half_up(probe.y),
        round_half_up(probe.z),
    )
}

/// Rounds with ties going toward positive infinity, so -0.5 rounds to 0.
/// `f32::round` ties away from zero, which disagrees on negative halves.
fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn probe_in_front_of_the_starting_pose() {
        // eye=(0,2,5) looking down -Z probes (0, 2, 3.5), rounding up to z=4
        let cell = aim_cell(
            Point3::new(0.0, 2.0, 5.0),
            Vector3::new(0.0, 0.0, -1.0),
            AIM_PROBE_DISTANCE,
        );
        assert_eq!(cell, Point3::new(0, 2, 4));
    }

    #[test]
    fn identical_inputs_yield_identical_cells() {
        let eye = Point3::new(3.2, 1.7, 8.4);
        let direction = Vector3::new(0.6, -0.3, 0.74);
        let first = aim_cell(eye, direction, AIM_PROBE_DISTANCE);
        for _ in 0..8 {
            assert_eq!(aim_cell(eye, direction, AIM_PROBE_DISTANCE), first);
        }
    }

    #[test_case(0.4, 0; "positive 0.4")]
    #[test_case(0.5, 1)]
    #[test_case(2.5, 3)]
    #[test_case(-0.4, 0; "negative 0.4")]
    #[test_case(-0.5, 0)]
    #[test_case(-0.6, -1)]
    fn rounding_ties_go_up(value: f32, expected: i32) {
        assert_eq!(round_half_up(value), expected);
    }

    #[test]
    fn aim_can_land_outside_the_grid() {
        let cell = aim_cell(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            AIM_PROBE_DISTANCE,
        );
        // out-of-bounds cells are legal output; callers bounds-check
        assert_eq!(cell, Point3::new(0, 0, 2));

        let cell = aim_cell(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            AIM_PROBE_DISTANCE,
        );
        assert_eq!(cell, Point3::new(0, -1, 0));
    }
}
