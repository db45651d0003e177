//! Property-based tests for orbit geometry.

use bevy::math::Vec2;
use proptest::prelude::*;
use std::f32::consts::TAU;

use super::orbits::{
    BodyGeometry, PROBE_SHELL_DEPTH, PROBE_SHELL_INNER, PROBE_SHELL_LIFT, angular_speed,
    orbit_angle, orbit_position, probe_marker_position,
};
use crate::catalog::{BodyKind, CelestialBody};

fn planet(distance: f32, size: f32, color: u32) -> CelestialBody {
    CelestialBody {
        id: "test",
        name: "Test",
        local_name: "测试",
        kind: BodyKind::Planet,
        distance,
        size,
        color,
        description: "",
        probes: &[],
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Recoloring a body never changes where or how large it is drawn.
    #[test]
    fn prop_color_does_not_affect_geometry(
        distance in 0.0f32..100.0,
        size in 0.1f32..10.0,
        a in 0u32..0x1000000,
        b in 0u32..0x1000000,
    ) {
        prop_assert_eq!(
            BodyGeometry::of(&planet(distance, size, a)),
            BodyGeometry::of(&planet(distance, size, b))
        );
    }

    /// Angular speed strictly decreases with distance.
    #[test]
    fn prop_angular_speed_monotonic(
        near in 0.1f32..50.0,
        gap in 0.01f32..50.0,
    ) {
        prop_assert!(angular_speed(near) > angular_speed(near + gap));
    }

    /// Orbit angle is always normalized and the position stays on the circle.
    #[test]
    fn prop_position_on_circle(
        elapsed in 0.0f64..1.0e6,
        distance in 0.1f32..100.0,
        phase in 0.0f32..TAU,
    ) {
        let angle = orbit_angle(elapsed, distance, phase);
        prop_assert!((0.0..=TAU).contains(&angle));

        let radius = BodyGeometry::of(&planet(distance, 1.0, 0)).orbit_radius;
        let p = orbit_position(radius, angle);
        let r = Vec2::new(p.x, p.z).length();
        prop_assert!((r - radius).abs() <= radius * 1e-4 + 1e-4);
        prop_assert_eq!(p.y, 0.0);
    }

    /// Probe markers stay inside their shell for any placement draw.
    #[test]
    fn prop_probe_markers_in_shell(
        count in 1usize..64,
        index_frac in 0.0f64..1.0,
        radial in 0.0f32..1.0,
        lift in -0.5f32..0.5,
    ) {
        let index = ((count as f64) * index_frac) as usize;
        let p = probe_marker_position(index.min(count - 1), count, radial, lift);
        let horizontal = Vec2::new(p.x, p.z).length();
        prop_assert!(horizontal >= PROBE_SHELL_INNER - 1e-3);
        prop_assert!(horizontal <= PROBE_SHELL_INNER + PROBE_SHELL_DEPTH + 1e-3);
        prop_assert!(p.y.abs() <= PROBE_SHELL_LIFT * 0.5);
    }
}
