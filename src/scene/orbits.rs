//! Orbit geometry and orbit guide rendering.
//!
//! Orbits are stylized circles on the XZ plane: radius is the catalog
//! distance times [`ORBIT_SCALE`], angular speed falls off with distance.
//! Positions are a pure function of the scene clock, never accumulated.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::CelestialBody;

use super::SceneMount;

/// Render units per catalog distance unit.
pub const ORBIT_SCALE: f32 = 4.0;

/// Angular speed numerator: `speed = ORBIT_SPEED / distance` (rad per clock unit).
pub const ORBIT_SPEED: f32 = 0.2;

/// Segments used when drawing an orbit guide.
pub const GUIDE_SEGMENTS: u32 = 128;

/// Orbit guide color (#334155 at 30% opacity).
pub const GUIDE_COLOR: Color = Color::srgba(0x33 as f32 / 255.0, 0x41 as f32 / 255.0, 0x55 as f32 / 255.0, 0.3);

/// Inner radius of the shell probe markers sit on.
pub const PROBE_SHELL_INNER: f32 = 15.0;

/// Radial thickness of the probe shell.
pub const PROBE_SHELL_DEPTH: f32 = 80.0;

/// Full vertical spread of probe markers.
pub const PROBE_SHELL_LIFT: f32 = 10.0;

/// Orbit radius in render units.
pub fn orbit_radius(distance: f32) -> f32 {
    distance * ORBIT_SCALE
}

/// Sphere radius in render units.
pub fn sphere_radius(size: f32) -> f32 {
    size
}

/// Angular speed for a body at `distance`. Closer bodies are faster; a body
/// without a positive distance does not move.
pub fn angular_speed(distance: f32) -> f32 {
    if distance > 0.0 {
        ORBIT_SPEED / distance
    } else {
        0.0
    }
}

/// Orbital angle at clock time `elapsed`.
pub fn orbit_angle(elapsed: f64, distance: f32, phase: f32) -> f32 {
    let turns = elapsed * angular_speed(distance) as f64 + phase as f64;
    turns.rem_euclid(std::f64::consts::TAU) as f32
}

/// Point on an orbit circle of `radius` at `angle`.
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Geometry derived from a catalog body, independent of its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyGeometry {
    pub orbit_radius: f32,
    pub sphere_radius: f32,
}

impl BodyGeometry {
    pub fn of(body: &CelestialBody) -> Self {
        Self {
            orbit_radius: orbit_radius(body.distance),
            sphere_radius: sphere_radius(body.size),
        }
    }
}

/// Decorative placement for the probe marker at `index` of `count`.
///
/// Markers are spread evenly by angle in probe order; `radial` in [0, 1)
/// picks the depth within the shell and `lift` in [-0.5, 0.5) the height.
pub fn probe_marker_position(index: usize, count: usize, radial: f32, lift: f32) -> Vec3 {
    let angle = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32 * TAU
    };
    let dist = PROBE_SHELL_INNER + radial * PROBE_SHELL_DEPTH;
    Vec3::new(angle.cos() * dist, lift * PROBE_SHELL_LIFT, angle.sin() * dist)
}

/// A closed circular orbit guide around the origin.
#[derive(Component, Clone, Debug)]
pub struct OrbitGuide {
    pub body_id: &'static str,
    pub radius: f32,
}

/// Plugin drawing orbit guides.
pub struct OrbitGuidePlugin;

impl Plugin for OrbitGuidePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            draw_orbit_guides.run_if(resource_exists::<SceneMount>),
        );
    }
}

/// Draw every orbit guide as a closed polyline on the XZ plane.
fn draw_orbit_guides(mut gizmos: Gizmos, guides: Query<&OrbitGuide>) {
    for guide in guides.iter() {
        let mut prev = orbit_position(guide.radius, 0.0);
        for i in 1..=GUIDE_SEGMENTS {
            let angle = i as f32 / GUIDE_SEGMENTS as f32 * TAU;
            let next = orbit_position(guide.radius, angle);
            gizmos.line(prev, next, GUIDE_COLOR);
            prev = next;
        }
    }
}
