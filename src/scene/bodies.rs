//! Star and planet spawning and orbital animation.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{Catalog, CelestialBody};
use crate::types::SceneClock;

use super::orbits::{BodyGeometry, OrbitGuide, orbit_angle, orbit_position};
use super::{PickSphere, SceneEntity, SceneIndex, SceneTag};

/// Render radius of the central star.
pub const STAR_RADIUS: f32 = 3.0;

/// Self-rotation per frame for planets.
pub const PLANET_SPIN: f32 = 0.01;

/// Self-rotation per frame for the star.
pub const STAR_SPIN: f32 = 0.002;

/// Marker for the central star.
#[derive(Component)]
pub struct Star;

/// A body moving on its orbit circle.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    pub body: &'static CelestialBody,
    /// Orbit radius in render units.
    pub radius: f32,
    /// Angle at clock time zero.
    pub phase: f32,
}

impl OrbitingBody {
    /// Position at clock time `elapsed`.
    pub fn position_at(&self, elapsed: f64) -> Vec3 {
        orbit_position(self.radius, orbit_angle(elapsed, self.body.distance, self.phase))
    }
}

/// Spawn the star and, for every other body, its orbit guide and sphere.
///
/// Returns `(bodies, guides)` spawned, the star not included.
pub(super) fn spawn_bodies(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    catalog: &Catalog,
    clock: &SceneClock,
    rng: &mut impl Rng,
    index: &mut SceneIndex,
) -> (usize, usize) {
    spawn_star(commands, meshes, materials, index);

    let mut bodies = 0;
    let mut guides = 0;
    for body in catalog.bodies().iter().filter(|b| !b.is_star()) {
        let geometry = BodyGeometry::of(body);

        commands.spawn((
            OrbitGuide {
                body_id: body.id,
                radius: geometry.orbit_radius,
            },
            SceneEntity,
        ));
        guides += 1;

        let orbiting = OrbitingBody {
            body,
            radius: geometry.orbit_radius,
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
        };

        let color = body.render_color();
        let material = materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.7,
            metallic: 0.2,
            ..default()
        });

        let entity = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(geometry.sphere_radius))),
                MeshMaterial3d(material),
                Transform::from_translation(orbiting.position_at(clock.elapsed)),
                PickSphere {
                    radius: geometry.sphere_radius,
                },
                orbiting,
                SceneEntity,
            ))
            .id();
        index.insert(entity, SceneTag::Body(body));
        bodies += 1;
    }

    (bodies, guides)
}

/// Spawn the emissive central star and the point light at the origin.
fn spawn_star(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    index: &mut SceneIndex,
) {
    let color = Color::srgb_u8(0xfa, 0xcc, 0x15);
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 2.0,
        unlit: true,
        ..default()
    });

    let entity = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(STAR_RADIUS))),
            MeshMaterial3d(material),
            Transform::default(),
            PickSphere {
                radius: STAR_RADIUS,
            },
            Star,
            SceneEntity,
        ))
        .id();
    index.insert(entity, SceneTag::Star);

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 1.0e8,
            range: 300.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
        SceneEntity,
    ));
}

/// Reposition every orbiting body from the clock and spin bodies in place.
pub fn animate_bodies(
    clock: Res<SceneClock>,
    mut bodies: Query<(&mut Transform, &OrbitingBody), Without<Star>>,
    mut star: Query<&mut Transform, With<Star>>,
) {
    for (mut transform, orbiting) in bodies.iter_mut() {
        transform.translation = orbiting.position_at(clock.elapsed);
        transform.rotate_y(PLANET_SPIN);
    }

    for mut transform in star.iter_mut() {
        transform.rotate_y(STAR_SPIN);
    }
}
