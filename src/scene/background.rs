//! Background starfield.
//!
//! Purely decorative: uniformly random points in a large cube, rotating
//! very slowly. Not pickable.

use bevy::prelude::*;
use rand::Rng;

use super::SceneEntity;

/// Edge length of the starfield cube.
pub const STARFIELD_EXTENT: f32 = 1500.0;

/// Starfield rotation per frame.
pub const STARFIELD_SPIN: f32 = 0.00005;

/// Parent of all background stars.
#[derive(Component)]
pub struct Starfield;

/// Spawn `count` background stars under a single rotating parent.
pub(super) fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    count: usize,
    rng: &mut impl Rng,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.2));

    let half = STARFIELD_EXTENT * 0.5;
    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Starfield,
            SceneEntity,
        ))
        .with_children(|field| {
            for _ in 0..count {
                let position = Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                );
                field.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(position),
                ));
            }
        });

    debug!("Spawned {} background stars", count);
}

/// Slowly rotate the starfield.
pub fn rotate_starfield(mut fields: Query<&mut Transform, With<Starfield>>) {
    for mut transform in fields.iter_mut() {
        transform.rotate_y(STARFIELD_SPIN);
    }
}
