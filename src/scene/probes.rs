//! Probe markers.
//!
//! Markers sit on a decorative shell around the star, one per probe in
//! catalog order, grouped under a slowly rotating parent.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{Catalog, Probe};

use super::orbits::probe_marker_position;
use super::{PickSphere, SceneEntity, SceneIndex, SceneTag};

/// Render radius of a probe marker.
pub const MARKER_RADIUS: f32 = 0.15;

/// Probe group rotation per frame.
pub const GROUP_SPIN: f32 = 0.0005;

/// Marker color (#4ade80).
pub const MARKER_COLOR: Color = Color::srgb(0x4a as f32 / 255.0, 0xde as f32 / 255.0, 0x80 as f32 / 255.0);

/// Parent of all probe markers.
#[derive(Component)]
pub struct ProbeGroup;

/// Marker for a single probe.
#[derive(Component, Clone, Debug)]
pub struct ProbeMarker {
    pub probe: &'static Probe,
}

/// Spawn the probe group with one marker per catalog probe.
///
/// Returns the number of markers spawned.
pub(super) fn spawn_probe_markers(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    catalog: &Catalog,
    rng: &mut impl Rng,
    index: &mut SceneIndex,
) -> usize {
    let mesh = meshes.add(Sphere::new(MARKER_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: MARKER_COLOR,
        unlit: true,
        ..default()
    });

    let count = catalog.probes().len();
    let mut markers = Vec::with_capacity(count);

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            ProbeGroup,
            SceneEntity,
        ))
        .with_children(|group| {
            for (i, probe) in catalog.probes().iter().enumerate() {
                let position =
                    probe_marker_position(i, count, rng.gen_range(0.0..1.0), rng.gen_range(-0.5..0.5));
                let marker = group
                    .spawn((
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(position),
                        PickSphere {
                            radius: MARKER_RADIUS,
                        },
                        ProbeMarker { probe },
                    ))
                    .id();
                markers.push((marker, probe));
            }
        });

    let spawned = markers.len();
    for (marker, probe) in markers {
        index.insert(marker, SceneTag::Probe(probe));
    }
    spawned
}

/// Slowly rotate the probe group.
pub fn rotate_probe_group(mut groups: Query<&mut Transform, With<ProbeGroup>>) {
    for mut transform in groups.iter_mut() {
        transform.rotate_y(GROUP_SPIN);
    }
}
