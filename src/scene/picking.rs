//! Pointer picking.
//!
//! Clicks on the render surface arrive as [`SurfaceClick`] messages in pixel
//! coordinates. Each click is turned into a ray from the main camera and
//! intersected with every pickable sphere; the nearest hit is looked up in
//! the [`SceneIndex`] and reported through the selection bridge.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{MainCamera, OrbitControls, pointer_ray};
use crate::catalog::Catalog;
use crate::shell::{SelectEntity, SelectionSource};
use crate::types::{PointerCapture, RenderSurface};

use super::{PickSphere, SceneIndex, SceneMount};

/// Pointer travel (pixels) beyond which a press/release is a drag, not a click.
pub const CLICK_TOLERANCE: f32 = 4.0;

/// A click on the render surface, in logical pixels from the top-left corner.
#[derive(Message, Clone, Copy, Debug)]
pub struct SurfaceClick {
    pub position: Vec2,
}

/// Press position of the current left-button gesture.
#[derive(Resource, Default)]
pub struct PointerGesture {
    pressed_at: Option<Vec2>,
}

/// Distance along `ray` to its first intersection with a sphere, if any.
///
/// A ray starting inside the sphere hits its far side.
pub fn ray_sphere_distance(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(*ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Nearest sphere hit by `ray` among `(entity, center, radius)` candidates.
pub fn nearest_hit(
    ray: &Ray3d,
    candidates: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<(Entity, f32)> {
    candidates
        .into_iter()
        .filter_map(|(entity, center, radius)| {
            ray_sphere_distance(ray, center, radius).map(|d| (entity, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Turn left-button press/release pairs into surface clicks.
///
/// Presses that start over the UI are ignored, as are gestures that moved
/// far enough to be a camera drag.
pub fn detect_surface_clicks(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    capture: Res<PointerCapture>,
    mut gesture: ResMut<PointerGesture>,
    mut clicks: MessageWriter<SurfaceClick>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        gesture.pressed_at = if capture.over_ui { None } else { cursor };
    }

    if buttons.just_released(MouseButton::Left)
        && let (Some(start), Some(end)) = (gesture.pressed_at.take(), cursor)
        && start.distance(end) <= CLICK_TOLERANCE
    {
        clicks.write(SurfaceClick { position: end });
    }
}

/// Resolve pending clicks against the current scene.
///
/// Clicks that arrive while no scene is mounted are discarded.
pub fn resolve_picks(
    mut clicks: MessageReader<SurfaceClick>,
    mount: Option<Res<SceneMount>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    controls: Res<OrbitControls>,
    surface: Res<RenderSurface>,
    index: Res<SceneIndex>,
    catalog: Res<Catalog>,
    pickables: Query<(Entity, &GlobalTransform, &PickSphere), Without<MainCamera>>,
    mut selections: MessageWriter<SelectEntity>,
) {
    if mount.is_none() {
        clicks.clear();
        return;
    }

    let camera = cameras.single().ok();
    for click in clicks.read() {
        let Some(ray) = pointer_ray(camera, &controls, &surface, click.position) else {
            continue;
        };

        let candidates = pickables.iter().map(|(entity, global, sphere)| {
            let scale = global.compute_transform().scale.max_element();
            (entity, global.translation(), sphere.radius * scale)
        });

        let Some((entity, distance)) = nearest_hit(&ray, candidates) else {
            continue;
        };

        let Some(entry) = index.get(entity).and_then(|tag| tag.resolve(&catalog)) else {
            warn!("Picked entity {:?} has no catalog tag", entity);
            continue;
        };

        debug!("Picked {} at distance {:.2}", entry.id(), distance);
        selections.write(SelectEntity {
            entry,
            source: SelectionSource::Scene,
        });
    }
}
