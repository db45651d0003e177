//! Hover and selection highlighting for pickable scene entities.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{MainCamera, OrbitControls, pointer_ray};
use crate::catalog::Catalog;
use crate::shell::CurrentSelection;
use crate::types::{PointerCapture, RenderSurface, SceneSystems};

use super::picking::nearest_hit;
use super::{PickSphere, SceneIndex, SceneMount};

const RING_SEGMENTS: u32 = 48;

/// Ring radius relative to the entity's pick radius.
const RING_SCALE: f32 = 1.6;

/// Smallest ring drawn, so tiny probe markers stay visible.
const MIN_RING_RADIUS: f32 = 0.8;

const HOVER_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.6);
const SELECTED_COLOR: Color = Color::srgba(0.23, 0.51, 0.96, 0.9);

/// Plugin providing hover and selection rings.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HighlightTargets>().add_systems(
            Update,
            (detect_hover, track_selected_entity, draw_highlight)
                .chain()
                .after(SceneSystems::Selection)
                .run_if(resource_exists::<SceneMount>),
        );
    }
}

/// Scene entities that get a ring this frame.
#[derive(Resource, Default, Debug)]
pub struct HighlightTargets {
    /// Entity standing for the current selection, when it is in the scene.
    pub selected: Option<Entity>,
    /// Pickable entity under the cursor, if any.
    pub hovered: Option<Entity>,
}

fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    capture: Res<PointerCapture>,
    controls: Res<OrbitControls>,
    surface: Res<RenderSurface>,
    pickables: Query<(Entity, &GlobalTransform, &PickSphere), Without<MainCamera>>,
    mut targets: ResMut<HighlightTargets>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let cursor = window.cursor_position().filter(|_| !capture.over_ui);
    let camera = cameras.single().ok();
    let Some(ray) = cursor.and_then(|pixel| pointer_ray(camera, &controls, &surface, pixel)) else {
        targets.hovered = None;
        return;
    };

    let candidates = pickables.iter().map(|(entity, global, sphere)| {
        let scale = global.compute_transform().scale.max_element();
        (entity, global.translation(), sphere.radius * scale)
    });
    targets.hovered = nearest_hit(&ray, candidates).map(|(entity, _)| entity);
}

/// Follow the current selection to the scene entity that stands for it.
pub fn track_selected_entity(
    selection: Res<CurrentSelection>,
    index: Res<SceneIndex>,
    catalog: Res<Catalog>,
    mut targets: ResMut<HighlightTargets>,
) {
    targets.selected = selection
        .entry()
        .and_then(|entry| index.entity_for(&entry, &catalog));
}

fn draw_highlight(
    mut gizmos: Gizmos,
    targets: Res<HighlightTargets>,
    pickables: Query<(&GlobalTransform, &PickSphere)>,
) {
    if let Some(entity) = targets.selected
        && let Ok((global, sphere)) = pickables.get(entity)
    {
        draw_ring(&mut gizmos, global, sphere, SELECTED_COLOR);
    }

    if let Some(entity) = targets.hovered.filter(|e| Some(*e) != targets.selected)
        && let Ok((global, sphere)) = pickables.get(entity)
    {
        draw_ring(&mut gizmos, global, sphere, HOVER_COLOR);
    }
}

/// Horizontal ring around a pickable sphere.
fn draw_ring(gizmos: &mut Gizmos, global: &GlobalTransform, sphere: &PickSphere, color: Color) {
    let scale = global.compute_transform().scale.max_element();
    let radius = (sphere.radius * scale * RING_SCALE).max(MIN_RING_RADIUS);
    let center = global.translation();

    for i in 0..RING_SEGMENTS {
        let t0 = i as f32 / RING_SEGMENTS as f32 * TAU;
        let t1 = (i + 1) as f32 / RING_SEGMENTS as f32 * TAU;
        let p0 = center + Vec3::new(radius * t0.cos(), 0.0, radius * t0.sin());
        let p1 = center + Vec3::new(radius * t1.cos(), 0.0, radius * t1.sin());
        gizmos.line(p0, p1, color);
    }
}
