//! Headless scene mount / teardown tests.
//!
//! These tests verify the scene builds and tears down cleanly without GPU.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use bevy::window::WindowResized;
use common::{TEST_STAR_COUNT, count, scene_app, set_view_mode, view_mode};
use deep_space_eye::camera::MainCamera;
use deep_space_eye::catalog::{Catalog, CatalogEntry};
use deep_space_eye::scene::bodies::{OrbitingBody, Star};
use deep_space_eye::scene::highlight::{HighlightTargets, track_selected_entity};
use deep_space_eye::scene::orbits::OrbitGuide;
use deep_space_eye::scene::probes::ProbeMarker;
use deep_space_eye::scene::{PickSphere, SceneEntity, SceneIndex, SceneMount};
use deep_space_eye::shell::{SelectEntity, SelectionSource, ShellCommand, ViewMode};
use deep_space_eye::types::{RenderSurface, SceneSystems};

#[test]
fn test_scene_mounts_on_first_frame() {
    let mut app = scene_app();
    app.update();

    assert_eq!(view_mode(&app), ViewMode::Scene);
    let mount = *app.world().resource::<SceneMount>();
    assert_eq!(
        mount,
        SceneMount {
            bodies: 8,
            guides: 8,
            probes: 8,
            stars: TEST_STAR_COUNT,
        }
    );

    assert_eq!(count::<Star>(&mut app), 1);
    assert_eq!(count::<OrbitingBody>(&mut app), 8);
    assert_eq!(count::<OrbitGuide>(&mut app), 8);
    assert_eq!(count::<ProbeMarker>(&mut app), 8);
    assert_eq!(count::<PointLight>(&mut app), 1);
    // star + planets + probe markers
    assert_eq!(count::<PickSphere>(&mut app), 17);
    assert_eq!(app.world().resource::<SceneIndex>().len(), 17);
}

#[test]
fn test_teardown_leaves_nothing_behind() {
    let mut app = scene_app();
    app.update();
    assert!(count::<Mesh3d>(&mut app) > 0);

    set_view_mode(&mut app, ViewMode::Details);
    app.update();

    assert!(app.world().get_resource::<SceneMount>().is_none());
    assert_eq!(count::<SceneEntity>(&mut app), 0);
    assert_eq!(count::<Mesh3d>(&mut app), 0);
    assert_eq!(count::<PickSphere>(&mut app), 0);
    assert_eq!(count::<PointLight>(&mut app), 0);
    assert!(app.world().resource::<SceneIndex>().is_empty());

    // Staying in the detail view must not remount.
    app.update();
    assert!(app.world().get_resource::<SceneMount>().is_none());
}

#[test]
fn test_remount_produces_identical_scene() {
    let mut app = scene_app();
    app.update();
    let first = *app.world().resource::<SceneMount>();
    let meshes = count::<Mesh3d>(&mut app);

    for _ in 0..3 {
        set_view_mode(&mut app, ViewMode::Details);
        app.update();
        set_view_mode(&mut app, ViewMode::Scene);
        app.update();

        assert_eq!(*app.world().resource::<SceneMount>(), first);
        assert_eq!(count::<Mesh3d>(&mut app), meshes);
        assert_eq!(count::<PickSphere>(&mut app), 17);
        assert_eq!(app.world().resource::<SceneIndex>().len(), 17);
    }
}

#[test]
fn test_invalid_surface_refuses_to_mount() {
    let mut app = scene_app();
    app.insert_resource(RenderSurface::new(0.0, 0.0));

    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().get_resource::<SceneMount>().is_none());
    assert_eq!(count::<Mesh3d>(&mut app), 0);

    // Becomes mountable once the surface has a size.
    app.insert_resource(RenderSurface::new(800.0, 600.0));
    app.update();
    assert!(app.world().get_resource::<SceneMount>().is_some());
}

#[test]
fn test_bodies_move_with_clock() {
    let mut app = scene_app();
    app.update();

    let positions = |app: &mut App| -> Vec<Vec3> {
        let mut query = app.world_mut().query::<(&Transform, &OrbitingBody)>();
        let mut out: Vec<(&'static str, Vec3)> = query
            .iter(app.world())
            .map(|(t, o)| (o.body.id, t.translation))
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out.into_iter().map(|(_, p)| p).collect()
    };

    let before = positions(&mut app);
    app.world_mut()
        .resource_mut::<deep_space_eye::types::SceneClock>()
        .elapsed += 50.0;
    app.update();
    let after = positions(&mut app);

    assert_eq!(before.len(), 8);
    for (a, b) in before.iter().zip(&after) {
        assert!((*a - *b).length() > 1e-3, "body did not move");
        // Still on its orbit circle.
        let ra = Vec2::new(a.x, a.z).length();
        let rb = Vec2::new(b.x, b.z).length();
        assert!((ra - rb).abs() < 1e-3);
    }
}

fn camera_aspect(app: &mut App) -> f32 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Projection, With<MainCamera>>();
    match query.single(app.world()).unwrap() {
        Projection::Perspective(perspective) => perspective.aspect_ratio,
        _ => panic!("main camera is not perspective"),
    }
}

fn resize(app: &mut App, width: f32, height: f32) {
    let window = app.world_mut().spawn_empty().id();
    app.world_mut().write_message(WindowResized {
        window,
        width,
        height,
    });
    app.update();
}

#[test]
fn test_resize_updates_surface_and_aspect() {
    let mut app = scene_app();
    app.world_mut().spawn((
        MainCamera,
        Projection::from(PerspectiveProjection {
            aspect_ratio: 1280.0 / 720.0,
            ..default()
        }),
    ));
    app.update();

    resize(&mut app, 800.0, 800.0);

    assert_eq!(
        *app.world().resource::<RenderSurface>(),
        RenderSurface::new(800.0, 800.0)
    );
    assert_relative_eq!(camera_aspect(&mut app), 1.0);
    // Resizing does not rebuild the scene.
    assert!(app.world().get_resource::<SceneMount>().is_some());
    assert_eq!(count::<OrbitingBody>(&mut app), 8);

    // A collapsed window is recorded but leaves the aspect alone.
    resize(&mut app, 0.0, 0.0);
    assert!(!app.world().resource::<RenderSurface>().is_valid());
    assert_relative_eq!(camera_aspect(&mut app), 1.0);
}

fn select(app: &mut App, entry: CatalogEntry) {
    app.world_mut().write_message(SelectEntity {
        entry,
        source: SelectionSource::List,
    });
    app.update();
}

#[test]
fn test_selection_ring_follows_selected_entity() {
    let mut app = scene_app();
    app.init_resource::<HighlightTargets>()
        .add_systems(Update, track_selected_entity.after(SceneSystems::Selection));
    app.update();
    assert_eq!(app.world().resource::<HighlightTargets>().selected, None);

    let catalog = Catalog::default();
    select(&mut app, CatalogEntry::Body(catalog.body("mars").unwrap()));

    let mut bodies = app.world_mut().query::<(Entity, &OrbitingBody)>();
    let mars = bodies
        .iter(app.world())
        .find(|(_, orbiting)| orbiting.body.id == "mars")
        .map(|(entity, _)| entity);
    assert!(mars.is_some());
    assert_eq!(view_mode(&app), ViewMode::Scene);
    assert_eq!(app.world().resource::<HighlightTargets>().selected, mars);

    select(&mut app, CatalogEntry::Probe(catalog.probe("juno").unwrap()));
    let mut markers = app.world_mut().query::<(Entity, &ProbeMarker)>();
    let juno = markers
        .iter(app.world())
        .find(|(_, marker)| marker.probe.id == "juno")
        .map(|(entity, _)| entity);
    assert!(juno.is_some());
    assert_eq!(app.world().resource::<HighlightTargets>().selected, juno);

    app.world_mut().write_message(ShellCommand::GoHome);
    app.update();
    assert_eq!(app.world().resource::<HighlightTargets>().selected, None);
}
