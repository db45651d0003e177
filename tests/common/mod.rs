//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::transform::TransformPlugin;

use deep_space_eye::catalog::{BodyKind, CelestialBody, Probe};
use deep_space_eye::config::ExplorerConfig;
use deep_space_eye::enrichment::EnrichmentPlugin;
use deep_space_eye::scene::SceneEnginePlugin;
use deep_space_eye::shell::{ShellPlugin, ViewMode};
use deep_space_eye::types::RenderSurface;

/// Background stars spawned by test apps.
pub const TEST_STAR_COUNT: usize = 40;

/// A star and a single planet with no probes, so nothing can occlude the planet.
pub static STAR_AND_EARTH: &[CelestialBody] = &[
    CelestialBody {
        id: "sun",
        name: "Sun",
        local_name: "太阳",
        kind: BodyKind::Star,
        distance: 0.0,
        size: 2.0,
        color: 0xfacc15,
        description: "",
        probes: &[],
    },
    CelestialBody {
        id: "earth",
        name: "Earth",
        local_name: "地球",
        kind: BodyKind::Planet,
        distance: 6.0,
        size: 0.9,
        color: 0x3b82f6,
        description: "",
        probes: &[],
    },
];

pub static NO_PROBES: &[Probe] = &[];

/// Headless app with the shell only.
pub fn shell_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.add_plugins(ShellPlugin);
    app
}

/// Headless app with the shell and the scene engine, on a valid surface.
pub fn scene_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin));
    app.init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(ExplorerConfig {
            seed: Some(7),
            star_count: TEST_STAR_COUNT,
            ..default()
        })
        .insert_resource(RenderSurface::new(1280.0, 720.0));
    app.add_plugins((
        ShellPlugin,
        deep_space_eye::time::TimePlugin,
        SceneEnginePlugin,
    ));
    app
}

/// Headless app with the shell and enrichment.
pub fn enrichment_app() -> App {
    let mut app = shell_app();
    app.add_plugins(EnrichmentPlugin);
    app
}

/// Number of entities carrying component `C`.
pub fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<C>>();
    query.iter(app.world()).count()
}

pub fn view_mode(app: &App) -> ViewMode {
    *app.world().resource::<State<ViewMode>>().get()
}

pub fn set_view_mode(app: &mut App, mode: ViewMode) {
    app.world_mut()
        .resource_mut::<NextState<ViewMode>>()
        .set(mode);
}

/// Update `app` until `done` holds or `timeout` passes. Returns whether it held.
pub fn update_until(app: &mut App, timeout: Duration, mut done: impl FnMut(&App) -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        app.update();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}
