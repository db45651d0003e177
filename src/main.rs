//! Deep Space Eye - Solar System Explorer
//!
//! A desktop application for browsing the solar system and its deep-space
//! probes in 3D, with catalog details and AI-generated background text.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use deep_space_eye::camera::CameraPlugin;
use deep_space_eye::catalog::Catalog;
use deep_space_eye::config::ExplorerConfig;
use deep_space_eye::enrichment::{EnrichmentClient, EnrichmentPlugin, GeminiClient};
use deep_space_eye::scene::ScenePlugin;
use deep_space_eye::shell::ShellPlugin;
use deep_space_eye::time::TimePlugin;
use deep_space_eye::ui::UiPlugin;

fn main() {
    // Logging starts with the app, so a load failure is reported from Startup.
    let (config, config_error) = match ExplorerConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ExplorerConfig::default(), Some(err.to_string())),
    };
    let enrichment = EnrichmentClient::new(GeminiClient::from_config(&config));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Deep Space Eye".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(Catalog::default())
        .insert_resource(config)
        .insert_resource(enrichment)
        .add_plugins((
            ShellPlugin,
            TimePlugin,
            CameraPlugin,
            ScenePlugin,
            EnrichmentPlugin,
            UiPlugin,
        ))
        .add_systems(Startup, move || {
            if let Some(err) = &config_error {
                warn!("Using default configuration: {}", err);
            }
        })
        .run();
}
