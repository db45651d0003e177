//! Scene engine: builds the 3D solar system, animates it, and turns pointer
//! clicks into catalog selections.
//!
//! The scene is mounted whenever the shell is in [`ViewMode::Scene`] and
//! the render surface is usable, and torn down completely when the shell
//! leaves that mode. Every mount produces the same set of entities.

pub mod background;
pub mod bodies;
pub mod highlight;
pub mod orbits;
pub mod picking;
pub mod probes;

#[cfg(test)]
mod proptest_orbits;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::camera::{MainCamera, OrbitControls};
use crate::catalog::{Catalog, CatalogEntry, CelestialBody, Probe};
use crate::config::ExplorerConfig;
use crate::shell::ViewMode;
use crate::types::{PointerCapture, RenderSurface, SceneClock, SceneSystems};

use self::background::{rotate_starfield, spawn_starfield};
use self::bodies::{animate_bodies, spawn_bodies};
use self::highlight::HighlightPlugin;
use self::orbits::OrbitGuidePlugin;
use self::picking::{PointerGesture, SurfaceClick, detect_surface_clicks, resolve_picks};
use self::probes::{rotate_probe_group, spawn_probe_markers};

/// Errors raised while mounting the scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("render surface {width}x{height} is not usable")]
    InvalidSurface { width: f32, height: f32 },
}

/// Present while the scene is mounted. Records what the mount produced.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneMount {
    /// Orbiting bodies (the star excluded).
    pub bodies: usize,
    /// Orbit guide circles.
    pub guides: usize,
    /// Probe markers.
    pub probes: usize,
    /// Background stars.
    pub stars: usize,
}

/// Top-level entity owned by the scene; despawned (with its children) on teardown.
#[derive(Component)]
pub struct SceneEntity;

/// Pickable sphere, in local units before the entity's scale is applied.
#[derive(Component, Clone, Copy, Debug)]
pub struct PickSphere {
    pub radius: f32,
}

/// What a pickable scene entity stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneTag {
    /// The central star; reported as the first catalog body.
    Star,
    Body(&'static CelestialBody),
    Probe(&'static Probe),
}

impl SceneTag {
    pub fn resolve(&self, catalog: &Catalog) -> Option<CatalogEntry> {
        match self {
            SceneTag::Star => catalog.star().map(CatalogEntry::Body),
            SceneTag::Body(body) => Some(CatalogEntry::Body(body)),
            SceneTag::Probe(probe) => Some(CatalogEntry::Probe(probe)),
        }
    }
}

/// Lookup from pickable entities to what they represent.
#[derive(Resource, Default, Debug)]
pub struct SceneIndex {
    tags: HashMap<Entity, SceneTag>,
}

impl SceneIndex {
    pub fn insert(&mut self, entity: Entity, tag: SceneTag) {
        self.tags.insert(entity, tag);
    }

    pub fn get(&self, entity: Entity) -> Option<&SceneTag> {
        self.tags.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &SceneTag)> {
        self.tags.iter().map(|(entity, tag)| (*entity, tag))
    }

    /// Entity currently standing for `entry`, if it is in the scene.
    pub fn entity_for(&self, entry: &CatalogEntry, catalog: &Catalog) -> Option<Entity> {
        self.iter()
            .find(|(_, tag)| tag.resolve(catalog).as_ref() == Some(entry))
            .map(|(entity, _)| entity)
    }
}

/// Check that a renderer can be attached to `surface`.
pub fn validate_surface(surface: &RenderSurface) -> Result<(), SceneError> {
    if surface.is_valid() {
        Ok(())
    } else {
        Err(SceneError::InvalidSurface {
            width: surface.width,
            height: surface.height,
        })
    }
}

/// Scene mounting, animation and picking. Needs no window or renderer.
pub struct SceneEnginePlugin;

impl Plugin for SceneEnginePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SceneSystems::Mount,
                SceneSystems::Clock,
                SceneSystems::Animate,
                SceneSystems::Camera,
                SceneSystems::Picking,
                SceneSystems::Selection,
            )
                .chain(),
        )
        .init_resource::<SceneIndex>()
        .init_resource::<ExplorerConfig>()
        .init_resource::<Catalog>()
        .init_resource::<SceneClock>()
        .init_resource::<OrbitControls>()
        .init_resource::<RenderSurface>()
        .init_resource::<PointerCapture>()
        .add_message::<SurfaceClick>()
        .add_message::<WindowResized>()
        .add_systems(Startup, capture_window_size)
        .add_systems(
            Update,
            (
                track_window_resize.before(SceneSystems::Mount),
                mount_scene
                    .in_set(SceneSystems::Mount)
                    .run_if(in_state(ViewMode::Scene).and(not(resource_exists::<SceneMount>))),
                (animate_bodies, rotate_probe_group, rotate_starfield)
                    .in_set(SceneSystems::Animate)
                    .run_if(resource_exists::<SceneMount>),
                resolve_picks.in_set(SceneSystems::Picking),
            ),
        )
        .add_systems(OnExit(ViewMode::Scene), teardown_scene);
    }
}

/// Full interactive scene: the engine plus gizmo overlays and pointer input.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SceneEnginePlugin, OrbitGuidePlugin, HighlightPlugin))
            .init_resource::<PointerGesture>()
            .add_systems(Update, detect_surface_clicks.before(SceneSystems::Picking));
    }
}

/// Build every scene entity and record the mount.
///
/// Refuses (with a single warning) while the surface has no usable size;
/// the mount is retried each frame until it does.
fn mount_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<Catalog>,
    config: Res<ExplorerConfig>,
    clock: Res<SceneClock>,
    surface: Res<RenderSurface>,
    mut controls: ResMut<OrbitControls>,
    mut index: ResMut<SceneIndex>,
    mut warned: Local<bool>,
) {
    if let Err(err) = validate_surface(&surface) {
        if !*warned {
            warn!("Scene not mounted: {}", err);
            *warned = true;
        }
        return;
    }
    *warned = false;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    *controls = OrbitControls::default();
    index.clear();

    spawn_starfield(
        &mut commands,
        &mut meshes,
        &mut materials,
        config.star_count,
        &mut rng,
    );
    let (bodies, guides) = spawn_bodies(
        &mut commands,
        &mut meshes,
        &mut materials,
        &catalog,
        &clock,
        &mut rng,
        &mut index,
    );
    let probes = spawn_probe_markers(
        &mut commands,
        &mut meshes,
        &mut materials,
        &catalog,
        &mut rng,
        &mut index,
    );

    let mount = SceneMount {
        bodies,
        guides,
        probes,
        stars: config.star_count,
    };
    info!(
        "Scene mounted: {} bodies, {} guides, {} probes, {} stars",
        mount.bodies, mount.guides, mount.probes, mount.stars
    );
    commands.insert_resource(mount);
}

/// Despawn everything the scene owns and forget the mount.
fn teardown_scene(
    mut commands: Commands,
    roots: Query<Entity, With<SceneEntity>>,
    mut index: ResMut<SceneIndex>,
) {
    let mut count = 0;
    for entity in roots.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    index.clear();
    commands.remove_resource::<SceneMount>();
    info!("Scene torn down ({} root entities)", count);
}

/// Seed the render surface from the primary window, if there is one.
fn capture_window_size(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<RenderSurface>,
) {
    if let Ok(window) = window_query.single() {
        *surface = RenderSurface::new(window.width(), window.height());
    }
}

/// Follow window resizes: surface size and camera aspect ratio.
fn track_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut surface: ResMut<RenderSurface>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    let next = RenderSurface::new(last.width, last.height);
    if next == *surface {
        return;
    }
    *surface = next;
    debug!("Render surface resized to {}x{}", next.width, next.height);

    if !next.is_valid() {
        return;
    }
    for mut projection in projections.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = next.aspect_ratio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_surface() {
        assert!(validate_surface(&RenderSurface::new(640.0, 480.0)).is_ok());
        assert_eq!(
            validate_surface(&RenderSurface::new(0.0, 480.0)),
            Err(SceneError::InvalidSurface {
                width: 0.0,
                height: 480.0
            })
        );
    }

    #[test]
    fn test_star_tag_resolves_to_first_body() {
        let catalog = Catalog::default();
        let entry = SceneTag::Star.resolve(&catalog).unwrap();
        assert_eq!(entry.id(), "sun");
        assert!(matches!(entry, CatalogEntry::Body(_)));
    }

    #[test]
    fn test_index_finds_entity_for_entry() {
        let catalog = Catalog::default();
        let mut world = World::new();
        let star = world.spawn_empty().id();
        let earth = world.spawn_empty().id();

        let mut index = SceneIndex::default();
        index.insert(star, SceneTag::Star);
        index.insert(earth, SceneTag::Body(catalog.body("earth").unwrap()));

        let sun_entry = CatalogEntry::Body(catalog.body("sun").unwrap());
        let earth_entry = CatalogEntry::Body(catalog.body("earth").unwrap());
        let mars_entry = CatalogEntry::Body(catalog.body("mars").unwrap());

        assert_eq!(index.entity_for(&sun_entry, &catalog), Some(star));
        assert_eq!(index.entity_for(&earth_entry, &catalog), Some(earth));
        assert_eq!(index.entity_for(&mars_entry, &catalog), None);

        index.clear();
        assert!(index.is_empty());
    }
}
