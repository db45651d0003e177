//! Camera system for the solar-system explorer.
//!
//! Orbit/pan/zoom controls around a target point with damped easing, plus
//! the ray and projection helpers used by picking.

use std::f32::consts::PI;

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};

use crate::scene::SceneMount;
use crate::types::{PointerCapture, RenderSurface, SceneSystems};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clipping plane.
pub const NEAR: f32 = 0.1;

/// Far clipping plane.
pub const FAR: f32 = 2000.0;

/// Initial eye position.
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 30.0, 60.0);

/// Closest the camera may get to its target.
pub const MIN_DISTANCE: f32 = 5.0;

/// Furthest the camera may get from its target.
pub const MAX_DISTANCE: f32 = 500.0;

/// Fraction of the pending motion applied per frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Zoom step per scroll line.
pub const ZOOM_SPEED: f32 = 0.95;

/// Keeps the polar angle off the poles so `looking_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-3;

/// Scene background (#020617).
pub const BACKGROUND: Color = Color::srgb(2.0 / 255.0, 6.0 / 255.0, 23.0 / 255.0);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit controls state.
///
/// The eye sits on a sphere around `target` described by an azimuth around
/// +Y (zero looking down -Z from +Z) and a polar angle from +Y. User input
/// accumulates into pending deltas which [`OrbitControls::ease`] bleeds off a
/// fixed fraction at a time, so motion decelerates instead of stopping.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub damping: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_pan: Vec3,
    /// Pending zoom as a log-scale factor on distance.
    pending_zoom: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::looking_from(DEFAULT_EYE, Vec3::ZERO)
    }
}

impl OrbitControls {
    /// Controls placing the eye at `eye` looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let polar = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let azimuth = offset.x.atan2(offset.z);

        Self {
            target,
            azimuth,
            polar,
            distance,
            damping: DAMPING_FACTOR,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_pan: Vec3::ZERO,
            pending_zoom: 0.0,
        }
    }

    /// Current eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az)
    }

    /// Camera transform for the current state.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, surface: &RenderSurface) {
        let height = surface.height.max(1.0);
        self.pending_azimuth -= 2.0 * PI * delta.x / height;
        self.pending_polar -= 2.0 * PI * delta.y / height;
    }

    /// Queue a screen-space pan from a pointer drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2, surface: &RenderSurface) {
        let height = surface.height.max(1.0);
        let half_fov = FOV_DEGREES.to_radians() * 0.5;
        let units_per_pixel = 2.0 * self.distance * half_fov.tan() / height;

        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.pending_pan += (-right * delta.x + up * delta.y) * units_per_pixel;
    }

    /// Queue a zoom of `steps` scroll lines; positive zooms in.
    pub fn zoom(&mut self, steps: f32) {
        self.pending_zoom += steps * ZOOM_SPEED.ln();
    }

    /// Apply one frame of damped motion.
    pub fn ease(&mut self) {
        let k = self.damping;

        self.azimuth += self.pending_azimuth * k;
        self.polar = (self.polar + self.pending_polar * k).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.distance = (self.distance * (self.pending_zoom * k).exp()).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.target += self.pending_pan * k;

        let decay = 1.0 - k;
        self.pending_azimuth *= decay;
        self.pending_polar *= decay;
        self.pending_zoom *= decay;
        self.pending_pan *= decay;
    }

    /// Ray from the eye through a pixel of the surface.
    pub fn ray_through(&self, surface: &RenderSurface, pixel: Vec2) -> Option<Ray3d> {
        if !surface.is_valid() {
            return None;
        }

        let ndc = surface.to_ndc(pixel);
        let tan_half = (FOV_DEGREES.to_radians() * 0.5).tan();
        let view_dir = Vec3::new(ndc.x * tan_half * surface.aspect_ratio(), ndc.y * tan_half, -1.0);

        let transform = self.transform();
        let direction = Dir3::new(transform.rotation * view_dir).ok()?;
        Some(Ray3d {
            origin: transform.translation,
            direction,
        })
    }

    /// Pixel position of a world point, or `None` when it is behind the eye.
    pub fn project(&self, surface: &RenderSurface, point: Vec3) -> Option<Vec2> {
        if !surface.is_valid() {
            return None;
        }

        let transform = self.transform();
        let view = transform.rotation.inverse() * (point - transform.translation);
        if view.z >= -f32::EPSILON {
            return None;
        }

        let tan_half = (FOV_DEGREES.to_radians() * 0.5).tan();
        let depth = -view.z;
        let ndc = Vec2::new(
            view.x / (depth * tan_half * surface.aspect_ratio()),
            view.y / (depth * tan_half),
        );
        Some(surface.from_ndc(ndc))
    }
}

/// Ray from the rendering camera through a pixel of the surface.
///
/// Asks the camera itself, so picking agrees with the rendered frame. A
/// camera without a computed viewport (no render target yet, or running
/// headless) falls back to the controls' model of the same projection.
pub fn pointer_ray(
    camera: Option<(&Camera, &GlobalTransform)>,
    controls: &OrbitControls,
    surface: &RenderSurface,
    pixel: Vec2,
) -> Option<Ray3d> {
    if let Some((camera, transform)) = camera
        && camera.logical_viewport_size().is_some()
    {
        return camera.viewport_to_world(transform, pixel).ok();
    }
    controls.ray_through(surface, pixel)
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitControls>()
            .init_resource::<PointerCapture>()
            .init_resource::<RenderSurface>()
            .insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    camera_input.run_if(resource_exists::<SceneMount>),
                    ease_controls,
                    sync_camera_transform,
                )
                    .chain()
                    .in_set(SceneSystems::Camera),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, controls: Res<OrbitControls>, surface: Res<RenderSurface>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            aspect_ratio: surface.aspect_ratio(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        // Dim fill so unlit hemispheres are not pure black.
        AmbientLight {
            color: Color::WHITE,
            brightness: 150.0,
            ..default()
        },
        controls.transform(),
        MainCamera,
    ));
}

/// Feed pointer drags and scrolling into the orbit controls.
///
/// Left drag orbits, right drag pans, wheel zooms.
fn camera_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    motion: Option<Res<AccumulatedMouseMotion>>,
    scroll: Option<Res<AccumulatedMouseScroll>>,
    capture: Res<PointerCapture>,
    surface: Res<RenderSurface>,
    mut controls: ResMut<OrbitControls>,
) {
    if capture.over_ui {
        return;
    }

    if let (Some(buttons), Some(motion)) = (buttons, motion)
        && motion.delta != Vec2::ZERO
    {
        if buttons.pressed(MouseButton::Left) {
            controls.rotate(motion.delta, &surface);
        } else if buttons.pressed(MouseButton::Right) {
            controls.pan(motion.delta, &surface);
        }
    }

    if let Some(scroll) = scroll
        && scroll.delta.y != 0.0
    {
        let steps = match scroll.unit {
            MouseScrollUnit::Line => scroll.delta.y,
            MouseScrollUnit::Pixel => scroll.delta.y / 100.0,
        };
        controls.zoom(steps);
    }
}

/// Apply one frame of damped camera easing.
fn ease_controls(mut controls: ResMut<OrbitControls>) {
    controls.ease();
}

/// Copy the controls' pose onto the camera entity.
fn sync_camera_transform(
    controls: Res<OrbitControls>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = controls.transform();
}
