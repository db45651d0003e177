//! Shared resources, system sets and constants.

use bevy::prelude::*;

/// Ordering of the per-frame scene work.
///
/// Mount first, then the clock and everything that reads it, then picking
/// against the updated positions, then the selection bridge.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSystems {
    /// Build the scene when the surface becomes available.
    Mount,
    /// Advance the scene clock.
    Clock,
    /// Reposition bodies and rotate ambient groups.
    Animate,
    /// Apply damped camera motion.
    Camera,
    /// Resolve pointer clicks into selections.
    Picking,
    /// Apply selection requests to the shell.
    Selection,
}

/// Rate at which the scene clock advances relative to real seconds.
pub const CLOCK_RATE: f64 = 0.1;

/// Explicit animation clock. Orbital positions are a pure function of
/// `elapsed`, so the clock can be set directly in tests.
#[derive(Resource, Clone, Debug)]
pub struct SceneClock {
    /// Scene time units elapsed since start.
    pub elapsed: f64,
    /// Scene units per real second.
    pub rate: f64,
    /// When paused the clock holds still.
    pub paused: bool,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            rate: CLOCK_RATE,
            paused: false,
        }
    }
}

impl SceneClock {
    /// Clock frozen at `elapsed`.
    pub fn frozen_at(elapsed: f64) -> Self {
        Self {
            elapsed,
            paused: true,
            ..default()
        }
    }

    /// Advance by a real-time delta in seconds.
    pub fn tick(&mut self, delta_secs: f64) {
        if !self.paused {
            self.elapsed += delta_secs * self.rate;
        }
    }
}

/// Whether the UI layer currently owns the pointer.
///
/// Written by the UI each frame; scene input ignores the pointer while set.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct PointerCapture {
    pub over_ui: bool,
}

/// Logical pixel size of the render surface.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct RenderSurface {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl RenderSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a renderer can be attached to this surface.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 1.0 && self.height >= 1.0
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert a pixel position (origin top-left, y down) to normalized
    /// device coordinates in [-1, 1] with y up.
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            pixel.x / self.width * 2.0 - 1.0,
            -(pixel.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Inverse of [`RenderSurface::to_ndc`].
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}
