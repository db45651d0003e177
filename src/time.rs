//! Scene clock advancement.
//!
//! The only place real time enters the scene: everything downstream reads
//! [`SceneClock`].

use bevy::prelude::*;

use crate::types::{SceneClock, SceneSystems};

/// Plugin providing the scene clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(Update, advance_clock.in_set(SceneSystems::Clock));
    }
}

/// Advance the scene clock by the real frame delta.
fn advance_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}
