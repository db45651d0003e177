//! Top-level view state and the selection bridge.
//!
//! The scene and the lists never touch the shell state directly: they send
//! [`SelectEntity`] and [`ShellCommand`] messages which are applied here once
//! per frame.

use bevy::prelude::*;

use crate::catalog::CatalogEntry;
use crate::types::SceneSystems;

/// Which main view is shown.
#[derive(States, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// The 3D scene.
    #[default]
    Scene,
    /// The detail panel for the current selection.
    Details,
}

/// Which list the sidebar shows.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityType {
    #[default]
    SolarSystem,
    Probes,
}

/// The selected catalog entry, if any.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentSelection(pub Option<CatalogEntry>);

impl CurrentSelection {
    pub fn entry(&self) -> Option<CatalogEntry> {
        self.0
    }

    pub fn is(&self, entry: &CatalogEntry) -> bool {
        self.0.as_ref() == Some(entry)
    }
}

/// Where a selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    /// A click in the 3D scene.
    Scene,
    /// A sidebar or list row.
    List,
}

/// Request to select a catalog entry.
#[derive(Message, Clone, Copy, Debug)]
pub struct SelectEntity {
    pub entry: CatalogEntry,
    pub source: SelectionSource,
}

/// Navigation requests from the shell chrome.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Drop the selection and return to the 3D scene.
    GoHome,
    /// Show the detail view; ignored while nothing is selected.
    ShowDetails,
    SetActivity(ActivityType),
}

/// Plugin providing view state and selection handling.
pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewMode>()
            .init_resource::<ActivityType>()
            .init_resource::<CurrentSelection>()
            .add_message::<SelectEntity>()
            .add_message::<ShellCommand>()
            .add_systems(
                Update,
                (apply_selections, apply_shell_commands)
                    .chain()
                    .in_set(SceneSystems::Selection),
            );
    }
}

/// Apply selection requests in arrival order.
///
/// Scene picks also switch to the detail view; list picks leave the view
/// alone.
fn apply_selections(
    mut requests: MessageReader<SelectEntity>,
    mut selection: ResMut<CurrentSelection>,
    mode: Res<State<ViewMode>>,
    mut next_mode: ResMut<NextState<ViewMode>>,
) {
    for request in requests.read() {
        if selection.set_if_neq(CurrentSelection(Some(request.entry))) {
            info!(
                "Selected {} ({:?})",
                request.entry.display_name(),
                request.source
            );
        }
        if request.source == SelectionSource::Scene {
            switch_mode(&mode, &mut next_mode, ViewMode::Details);
        }
    }
}

fn apply_shell_commands(
    mut commands: MessageReader<ShellCommand>,
    mut activity: ResMut<ActivityType>,
    mut selection: ResMut<CurrentSelection>,
    mode: Res<State<ViewMode>>,
    mut next_mode: ResMut<NextState<ViewMode>>,
) {
    for command in commands.read() {
        match command {
            ShellCommand::GoHome => {
                selection.set_if_neq(CurrentSelection(None));
                switch_mode(&mode, &mut next_mode, ViewMode::Scene);
            }
            ShellCommand::ShowDetails => {
                if selection.0.is_some() {
                    switch_mode(&mode, &mut next_mode, ViewMode::Details);
                }
            }
            ShellCommand::SetActivity(kind) => {
                activity.set_if_neq(*kind);
            }
        }
    }
}

/// Queue a transition unless `target` is already the current mode.
fn switch_mode(current: &State<ViewMode>, next: &mut NextState<ViewMode>, target: ViewMode) {
    if *current.get() != target {
        next.set(target);
    }
}
