//! egui interface: activity bar, sidebar, header, detail view and scene
//! overlays.
//!
//! Panels only read shell state and write [`ShellCommand`] / [`SelectEntity`]
//! messages; the shell applies them on the next frame.
//!
//! [`ShellCommand`]: crate::shell::ShellCommand
//! [`SelectEntity`]: crate::shell::SelectEntity

pub mod detail_panel;
pub mod icons;
pub mod navigation;
pub mod overlays;
pub mod sidebar;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::shell::ViewMode;
use crate::types::PointerCapture;

pub use detail_panel::DetailTab;

/// Palette shared by the panels (slate/blue).
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const ACTIVITY_BG: Color32 = Color32::from_rgb(2, 6, 23);
    pub const SIDEBAR_BG: Color32 = Color32::from_rgba_premultiplied(13, 18, 32, 235);
    pub const HEADER_BG: Color32 = Color32::from_rgba_premultiplied(2, 6, 23, 200);
    pub const PANEL_BG: Color32 = Color32::from_rgb(10, 15, 30);
    pub const OVERLAY_BG: Color32 = Color32::from_rgba_premultiplied(10, 14, 26, 160);
    pub const CARD_BG: Color32 = Color32::from_rgb(24, 32, 48);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(51, 65, 85);
    pub const INSIGHT_BG: Color32 = Color32::from_rgb(14, 24, 48);
    pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
    pub const ACCENT_BG: Color32 = Color32::from_rgba_premultiplied(15, 30, 60, 120);
    pub const ACCENT_STRONG: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACTIVE: Color32 = Color32::from_rgb(74, 222, 128);
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    pub const MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    pub const FAINT: Color32 = Color32::from_rgb(100, 116, 139);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(detail_panel::DetailTabPlugin)
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            // Side panels before the top panel before the central panel, so
            // each claims its space in that order.
            .add_systems(
                EguiPrimaryContextPass,
                (
                    navigation::activity_bar_system,
                    sidebar::sidebar_system,
                    navigation::header_system,
                    detail_panel::detail_panel_system.run_if(in_state(ViewMode::Details)),
                    overlays::scene_overlays_system.run_if(in_state(ViewMode::Scene)),
                    update_pointer_capture,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Record whether egui owns the pointer so scene input can stand down.
fn update_pointer_capture(mut contexts: EguiContexts, mut capture: ResMut<PointerCapture>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let over_ui = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
    if capture.over_ui != over_ui {
        capture.over_ui = over_ui;
    }
}
