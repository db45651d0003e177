//! Activity bar and header strip.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::shell::{ActivityType, CurrentSelection, ShellCommand, ViewMode};

use super::{colors, icons};

const ACTIVITY_BAR_WIDTH: f32 = 64.0;
const HEADER_HEIGHT: f32 = 48.0;

/// Build tag shown in the header.
pub const CORE_VERSION: &str = "DEEP_SPACE_EYE_CORE_v1.0.4";

/// Header status line for a given local time.
pub fn status_line(local_time: &str) -> String {
    format!("{CORE_VERSION} // LOCAL_TIME: {local_time}")
}

/// Narrow leftmost column: logo (home) and activity toggles.
pub fn activity_bar_system(
    mut contexts: EguiContexts,
    activity: Res<ActivityType>,
    mut commands: MessageWriter<ShellCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("activity_bar")
        .exact_width(ACTIVITY_BAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(colors::ACTIVITY_BG)
                .inner_margin(egui::Margin::symmetric(8, 20)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let logo = egui::Button::new(
                    egui::RichText::new(icons::LOGO).size(30.0).color(colors::ACCENT),
                )
                .frame(false);
                if ui.add(logo).on_hover_text("返回 3D 视角").clicked() {
                    commands.write(ShellCommand::GoHome);
                }
                ui.add_space(32.0);

                for (kind, icon, tooltip) in [
                    (ActivityType::SolarSystem, icons::SOLAR_SYSTEM, "太阳系"),
                    (ActivityType::Probes, icons::PROBES, "探测器"),
                ] {
                    let active = *activity == kind;
                    let button = egui::Button::new(
                        egui::RichText::new(icon)
                            .size(22.0)
                            .color(if active { colors::TEXT } else { colors::MUTED }),
                    )
                    .fill(if active { colors::ACCENT_STRONG } else { egui::Color32::TRANSPARENT })
                    .corner_radius(14)
                    .min_size(egui::vec2(44.0, 44.0));
                    if ui.add(button).on_hover_text(tooltip).clicked() {
                        commands.write(ShellCommand::SetActivity(kind));
                    }
                    ui.add_space(16.0);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(icons::USER).size(24.0).color(colors::MUTED));
                });
            });
        });
}

/// Mode buttons and the status line above the main area.
pub fn header_system(
    mut contexts: EguiContexts,
    mode: Res<State<ViewMode>>,
    selection: Res<CurrentSelection>,
    mut commands: MessageWriter<ShellCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let now = chrono::Local::now().format("%H:%M:%S").to_string();

    egui::TopBottomPanel::top("header")
        .exact_height(HEADER_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(colors::HEADER_BG)
                .inner_margin(egui::Margin::symmetric(24, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if mode_button(ui, icons::SCENE, "3D 视角", *mode.get() == ViewMode::Scene) {
                    commands.write(ShellCommand::GoHome);
                }
                if selection.0.is_some()
                    && mode_button(ui, icons::DETAILS, "详细数据", *mode.get() == ViewMode::Details)
                {
                    commands.write(ShellCommand::ShowDetails);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(status_line(&now))
                            .small()
                            .monospace()
                            .color(colors::FAINT),
                    );
                });
            });
        });
}

/// Pill-shaped mode toggle. Returns whether it was clicked.
fn mode_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let (fill, text) = if active {
        (egui::Color32::WHITE, egui::Color32::BLACK)
    } else {
        (colors::CARD_BG, colors::TEXT)
    };
    let button = egui::Button::new(
        egui::RichText::new(format!("{icon} {label}"))
            .small()
            .strong()
            .color(text),
    )
    .fill(fill)
    .corner_radius(12);
    ui.add(button).clicked()
}
