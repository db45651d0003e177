//! Floating cards drawn over the 3D scene.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::OrbitControls;
use crate::scene::SceneMount;

use super::{colors, icons};

/// Lines of the control guide.
pub const CONTROL_GUIDE: [&str; 4] = [
    "• 鼠标左键：旋转视角",
    "• 鼠标右键：平移视角",
    "• 滚轮：缩放视角",
    "• 点击行星：查看详情",
];

/// Telemetry lines for the camera target.
pub fn telemetry_lines(controls: &OrbitControls, mount: Option<&SceneMount>) -> Vec<String> {
    let status = if mount.is_some() {
        "SCANNING_DEEP_SKY"
    } else {
        "LINK_PENDING"
    };
    vec![
        format!("X_COORD: {:+08.4}", controls.target.x),
        format!("Z_COORD: {:+08.4}", controls.target.z),
        format!("RANGE: {:.1}", controls.distance),
        format!("STATUS: {status}"),
    ]
}

pub fn scene_overlays_system(
    mut contexts: EguiContexts,
    controls: Res<OrbitControls>,
    mount: Option<Res<SceneMount>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Space left over by the side and header panels.
    let free = ctx.available_rect();
    let card = egui::Frame::new()
        .fill(colors::OVERLAY_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(10)
        .inner_margin(egui::Margin::same(12));

    egui::Area::new(egui::Id::new("control_guide"))
        .fixed_pos(free.left_top() + egui::vec2(24.0, 24.0))
        .interactable(false)
        .show(ctx, |ui| {
            card.show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("{} 操作指南", icons::MOUSE))
                        .small()
                        .color(colors::MUTED),
                );
                for line in CONTROL_GUIDE {
                    ui.label(egui::RichText::new(line).small().color(colors::TEXT));
                }
            });
        });

    egui::Area::new(egui::Id::new("telemetry"))
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .fixed_pos(free.right_bottom() - egui::vec2(24.0, 24.0))
        .interactable(false)
        .show(ctx, |ui| {
            card.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("●").color(colors::ACTIVE));
                    ui.label(
                        egui::RichText::new("LIVE TELEMETRY")
                            .small()
                            .strong()
                            .color(colors::TEXT),
                    );
                });
                for line in telemetry_lines(&controls, mount.as_deref()) {
                    ui.label(egui::RichText::new(line).small().monospace().color(colors::MUTED));
                }
            });
        });
}
