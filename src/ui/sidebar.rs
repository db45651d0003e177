//! Sidebar listing: solar-system tree or probe fleet.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{Catalog, CatalogEntry, CelestialBody, Probe};
use crate::shell::{ActivityType, CurrentSelection, SelectEntity, SelectionSource};

use super::detail_panel::status_color;
use super::{colors, icons};

const SIDEBAR_WIDTH: f32 = 300.0;

/// Heading and caption for the active listing.
pub fn sidebar_title(activity: ActivityType) -> (&'static str, &'static str) {
    match activity {
        ActivityType::SolarSystem => ("太阳系结构", "CONTENT TREE"),
        ActivityType::Probes => ("深空探测器", "FLEET LIST"),
    }
}

pub fn sidebar_system(
    mut contexts: EguiContexts,
    activity: Res<ActivityType>,
    selection: Res<CurrentSelection>,
    catalog: Res<Catalog>,
    mut selections: MessageWriter<SelectEntity>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut picked = None;
    let (title, caption) = sidebar_title(*activity);

    egui::SidePanel::left("sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(colors::SIDEBAR_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(title).size(20.0).strong().color(colors::TEXT));
            ui.label(egui::RichText::new(caption).small().color(colors::MUTED));
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 28.0)
                .show(ui, |ui| match *activity {
                    ActivityType::SolarSystem => {
                        for (body, probes) in catalog.body_tree() {
                            body_row(ui, body, &probes, &selection, &mut picked);
                        }
                    }
                    ActivityType::Probes => {
                        for probe in catalog.probes() {
                            fleet_row(ui, probe, &selection, &mut picked);
                        }
                    }
                });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("数据版本: 2024.Q4").small().color(colors::FAINT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("连接状态: 实时").small().color(colors::FAINT));
                    });
                });
            });
        });

    if let Some(entry) = picked {
        selections.write(SelectEntity {
            entry,
            source: SelectionSource::List,
        });
    }
}

/// A body with its resolved probes nested underneath.
fn body_row(
    ui: &mut egui::Ui,
    body: &'static CelestialBody,
    probes: &[&'static Probe],
    selection: &CurrentSelection,
    picked: &mut Option<CatalogEntry>,
) {
    let entry = CatalogEntry::Body(body);
    let selected = selection.is(&entry);

    let [_, r, g, b] = body.color.to_be_bytes();
    let label = egui::RichText::new(body.local_name)
        .color(if selected { colors::ACCENT } else { colors::TEXT });
    let clicked = ui
        .horizontal(|ui| {
            ui.label(egui::RichText::new("●").color(egui::Color32::from_rgb(r, g, b)));
            let clicked = ui
                .add(egui::Button::new(label).selected(selected).frame(selected))
                .clicked();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(body.name).small().monospace().color(colors::FAINT));
            });
            clicked
        })
        .inner;
    if clicked {
        *picked = Some(entry);
    }

    if probes.is_empty() {
        return;
    }
    ui.indent(body.id, |ui| {
        for &probe in probes {
            let entry = CatalogEntry::Probe(probe);
            let selected = selection.is(&entry);
            let text = egui::RichText::new(format!("{} {}", icons::PROBE, probe.name))
                .small()
                .color(if selected { colors::TEXT } else { colors::MUTED });
            if ui
                .add(egui::Button::new(text).selected(selected).frame(selected))
                .clicked()
            {
                *picked = Some(entry);
            }
        }
    });
}

/// A fleet card: name, status badge, target and launch year.
fn fleet_row(
    ui: &mut egui::Ui,
    probe: &'static Probe,
    selection: &CurrentSelection,
    picked: &mut Option<CatalogEntry>,
) {
    let entry = CatalogEntry::Probe(probe);
    let selected = selection.is(&entry);

    let frame = egui::Frame::new()
        .fill(if selected { colors::ACCENT_BG } else { colors::CARD_BG })
        .stroke(egui::Stroke::new(
            1.0,
            if selected { colors::ACCENT } else { colors::CARD_BORDER },
        ))
        .corner_radius(10)
        .inner_margin(egui::Margin::same(12));

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(probe.name).strong().color(colors::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(probe.status.as_str().to_uppercase())
                            .small()
                            .color(status_color(probe.status)),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("目标: {}", probe.target))
                        .small()
                        .color(colors::MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(probe.launch_year()).small().color(colors::MUTED));
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        *picked = Some(entry);
    }
    ui.add_space(6.0);
}
