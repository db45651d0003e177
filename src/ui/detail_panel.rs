//! Detail view for the selected entry.
//!
//! The text shown in each tab is built by plain functions over the catalog
//! so it can be checked without an egui context.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{Catalog, CatalogEntry, Probe, ProbeStatus};
use crate::enrichment::{EnrichmentState, EnrichmentStatus};
use crate::shell::{CurrentSelection, ViewMode};

use super::{colors, icons};

/// Prompt shown when nothing is selected.
pub const EMPTY_SELECTION_TEXT: &str = "请从左侧选择一个行星或探测器以查看详细信息";

/// Shown under "missions" for a body whose probe list resolves to nothing.
pub const NO_MISSIONS_TEXT: &str = "暂无记录的探测任务";

/// Shown on the AI tab while a request is in flight.
pub const LOADING_TEXT: &str = "正在连接 Gemini AI 进行深度分析...";

/// The three detail tabs.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Overview,
    Missions,
    Insights,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Missions, DetailTab::Insights];

    /// Tab label; the missions tab is named differently for bodies and probes.
    pub fn label(&self, entry: &CatalogEntry) -> &'static str {
        match (self, entry) {
            (DetailTab::Overview, _) => "概述",
            (DetailTab::Missions, CatalogEntry::Body(_)) => "相关探测任务",
            (DetailTab::Missions, CatalogEntry::Probe(_)) => "任务详情",
            (DetailTab::Insights, _) => "深空洞察 (AI)",
        }
    }
}

/// Title block of the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailHeader {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

impl DetailHeader {
    pub fn of(entry: &CatalogEntry) -> Self {
        match entry {
            CatalogEntry::Body(body) => Self {
                title: body.local_name.to_string(),
                subtitle: body.name.to_string(),
                badge: "行星数据".to_string(),
            },
            CatalogEntry::Probe(probe) => Self {
                title: probe.name.to_string(),
                subtitle: format!("目标: {}", probe.target),
                badge: format!("航天器状态: {}", probe.status),
            },
        }
    }
}

/// Labelled fixed fields of the overview tab.
pub fn overview_fields(entry: &CatalogEntry) -> Vec<(&'static str, String)> {
    match entry {
        CatalogEntry::Body(body) => vec![
            ("距离太阳", format!("{} AU", body.distance)),
            ("相对大小", body.size.to_string()),
        ],
        CatalogEntry::Probe(probe) => vec![
            ("发射日期", probe.launch_date.to_string()),
            ("探测器类型", probe.kind.to_string()),
        ],
    }
}

/// Content of the missions tab.
#[derive(Clone, Debug, PartialEq)]
pub enum MissionsView {
    /// Resolved probes of a body, in listed order.
    Probes(Vec<&'static Probe>),
    /// A body with no resolvable probes.
    Empty(&'static str),
    /// Narrative for a probe.
    FlightProfile { heading: &'static str, narrative: String },
}

pub fn missions_view(entry: &CatalogEntry, catalog: &Catalog) -> MissionsView {
    match entry {
        CatalogEntry::Body(body) => {
            let probes = catalog.resolved_probes(body);
            if probes.is_empty() {
                MissionsView::Empty(NO_MISSIONS_TEXT)
            } else {
                MissionsView::Probes(probes)
            }
        }
        CatalogEntry::Probe(probe) => MissionsView::FlightProfile {
            heading: "飞行路径与目标",
            narrative: format!(
                "{} 任务的主要目标是探索 {}。自 {} 发射以来，该任务为人类提供了大量宝贵的科学数据。",
                probe.name, probe.target, probe.launch_date
            ),
        },
    }
}

/// Tab state of the detail view.
///
/// The tab is kept while the detail view stays open, so picking another
/// entry from the sidebar keeps the current tab. It starts over at the
/// overview each time the detail view is entered.
pub struct DetailTabPlugin;

impl Plugin for DetailTabPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DetailTab>()
            .add_systems(OnEnter(ViewMode::Details), reset_tab);
    }
}

fn reset_tab(mut tab: ResMut<DetailTab>) {
    tab.set_if_neq(DetailTab::Overview);
}

/// Render the detail view in the central panel.
pub fn detail_panel_system(
    mut contexts: EguiContexts,
    selection: Res<CurrentSelection>,
    catalog: Res<Catalog>,
    enrichment: Res<EnrichmentState>,
    mut tab: ResMut<DetailTab>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::PANEL_BG))
        .show(ctx, |ui| {
            let Some(entry) = selection.entry() else {
                render_empty_state(ui);
                return;
            };

            render_header(ui, &DetailHeader::of(&entry));
            ui.separator();
            render_tabs(ui, &entry, &mut tab);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                match *tab {
                    DetailTab::Overview => render_overview(ui, &entry),
                    DetailTab::Missions => render_missions(ui, &missions_view(&entry, &catalog)),
                    DetailTab::Insights => render_insights(ui, enrichment.status()),
                }
            });
        });
}

fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(egui::RichText::new(icons::INFO).size(48.0).color(colors::MUTED));
        ui.add_space(12.0);
        ui.label(egui::RichText::new(EMPTY_SELECTION_TEXT).size(16.0).color(colors::MUTED));
    });
}

fn render_header(ui: &mut egui::Ui, header: &DetailHeader) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&header.title)
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT),
            );
            ui.label(egui::RichText::new(&header.subtitle).color(colors::MUTED));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::new()
                .fill(colors::ACCENT_BG)
                .stroke(egui::Stroke::new(1.0, colors::ACCENT))
                .corner_radius(6)
                .inner_margin(egui::Margin::symmetric(12, 6))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(&header.badge).color(colors::ACCENT));
                });
        });
    });
    ui.add_space(12.0);
}

fn render_tabs(ui: &mut egui::Ui, entry: &CatalogEntry, tab: &mut DetailTab) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 24.0;
        for candidate in DetailTab::ALL {
            let active = *tab == candidate;
            let color = if active { colors::ACCENT } else { colors::MUTED };
            let label = egui::RichText::new(candidate.label(entry)).color(color);
            if ui.add(egui::Button::new(label).frame(false).selected(active)).clicked() {
                *tab = candidate;
            }
        }
    });
}

fn render_overview(ui: &mut egui::Ui, entry: &CatalogEntry) {
    ui.label(
        egui::RichText::new(entry.description())
            .size(16.0)
            .color(colors::TEXT),
    );
    ui.add_space(20.0);

    ui.horizontal_wrapped(|ui| {
        for (label, value) in overview_fields(entry) {
            egui::Frame::new()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(10)
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.set_min_width(140.0);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(label).small().color(colors::MUTED));
                        ui.label(egui::RichText::new(value).size(18.0).strong().color(colors::TEXT));
                    });
                });
        }
    });
}

fn render_missions(ui: &mut egui::Ui, view: &MissionsView) {
    match view {
        MissionsView::Probes(probes) => {
            for probe in probes {
                egui::Frame::new()
                    .fill(colors::CARD_BG)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .corner_radius(10)
                    .inner_margin(egui::Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(probe.name).strong().color(colors::TEXT));
                                ui.label(egui::RichText::new(probe.description).small().color(colors::MUTED));
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(
                                    egui::RichText::new(probe.status.as_str())
                                        .small()
                                        .color(status_color(probe.status)),
                                );
                            });
                        });
                    });
                ui.add_space(8.0);
            }
        }
        MissionsView::Empty(text) => {
            ui.label(egui::RichText::new(*text).italics().color(colors::MUTED));
        }
        MissionsView::FlightProfile { heading, narrative } => {
            ui.label(egui::RichText::new(*heading).size(20.0).strong().color(colors::TEXT));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(narrative).color(colors::MUTED));
            ui.add_space(16.0);
            egui::Frame::new()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(10)
                .inner_margin(egui::Margin::same(40))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{} 正在获取轨迹图...", icons::ORBIT))
                                .color(colors::MUTED),
                        );
                    });
                });
        }
    }
}

fn render_insights(ui: &mut egui::Ui, status: &EnrichmentStatus) {
    match status {
        EnrichmentStatus::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.add(egui::Spinner::new().size(28.0).color(colors::ACCENT));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(LOADING_TEXT).color(colors::MUTED));
            });
        }
        EnrichmentStatus::Ready(text) => {
            egui::Frame::new()
                .fill(colors::INSIGHT_BG)
                .stroke(egui::Stroke::new(1.0, colors::ACCENT_BG))
                .corner_radius(14)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(format!("{} {}", icons::SPARKLE, text)).color(colors::TEXT),
                    );
                });
        }
        EnrichmentStatus::Idle => {}
    }
}

pub(super) fn status_color(status: ProbeStatus) -> egui::Color32 {
    match status {
        ProbeStatus::Active => colors::ACTIVE,
        ProbeStatus::Inactive | ProbeStatus::Retired => colors::MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str) -> CatalogEntry {
        CatalogEntry::Body(Catalog::default().body(id).unwrap())
    }

    fn probe(id: &str) -> CatalogEntry {
        CatalogEntry::Probe(Catalog::default().probe(id).unwrap())
    }

    #[test]
    fn test_body_header() {
        let header = DetailHeader::of(&body("jupiter"));
        assert_eq!(header.title, "木星");
        assert_eq!(header.subtitle, "Jupiter");
        assert_eq!(header.badge, "行星数据");
    }

    #[test]
    fn test_probe_header_names_target_and_status() {
        let header = DetailHeader::of(&probe("voyager1"));
        assert_eq!(header.title, "旅行者1号");
        assert_eq!(header.subtitle, "目标: interstellar");
        assert_eq!(header.badge, "航天器状态: active");
    }

    #[test]
    fn test_overview_fields_by_kind() {
        let fields = overview_fields(&body("earth"));
        assert_eq!(fields[0].0, "距离太阳");
        assert!(fields[0].1.ends_with(" AU"));

        let fields = overview_fields(&probe("cassini"));
        assert_eq!(fields[0], ("发射日期", "1997-10-15".to_string()));
        assert_eq!(fields[1], ("探测器类型", "orbiter".to_string()));
    }

    #[test]
    fn test_missions_tab_label_by_kind() {
        assert_eq!(DetailTab::Missions.label(&body("mars")), "相关探测任务");
        assert_eq!(DetailTab::Missions.label(&probe("juno")), "任务详情");
        assert_eq!(DetailTab::Insights.label(&probe("juno")), "深空洞察 (AI)");
    }

    #[test]
    fn test_missions_for_body_with_probes() {
        let catalog = Catalog::default();
        match missions_view(&body("mars"), &catalog) {
            MissionsView::Probes(probes) => {
                let ids: Vec<_> = probes.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec!["perseverance", "tianwen1"]);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_missions_empty_state() {
        let catalog = Catalog::default();
        assert_eq!(
            missions_view(&body("venus"), &catalog),
            MissionsView::Empty(NO_MISSIONS_TEXT)
        );
    }

    #[test]
    fn test_probe_missions_is_narrative() {
        let catalog = Catalog::default();
        match missions_view(&probe("voyager1"), &catalog) {
            MissionsView::FlightProfile { narrative, .. } => {
                assert!(narrative.starts_with("旅行者1号 任务的主要目标是探索 interstellar。"));
                assert!(narrative.contains("自 1977-09-05 发射以来"));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }
}
