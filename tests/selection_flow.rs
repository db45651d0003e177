//! Selection bridge and view-mode behavior.

mod common;

use common::{shell_app, view_mode};
use deep_space_eye::catalog::{Catalog, CatalogEntry};
use deep_space_eye::shell::{
    ActivityType, CurrentSelection, SelectEntity, SelectionSource, ShellCommand, ViewMode,
};
use deep_space_eye::ui::detail_panel::{
    DetailHeader, DetailTab, DetailTabPlugin, EMPTY_SELECTION_TEXT, MissionsView,
    NO_MISSIONS_TEXT, missions_view,
};

fn select(app: &mut bevy::app::App, entry: CatalogEntry, source: SelectionSource) {
    app.world_mut().write_message(SelectEntity { entry, source });
    app.update();
}

fn command(app: &mut bevy::app::App, command: ShellCommand) {
    app.world_mut().write_message(command);
    app.update();
}

#[test]
fn test_list_selection_keeps_view_mode() {
    let mut app = shell_app();
    app.update();
    let catalog = Catalog::default();
    let voyager = CatalogEntry::Probe(catalog.probe("voyager1").unwrap());

    select(&mut app, voyager, SelectionSource::List);
    app.update();

    assert!(app.world().resource::<CurrentSelection>().is(&voyager));
    assert_eq!(view_mode(&app), ViewMode::Scene);
}

#[test]
fn test_voyager_selection_scenario() {
    let mut app = shell_app();
    app.update();
    let catalog = Catalog::default();
    let voyager = CatalogEntry::Probe(catalog.probe("voyager1").unwrap());

    select(&mut app, voyager, SelectionSource::Scene);
    app.update();

    assert_eq!(view_mode(&app), ViewMode::Details);
    let selected = app.world().resource::<CurrentSelection>().entry().unwrap();
    assert_eq!(selected.id(), "voyager1");

    let header = DetailHeader::of(&selected);
    assert!(header.title.contains("旅行者1号"));
    assert!(header.subtitle.contains("interstellar"));
    assert!(header.badge.contains("active"));

    assert!(matches!(
        missions_view(&selected, &catalog),
        MissionsView::FlightProfile { .. }
    ));
}

#[test]
fn test_go_home_clears_selection() {
    let mut app = shell_app();
    app.update();
    let catalog = Catalog::default();
    let mars = CatalogEntry::Body(catalog.body("mars").unwrap());

    select(&mut app, mars, SelectionSource::Scene);
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Details);

    command(&mut app, ShellCommand::GoHome);
    app.update();

    assert_eq!(view_mode(&app), ViewMode::Scene);
    assert!(app.world().resource::<CurrentSelection>().entry().is_none());
}

#[test]
fn test_show_details_requires_selection() {
    let mut app = shell_app();
    app.update();

    command(&mut app, ShellCommand::ShowDetails);
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Scene);

    let catalog = Catalog::default();
    let earth = CatalogEntry::Body(catalog.body("earth").unwrap());
    select(&mut app, earth, SelectionSource::List);
    command(&mut app, ShellCommand::ShowDetails);
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Details);
}

#[test]
fn test_activity_toggle() {
    let mut app = shell_app();
    app.update();
    assert_eq!(*app.world().resource::<ActivityType>(), ActivityType::SolarSystem);

    command(&mut app, ShellCommand::SetActivity(ActivityType::Probes));
    assert_eq!(*app.world().resource::<ActivityType>(), ActivityType::Probes);
}

#[test]
fn test_nested_probes_skip_unknown_ids() {
    let catalog = Catalog::default();
    let tree = catalog.body_tree();

    let (_, mars_probes) = tree.iter().find(|(b, _)| b.id == "mars").unwrap();
    let ids: Vec<_> = mars_probes.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["perseverance", "tianwen1"]);

    // Every listed id on venus is unknown: the missions tab shows the empty text.
    let venus = CatalogEntry::Body(catalog.body("venus").unwrap());
    assert_eq!(
        missions_view(&venus, &catalog),
        MissionsView::Empty(NO_MISSIONS_TEXT)
    );
    assert_eq!(NO_MISSIONS_TEXT, "暂无记录的探测任务");
}

#[test]
fn test_empty_state_prompt() {
    let app = {
        let mut app = shell_app();
        app.update();
        app
    };
    assert!(app.world().resource::<CurrentSelection>().entry().is_none());
    assert_eq!(EMPTY_SELECTION_TEXT, "请从左侧选择一个行星或探测器以查看详细信息");
}

fn tab(app: &bevy::app::App) -> DetailTab {
    *app.world().resource::<DetailTab>()
}

fn set_tab(app: &mut bevy::app::App, value: DetailTab) {
    *app.world_mut().resource_mut::<DetailTab>() = value;
}

#[test]
fn test_list_selection_in_details_keeps_tab() {
    let mut app = shell_app();
    app.add_plugins(DetailTabPlugin);
    app.update();
    let catalog = Catalog::default();

    select(
        &mut app,
        CatalogEntry::Body(catalog.body("earth").unwrap()),
        SelectionSource::Scene,
    );
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Details);
    set_tab(&mut app, DetailTab::Insights);

    select(
        &mut app,
        CatalogEntry::Body(catalog.body("mars").unwrap()),
        SelectionSource::List,
    );
    app.update();

    assert_eq!(view_mode(&app), ViewMode::Details);
    assert_eq!(
        app.world().resource::<CurrentSelection>().entry().map(|e| e.id()),
        Some("mars")
    );
    assert_eq!(tab(&app), DetailTab::Insights);
}

#[test]
fn test_entering_details_starts_at_overview() {
    let mut app = shell_app();
    app.add_plugins(DetailTabPlugin);
    app.update();
    let catalog = Catalog::default();
    let jupiter = CatalogEntry::Body(catalog.body("jupiter").unwrap());

    select(&mut app, jupiter, SelectionSource::Scene);
    app.update();
    set_tab(&mut app, DetailTab::Missions);

    command(&mut app, ShellCommand::GoHome);
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Scene);

    select(&mut app, jupiter, SelectionSource::Scene);
    app.update();
    assert_eq!(view_mode(&app), ViewMode::Details);
    assert_eq!(tab(&app), DetailTab::Overview);
}
