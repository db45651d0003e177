//! Fonts and Phosphor icon definitions for the UI.
//!
//! Catalog text is Chinese, which egui's bundled fonts do not cover, so a
//! CJK font is loaded from the configured path or a common system location.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::ExplorerConfig;

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Locations tried when no CJK font is configured.
const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

/// Pick the CJK font to load: the configured path if it exists, else the
/// first system candidate that does.
pub fn find_cjk_font(configured: Option<&Path>, exists: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    configured
        .filter(|path| exists(*path))
        .map(Path::to_path_buf)
        .or_else(|| {
            SYSTEM_CJK_FONTS
                .iter()
                .map(Path::new)
                .find(|path| exists(*path))
                .map(Path::to_path_buf)
        })
}

/// Install Phosphor icons and, when available, a CJK fallback font.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(
    mut contexts: EguiContexts,
    config: Res<ExplorerConfig>,
    mut initialized: ResMut<FontsInitialized>,
) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    match find_cjk_font(config.cjk_font_path.as_deref(), Path::exists) {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => {
                fonts
                    .font_data
                    .insert("cjk".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    fonts.families.entry(family).or_default().push("cjk".to_owned());
                }
                info!("Loaded CJK font from {}", path.display());
            }
            Err(err) => warn!("Failed to read CJK font {}: {}", path.display(), err),
        },
        None => warn!("No CJK font found; Chinese text will not render"),
    }

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("UI fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Logo / home
pub const LOGO: &str = egui_phosphor::regular::PLANET;
/// Solar system activity
pub const SOLAR_SYSTEM: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
/// Probe fleet activity
pub const PROBES: &str = egui_phosphor::regular::ROCKET_LAUNCH;
/// Nested probe bullet
pub const PROBE: &str = egui_phosphor::regular::ROCKET;
/// Scene view
pub const SCENE: &str = egui_phosphor::regular::CUBE;
/// Detail view
pub const DETAILS: &str = egui_phosphor::regular::LIST_BULLETS;
/// Empty-state info
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Control guide
pub const MOUSE: &str = egui_phosphor::regular::MOUSE;
/// AI insights
pub const SPARKLE: &str = egui_phosphor::regular::SPARKLE;
/// Trajectory placeholder
pub const ORBIT: &str = egui_phosphor::regular::PATH;
/// User badge
pub const USER: &str = egui_phosphor::regular::USER_CIRCLE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_font_wins_when_present() {
        let configured = Path::new("/fonts/mine.ttf");
        let found = find_cjk_font(Some(configured), |_| true);
        assert_eq!(found.as_deref(), Some(configured));
    }

    #[test]
    fn test_missing_configured_font_falls_back_to_system() {
        let system = Path::new(SYSTEM_CJK_FONTS[1]);
        let found = find_cjk_font(Some(Path::new("/fonts/missing.ttf")), |p| p == system);
        assert_eq!(found.as_deref(), Some(system));
    }

    #[test]
    fn test_no_font_anywhere() {
        assert!(find_cjk_font(None, |_| false).is_none());
    }
}
