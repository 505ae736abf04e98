//! Font setup so that CJK names render.
//!
//! egui's bundled fonts cover Latin only. A system font with CJK glyphs is
//! prepended to the proportional family and appended to monospace.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

const CJK_FONT_NAME: &str = "cjk_ui";

/// Platform font files tried in order, Traditional Chinese first.
fn font_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<&str> = Vec::new();

    #[cfg(windows)]
    {
        candidates.extend([
            r"C:\Windows\Fonts\msjh.ttc",
            r"C:\Windows\Fonts\msjhl.ttc",
            r"C:\Windows\Fonts\mingliu.ttc",
            r"C:\Windows\Fonts\msyh.ttc",
            r"C:\Windows\Fonts\YuGothR.ttc",
        ]);
    }

    #[cfg(target_os = "macos")]
    {
        candidates.extend([
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/STHeiti Light.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
        ]);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        candidates.extend([
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        ]);
    }

    candidates.into_iter().map(PathBuf::from).collect()
}

/// Read the first font file that exists, trying `preferred` before the
/// platform candidates.
pub fn load_cjk_font_bytes(preferred: Option<&Path>) -> Option<(PathBuf, Vec<u8>)> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(font_candidates())
        .find_map(|path| std::fs::read(&path).ok().map(|bytes| (path, bytes)))
}

/// Build font definitions with `bytes` registered as the CJK fallback.
pub fn font_definitions_with(bytes: Vec<u8>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();

    fonts.font_data.insert(
        CJK_FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.insert(0, CJK_FONT_NAME.to_string());
    }
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        family.push(CJK_FONT_NAME.to_string());
    }

    fonts
}

/// Install a CJK-capable font into the context, if one can be found.
pub fn configure_fonts(ctx: &egui::Context, preferred: Option<&Path>) {
    match load_cjk_font_bytes(preferred) {
        Some((path, bytes)) => {
            tracing::info!("Using font {:?}", path);
            ctx.set_fonts(font_definitions_with(bytes));
        }
        None => {
            tracing::warn!("No CJK font found, non-Latin names may not render");
        }
    }
}
