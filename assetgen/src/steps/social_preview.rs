use super::{output::write_atomic, render};
use crate::{
    layout::{PREVIEW_HEIGHT, PREVIEW_WIDTH},
    Action, Site,
};
use resvg::tiny_skia::Color;
use std::path::PathBuf;

const TITLE: &str = "My Website";
const TAGLINE: &str = "Built with care, shipped fast";
const BADGE: &str = "Open Source";
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// The preview card as an SVG document.
pub fn document() -> String {
    let (w, h) = (PREVIEW_WIDTH, PREVIEW_HEIGHT);
    let cx = w / 2;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#667eea"/>
      <stop offset="100%" stop-color="#764ba2"/>
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg)"/>
  <circle cx="1050" cy="120" r="220" fill="#ffffff" opacity="0.1"/>
  <circle cx="150" cy="560" r="180" fill="#ffffff" opacity="0.1"/>
  <text x="{cx}" y="280" font-family="{FONT_FAMILY}" font-size="72" font-weight="bold" fill="#ffffff" text-anchor="middle">{TITLE}</text>
  <text x="{cx}" y="350" font-family="{FONT_FAMILY}" font-size="32" fill="#ffffff" opacity="0.9" text-anchor="middle">{TAGLINE}</text>
  <rect x="{badge_x}" y="420" width="320" height="60" rx="30" fill="#ffffff" opacity="0.2"/>
  <text x="{cx}" y="458" font-family="{FONT_FAMILY}" font-size="24" font-weight="bold" fill="#ffffff" text-anchor="middle">{BADGE}</text>
</svg>
"##,
        badge_x = cx - 160,
    )
}

/// Renders the fixed preview card used by link-sharing sites.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SocialPreview {
    output: PathBuf,
}

impl crate::Step for SocialPreview {
    fn description(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "render social preview {}", self.output.display())
    }

    fn details(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "render social preview {} ({}x{})",
            self.output.display(),
            PREVIEW_WIDTH,
            PREVIEW_HEIGHT
        )
    }

    fn run(&self, site: &Site) -> eyre::Result<Action> {
        let tree = render::parse_svg(document().as_bytes())?;
        let pixmap =
            render::render_fit(&tree, PREVIEW_WIDTH, PREVIEW_HEIGHT, Color::TRANSPARENT)?;
        write_atomic(&site.full_path(&self.output), &render::encode_png(&pixmap)?)?;
        Ok(Action::Ok)
    }
}

pub fn social_preview(output: impl Into<PathBuf>) -> SocialPreview {
    SocialPreview {
        output: output.into(),
    }
}
