use eyre::WrapErr;
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

pub(crate) fn parse_svg(data: &[u8]) -> eyre::Result<usvg::Tree> {
    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();
    usvg::Tree::from_data(data, &opt).wrap_err("parsing SVG")
}

/// Renders `tree` scaled to fit a `width`×`height` pixmap, preserving its
/// aspect ratio and centering it. Uncovered areas are filled with
/// `background`.
pub(crate) fn render_fit(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
    background: tiny_skia::Color,
) -> eyre::Result<tiny_skia::Pixmap> {
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| eyre::eyre!("failed to allocate pixmap {width}x{height}"))?;
    pixmap.fill(background);

    let size = tree.size();
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    let dx = (width as f32 - size.width() * scale) / 2.0;
    let dy = (height as f32 - size.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy);
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

pub(crate) fn encode_png(pixmap: &tiny_skia::Pixmap) -> eyre::Result<Vec<u8>> {
    pixmap.encode_png().wrap_err("encoding PNG")
}
