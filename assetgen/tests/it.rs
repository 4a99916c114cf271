use assetgen::{layout::*, site_pipeline, steps::*, Action, Pipeline, Site, Step};
use resvg::tiny_skia::Pixmap;
use std::path::Path;

const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
  <circle cx="32" cy="32" r="30" fill="#667eea"/>
</svg>"##;

const PAGE: &str = "<!doctype html>\n<html>\n  <head>\n    <title>Site</title>\n  </head>\n  <body></body>\n</html>\n";

fn site_with(tmp: &Path, logo: Option<&str>, html: Option<&str>) -> Site {
    std::fs::create_dir_all(tmp.join("public")).unwrap();
    if let Some(logo) = logo {
        std::fs::write(tmp.join(LOGO_SVG), logo).unwrap();
    }
    if let Some(html) = html {
        std::fs::write(tmp.join(INDEX_HTML), html).unwrap();
    }
    Site::from(tmp)
}

fn decode(path: impl AsRef<Path>) -> Pixmap {
    let data = std::fs::read(path).unwrap();
    assert!(!data.is_empty());
    Pixmap::decode_png(&data).unwrap()
}

#[test]
fn should_render_square_favicon() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = site_with(tmp.path(), Some(LOGO), None);

    let action = favicon(LOGO_SVG, FAVICON).run(&site).unwrap();

    assert_eq!(action, Action::Ok);
    let pixmap = decode(tmp.path().join(FAVICON));
    assert_eq!((pixmap.width(), pixmap.height()), (FAVICON_SIZE, FAVICON_SIZE));
    let corner = pixmap.pixel(0, 0).unwrap();
    assert_eq!((corner.red(), corner.green(), corner.blue(), corner.alpha()), (255, 255, 255, 255));
}

#[test]
fn should_warn_when_letterboxing_favicon() {
    let tmp = tempfile::TempDir::new().unwrap();
    let wide = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#000"/></svg>"##;
    let site = site_with(tmp.path(), Some(wide), None);

    let action = favicon(LOGO_SVG, FAVICON).run(&site).unwrap();

    assert!(matches!(action, Action::Warn(_)));
    let pixmap = decode(tmp.path().join(FAVICON));
    assert_eq!((pixmap.width(), pixmap.height()), (32, 32));
    assert_eq!(pixmap.pixel(16, 0).unwrap().red(), 255);
    assert_eq!(pixmap.pixel(16, 16).unwrap().red(), 0);
}

#[test]
fn should_fail_favicon_on_missing_or_corrupt_logo() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = site_with(tmp.path(), None, None);
    assert!(favicon(LOGO_SVG, FAVICON).run(&site).is_err());

    std::fs::write(tmp.path().join(LOGO_SVG), "<svg").unwrap();
    assert!(favicon(LOGO_SVG, FAVICON).run(&site).is_err());
    assert!(!tmp.path().join(FAVICON).exists());
}

#[test]
fn should_render_social_preview() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = Site::from(tmp.path());

    social_preview(SOCIAL_PREVIEW).run(&site).unwrap();

    let pixmap = decode(tmp.path().join(SOCIAL_PREVIEW));
    assert_eq!((pixmap.width(), pixmap.height()), (PREVIEW_WIDTH, PREVIEW_HEIGHT));
}

#[test]
fn should_patch_html_once() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = site_with(tmp.path(), None, Some(PAGE));
    let step = html_patch(INDEX_HTML);

    assert_eq!(step.run(&site).unwrap(), Action::Ok);
    let first = std::fs::read(tmp.path().join(INDEX_HTML)).unwrap();
    let text = String::from_utf8(first.clone()).unwrap();
    assert_eq!(text.lines().count(), PAGE.lines().count() + 4);
    assert!(text.contains(&format!("<title>Site</title>\n    {}\n", FAVICON_LINKS[0])));
    assert_eq!(text.replace(&format!("\n    {}", FAVICON_LINKS.join("\n    ")), ""), PAGE);

    assert!(matches!(step.run(&site).unwrap(), Action::Skipped(_)));
    let second = std::fs::read(tmp.path().join(INDEX_HTML)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn should_leave_html_with_favicon_untouched() {
    let tmp = tempfile::TempDir::new().unwrap();
    let html = "<head><title>x</title><link rel=\"icon\" href=\"/old.ico\"></head>";
    let site = site_with(tmp.path(), None, Some(html));

    let action = html_patch(INDEX_HTML).run(&site).unwrap();

    assert!(matches!(action, Action::Skipped(_)));
    assert_eq!(std::fs::read_to_string(tmp.path().join(INDEX_HTML)).unwrap(), html);
}

#[test]
fn should_fail_html_patch_without_title() {
    let tmp = tempfile::TempDir::new().unwrap();
    let html = "<html><head></head></html>";
    let site = site_with(tmp.path(), None, Some(html));

    assert!(html_patch(INDEX_HTML).run(&site).is_err());
    assert_eq!(std::fs::read_to_string(tmp.path().join(INDEX_HTML)).unwrap(), html);
}

#[test]
fn should_run_all_steps() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = site_with(tmp.path(), Some(LOGO), Some(PAGE));

    site_pipeline().run(&site).unwrap();

    assert_eq!(decode(tmp.path().join(FAVICON)).width(), FAVICON_SIZE);
    assert_eq!(decode(tmp.path().join(SOCIAL_PREVIEW)).width(), PREVIEW_WIDTH);
    let html = std::fs::read_to_string(tmp.path().join(INDEX_HTML)).unwrap();
    assert!(html.contains(FAVICON_MARKER));
}

#[test]
fn should_patch_html_even_if_favicon_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = site_with(tmp.path(), None, Some(PAGE));

    let err = site_pipeline().run(&site).unwrap_err();

    assert_eq!(err.total, 3);
    assert_eq!(err.errors.0.len(), 1);
    assert_eq!(err.errors.0[0].index, 0);
    assert!(!tmp.path().join(FAVICON).exists());
    assert!(tmp.path().join(SOCIAL_PREVIEW).exists());
    let html = std::fs::read_to_string(tmp.path().join(INDEX_HTML)).unwrap();
    assert_eq!(html.lines().count(), PAGE.lines().count() + 4);
}

#[test]
fn should_create_missing_output_directories() {
    let tmp = tempfile::TempDir::new().unwrap();
    let site = Site::from(tmp.path());

    let pipeline = Pipeline::new().add_step(social_preview("dist/nested/card.png"));
    pipeline.run(&site).unwrap();

    assert!(tmp.path().join("dist/nested/card.png").exists());
}
