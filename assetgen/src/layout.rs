//! Fixed site layout. All paths are relative to the [`Site`](crate::Site) root.

pub const LOGO_SVG: &str = "public/logo.svg";
pub const FAVICON: &str = "public/favicon.ico";
pub const SOCIAL_PREVIEW: &str = "public/og-image.png";
pub const INDEX_HTML: &str = "index.html";

pub const FAVICON_SIZE: u32 = 32;
pub const PREVIEW_WIDTH: u32 = 1200;
pub const PREVIEW_HEIGHT: u32 = 630;

/// Present in the HTML once favicon links have been added.
pub const FAVICON_MARKER: &str = r#"rel="icon""#;

pub const FAVICON_LINKS: [&str; 4] = [
    r#"<link rel="icon" type="image/x-icon" href="/favicon.ico" />"#,
    r#"<link rel="icon" type="image/svg+xml" href="/logo.svg" />"#,
    r#"<link rel="apple-touch-icon" href="/logo.svg" />"#,
    r#"<meta property="og:image" content="/og-image.png" />"#,
];
