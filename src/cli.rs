/// Generates the site favicon and social preview image and links them from
/// the site's HTML.
///
/// Run from the site root. Reads public/logo.svg and writes
/// public/favicon.ico, public/og-image.png and index.html.
#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {}
