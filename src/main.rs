use assetgen::{layout::*, site_pipeline, Site};
use owo_colors::OwoColorize;

mod cli;

fn setup_logger() -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()?;
    Ok(())
}

fn print_summary() {
    println!();
    println!("{}", "Generated assets:".bold());
    println!(
        "  - {} ({}x{} PNG data, .ico name)",
        FAVICON, FAVICON_SIZE, FAVICON_SIZE
    );
    println!(
        "  - {} ({}x{})",
        SOCIAL_PREVIEW, PREVIEW_WIDTH, PREVIEW_HEIGHT
    );
    println!("  - {} (favicon and preview links)", INDEX_HTML);
    println!();
    println!("{}", "Next steps:".bold());
    println!("  - open the site and check the icon in the browser tab");
    println!("  - check the preview card with a link-sharing card validator");
    println!("  - add og:title and og:description meta tags for richer previews");
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let _cli: cli::Cli = clap::Parser::parse();
    setup_logger()?;

    let site = Site::current_dir()?;
    let pipeline = site_pipeline();

    println!("{} {}", "Generating site assets in".bold(), site);
    print!("{}", pipeline.plan());
    println!();

    if let Err(err) = pipeline.run(&site) {
        tracing::warn!("{}", err);
        for error in &err.errors.0 {
            tracing::debug!("{}: {:?}", error, error.error);
        }
    }

    print_summary();
    Ok(())
}
