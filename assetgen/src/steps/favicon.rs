use super::{output::write_atomic, render};
use crate::{layout::FAVICON_SIZE, Action, Site};
use eyre::WrapErr;
use resvg::tiny_skia::Color;
use std::path::PathBuf;

/// Fills the area the logo does not cover.
pub const BACKGROUND: Color = Color::WHITE;

/// Renders the site logo into a small square favicon.
///
/// The output keeps the `.ico` name browsers look for but holds PNG data, which
/// every current browser accepts.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Favicon {
    logo: PathBuf,
    output: PathBuf,
}

impl crate::Step for Favicon {
    fn description(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "render favicon {}", self.output.display())
    }

    fn details(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "render favicon {} from {} ({}x{})",
            self.output.display(),
            self.logo.display(),
            FAVICON_SIZE,
            FAVICON_SIZE
        )
    }

    fn run(&self, site: &Site) -> eyre::Result<Action> {
        let logo = site.full_path(&self.logo);
        let data = std::fs::read(&logo)
            .wrap_err_with(|| format!("failed to read logo {}", logo.display()))?;
        let tree = render::parse_svg(&data)
            .wrap_err_with(|| format!("failed to load logo {}", logo.display()))?;

        let pixmap = render::render_fit(&tree, FAVICON_SIZE, FAVICON_SIZE, BACKGROUND)?;
        write_atomic(&site.full_path(&self.output), &render::encode_png(&pixmap)?)?;

        let size = tree.size();
        if (size.width() - size.height()).abs() > f32::EPSILON {
            Ok(Action::Warn(format!(
                "logo is {}x{}, letterboxed",
                size.width(),
                size.height()
            )))
        } else {
            Ok(Action::Ok)
        }
    }
}

pub fn favicon(logo: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Favicon {
    Favicon {
        logo: logo.into(),
        output: output.into(),
    }
}
