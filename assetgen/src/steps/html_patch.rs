use super::output::write_atomic;
use crate::{
    layout::{FAVICON_LINKS, FAVICON_MARKER},
    Action, Site,
};
use eyre::WrapErr;
use regex::Regex;
use std::{path::PathBuf, sync::OnceLock};

fn title_element() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title\s*>").unwrap())
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Patch {
    AlreadyPresent,
    NoTitle,
    Patched(String),
}

/// Inserts the favicon link block after the first `<title>` element unless
/// `html` already references a favicon.
pub fn patch(html: &str) -> Patch {
    if html.contains(FAVICON_MARKER) {
        return Patch::AlreadyPresent;
    }
    let Some(title) = title_element().find(html) else {
        return Patch::NoTitle;
    };

    let mut patched = String::with_capacity(html.len() + 256);
    patched.push_str(&html[..title.end()]);
    for link in FAVICON_LINKS {
        patched.push_str("\n    ");
        patched.push_str(link);
    }
    patched.push_str(&html[title.end()..]);
    Patch::Patched(patched)
}

/// Adds favicon and preview links to an HTML page in place.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HtmlPatch {
    path: PathBuf,
}

impl crate::Step for HtmlPatch {
    fn description(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "add favicon links to {}", self.path.display())
    }

    fn details(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "add favicon links to {}:", self.path.display())?;
        for link in FAVICON_LINKS {
            write!(f, "\n  {}", link)?;
        }
        Ok(())
    }

    fn run(&self, site: &Site) -> eyre::Result<Action> {
        let path = site.full_path(&self.path);
        let html = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        match patch(&html) {
            Patch::AlreadyPresent => {
                Ok(Action::Skipped("favicon links already present".to_owned()))
            }
            Patch::NoTitle => Err(eyre::eyre!(
                "no <title> element in {}, nothing inserted",
                path.display()
            )),
            Patch::Patched(patched) => {
                write_atomic(&path, patched.as_bytes())?;
                tracing::info!(path = %path.display(), links = FAVICON_LINKS.len(), "patched HTML");
                Ok(Action::Ok)
            }
        }
    }
}

pub fn html_patch(path: impl Into<PathBuf>) -> HtmlPatch {
    HtmlPatch { path: path.into() }
}
