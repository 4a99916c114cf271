use owo_colors::OwoColorize;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

pub mod layout;
pub mod steps;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    Ok,
    Skipped(String),
    Warn(String),
}

pub trait Step {
    fn description(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result;

    fn details(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.description(f)
    }

    fn run(&self, site: &Site) -> eyre::Result<Action>;
}

struct Description<'a>(&'a dyn Step);

impl<'a> Display for Description<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.description(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("in [step #{}] {description}", index + 1)]
pub struct StepError {
    pub description: String,
    pub index: usize,
    #[source]
    pub error: eyre::Report,
}

#[derive(Debug, thiserror::Error)]
pub struct StepErrors(pub Vec<StepError>);

impl Display for StepErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.0 {
            writeln!(f, "{}: {}", error, error.error)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} of {total} steps failed for site '{site}'", .errors.0.len())]
pub struct RunError {
    pub site: Site,
    pub total: usize,
    #[source]
    pub errors: StepErrors,
}

/// Root directory that all relative asset paths are resolved against.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Site(PathBuf);

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&Path> for Site {
    fn from(path: &Path) -> Self {
        Site(path.to_owned())
    }
}

impl From<PathBuf> for Site {
    fn from(path: PathBuf) -> Self {
        Site(path)
    }
}

impl Site {
    pub fn current_dir() -> eyre::Result<Self> {
        Ok(Site(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.0
    }

    pub fn full_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.0.join(path)
    }
}

#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline::default()
    }

    pub fn add_step<T: Step + 'static>(mut self, step: T) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn plan(&self) -> DisplayAsPlan {
        DisplayAsPlan(self)
    }

    /// Runs every step in order. A failing step is reported and collected, the
    /// remaining steps still run.
    pub fn run(&self, site: &Site) -> Result<(), RunError> {
        let mut errors = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            let description = Description(&**step);
            let _span = tracing::debug_span!("step", index = index + 1).entered();
            if let Err(error) = self.show_step_result(&description, step.run(site)) {
                errors.push(StepError {
                    description: description.to_string(),
                    index,
                    error,
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RunError {
                site: site.clone(),
                total: self.steps.len(),
                errors: StepErrors(errors),
            })
        }
    }

    fn show_step_result<T: Display>(
        &self,
        description: T,
        result: eyre::Result<Action>,
    ) -> eyre::Result<()> {
        match &result {
            Ok(Action::Ok) => println!("[{}] {}", " ok ".green(), description),
            Ok(Action::Skipped(reason)) => {
                println!("[{}] {}: {}", "skip".cyan(), description, reason)
            }
            Ok(Action::Warn(reason)) => {
                println!("[{}] {}: {}", "warn".yellow(), description, reason)
            }
            Err(error) => {
                println!("[{}] {}: {:#}", "fail".red(), description, error)
            }
        }
        result.map(|_| ())
    }
}

pub struct DisplayAsPlan<'a>(&'a Pipeline);

impl<'a> Display for DisplayAsPlan<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, step) in self.0.steps.iter().enumerate() {
            write!(f, "[{}] ", format!("step #{}", index + 1).blue())?;
            step.details(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The fixed favicon, social preview and HTML patch sequence.
pub fn site_pipeline() -> Pipeline {
    use layout::*;

    Pipeline::new()
        .add_step(steps::favicon(LOGO_SVG, FAVICON))
        .add_step(steps::social_preview(SOCIAL_PREVIEW))
        .add_step(steps::html_patch(INDEX_HTML))
}
