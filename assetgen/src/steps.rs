pub mod favicon;
pub use favicon::favicon;
pub mod html_patch;
pub use html_patch::html_patch;
mod output;
mod render;
pub mod social_preview;
pub use social_preview::social_preview;
