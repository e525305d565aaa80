//! Rendering utilities for humans: a plain-text summary and a Markdown report.
//!
//! Both renderers group findings into one section per finding kind and print an explicit
//! line for kinds with no findings, so an empty section is never ambiguous.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod sections;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableMagnitude, RenderableReport, RenderableSeverity,
    RenderableSubject, RenderableVerdictStatus,
};
pub use text::render_text;
