//! Render use cases: text and Markdown from in-memory reports.

use orgguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    orgguard_render::render_markdown(report)
}

pub fn render_text(report: &RenderableReport) -> String {
    orgguard_render::render_text(report)
}
