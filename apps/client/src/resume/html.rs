use askama::Template;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::resume::view::{build_view, ResumeView, ViewSection};

/// Printable resume page. All interpolated text is HTML-escaped by the
/// template engine.
#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeHtml<'a> {
    heading: &'a str,
    sections: &'a [ViewSection],
}

/// Renders a self-contained HTML document from the view tree.
pub fn render_html(view: &ResumeView) -> Result<String, AppError> {
    let page = ResumeHtml {
        heading: &view.heading,
        sections: &view.sections,
    };
    Ok(page.render()?)
}

pub fn render_document(doc: &ResumeDocument) -> Result<String, AppError> {
    render_html(&build_view(doc))
}
