pub mod dates;
pub mod export;
pub mod generate;
pub mod html;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use export::export_html;
pub use generate::generate_resume;
pub use html::{render_document, render_html};
pub use view::{build_view, ResumeView};
