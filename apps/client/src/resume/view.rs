//! Resume view tree — the structured rendering of a `ResumeDocument`.
//!
//! The HTML export is rendered from this same tree, so both artifacts carry
//! the same sections and the same line content.

use std::fmt::Write as _;

use crate::models::resume::ResumeDocument;
use crate::resume::dates::format_date;

const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Contact,
    Profile,
    Education,
    Experience,
    Projects,
    Skills,
    Languages,
    Interests,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Contact => "Contact",
            SectionKind::Profile => "Profile",
            SectionKind::Education => "Education",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Languages => "Languages",
            SectionKind::Interests => "Interests",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SectionKind::Contact => "contact",
            SectionKind::Profile => "profile",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Interests => "interests",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub label: Option<&'static str>,
    pub text: String,
}

impl ViewLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    fn labeled(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            text: text.into(),
        }
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    pub fn label_text(&self) -> &str {
        self.label.unwrap_or_default()
    }

    /// `"Label: text"` or just `"text"`.
    pub fn display(&self) -> String {
        match self.label {
            Some(label) => format!("{label}: {}", self.text),
            None => self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub lines: Vec<ViewLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSection {
    pub kind: SectionKind,
    pub entries: Vec<ViewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeView {
    pub heading: String,
    pub sections: Vec<ViewSection>,
}

impl ResumeView {
    pub fn section(&self, kind: SectionKind) -> Option<&ViewSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading);
        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.kind.title());
            for (i, entry) in section.entries.iter().enumerate() {
                if i > 0 {
                    let _ = writeln!(out);
                }
                for line in &entry.lines {
                    let _ = writeln!(out, "  {}", line.display());
                }
            }
        }
        out
    }
}

fn joined(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("({} – {})", format_date(start), format_date(end))
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Builds the view tree. A section is left out when its list is empty or
/// its optional field is absent.
pub fn build_view(doc: &ResumeDocument) -> ResumeView {
    let mut sections = Vec::new();

    let contact = &doc.contact;
    let mut contact_lines = vec![
        ViewLine::labeled("Name", format!("{} {}", doc.fname, doc.lname)),
        ViewLine::labeled("Email", contact.email.clone()),
        ViewLine::labeled("Phone", contact.phone.clone()),
        ViewLine::labeled("Location", contact.location.clone()),
    ];
    if let Some(linkedin) = non_empty(contact.linkedin.as_ref()) {
        contact_lines.push(ViewLine::labeled("LinkedIn", linkedin));
    }
    if let Some(github) = non_empty(contact.github.as_ref()) {
        contact_lines.push(ViewLine::labeled("GitHub", github));
    }
    sections.push(ViewSection {
        kind: SectionKind::Contact,
        entries: vec![ViewEntry {
            lines: contact_lines,
        }],
    });

    sections.push(ViewSection {
        kind: SectionKind::Profile,
        entries: vec![ViewEntry {
            lines: vec![
                ViewLine::plain(doc.profile.title.clone()),
                ViewLine::plain(doc.profile.description.clone()),
            ],
        }],
    });

    if !doc.education.is_empty() {
        let entries = doc
            .education
            .iter()
            .map(|edu| {
                let mut lines = vec![
                    ViewLine::plain(format!("{} in {}", edu.degree, edu.major)),
                    ViewLine::plain(format!("{}, {}", edu.university, edu.location)),
                    ViewLine::plain(date_range(
                        edu.start_date.as_deref(),
                        edu.end_date.as_deref(),
                    )),
                ];
                if !edu.relevant_courses.is_empty() {
                    lines.push(ViewLine::labeled(
                        "Relevant Courses",
                        joined(&edu.relevant_courses),
                    ));
                }
                ViewEntry { lines }
            })
            .collect();
        sections.push(ViewSection {
            kind: SectionKind::Education,
            entries,
        });
    }

    if !doc.experience.is_empty() {
        let entries = doc
            .experience
            .iter()
            .map(|exp| {
                let mut lines = vec![
                    ViewLine::plain(format!("{} at {}", exp.title, exp.company)),
                    ViewLine::plain(exp.location.clone()),
                    ViewLine::plain(date_range(
                        exp.start_date.as_deref(),
                        exp.end_date.as_deref(),
                    )),
                    ViewLine::plain(exp.description.clone()),
                ];
                if !exp.skills.is_empty() {
                    lines.push(ViewLine::labeled("Skills", joined(&exp.skills)));
                }
                ViewEntry { lines }
            })
            .collect();
        sections.push(ViewSection {
            kind: SectionKind::Experience,
            entries,
        });
    }

    if let Some(projects) = doc.projects.as_ref().filter(|p| !p.is_empty()) {
        let entries = projects
            .iter()
            .map(|project| {
                let mut lines = vec![
                    ViewLine::plain(project.title.clone()),
                    ViewLine::plain(project.description.clone()),
                ];
                if !project.technologies.is_empty() {
                    lines.push(ViewLine::labeled(
                        "Technologies",
                        joined(&project.technologies),
                    ));
                }
                ViewEntry { lines }
            })
            .collect();
        sections.push(ViewSection {
            kind: SectionKind::Projects,
            entries,
        });
    }

    if !doc.skills.is_empty() {
        sections.push(ViewSection {
            kind: SectionKind::Skills,
            entries: vec![ViewEntry {
                lines: vec![
                    ViewLine::labeled("Technical", joined(&doc.skills.technical)),
                    ViewLine::labeled("Tools", joined(&doc.skills.tools)),
                    ViewLine::labeled("Others", joined(&doc.skills.others)),
                ],
            }],
        });
    }

    for (kind, list) in [
        (SectionKind::Languages, &doc.languages),
        (SectionKind::Interests, &doc.interests),
    ] {
        if let Some(items) = list.as_ref().filter(|l| !l.is_empty()) {
            sections.push(ViewSection {
                kind,
                entries: vec![ViewEntry {
                    lines: vec![ViewLine::plain(joined(items))],
                }],
            });
        }
    }

    ResumeView {
        heading: format!("{} {}", doc.fname, doc.lname).trim().to_string(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::fixtures::{bare_resume, full_resume};

    fn lines_of(view: &ResumeView, kind: SectionKind) -> Vec<String> {
        view.section(kind)
            .unwrap()
            .entries
            .iter()
            .flat_map(|e| e.lines.iter().map(ViewLine::display))
            .collect()
    }

    #[test]
    fn test_full_resume_has_every_section_in_order() {
        let view = build_view(&full_resume());
        let kinds: Vec<SectionKind> = view.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Contact,
                SectionKind::Profile,
                SectionKind::Education,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Skills,
                SectionKind::Languages,
                SectionKind::Interests,
            ]
        );
    }

    #[test]
    fn test_empty_optional_lists_omit_sections() {
        let view = build_view(&bare_resume());
        assert!(!view.has_section(SectionKind::Projects));
        assert!(!view.has_section(SectionKind::Languages));
        assert!(!view.has_section(SectionKind::Interests));
        assert!(view.has_section(SectionKind::Contact));
        assert!(view.has_section(SectionKind::Profile));
    }

    #[test]
    fn test_absent_optional_lists_omit_sections() {
        let mut doc = bare_resume();
        doc.projects = None;
        doc.languages = None;
        doc.interests = None;
        let view = build_view(&doc);
        assert!(!view.has_section(SectionKind::Projects));
        assert!(!view.has_section(SectionKind::Languages));
        assert!(!view.has_section(SectionKind::Interests));
    }

    #[test]
    fn test_empty_education_and_experience_omit_sections() {
        let mut doc = full_resume();
        doc.education.clear();
        doc.experience.clear();
        let view = build_view(&doc);
        assert!(!view.has_section(SectionKind::Education));
        assert!(!view.has_section(SectionKind::Experience));
    }

    #[test]
    fn test_contact_lines_skip_missing_links() {
        let view = build_view(&bare_resume());
        let lines = lines_of(&view, SectionKind::Contact);
        assert_eq!(
            lines,
            vec![
                "Name: Amira Ben Salah",
                "Email: amira@example.com",
                "Phone: +216 20 000 000",
                "Location: Sousse, Tunisia",
            ]
        );
    }

    #[test]
    fn test_contact_lines_include_present_links() {
        let lines = lines_of(&build_view(&full_resume()), SectionKind::Contact);
        assert!(lines.contains(&"LinkedIn: https://linkedin.com/in/amira".to_string()));
        assert!(lines.contains(&"GitHub: https://github.com/amira".to_string()));
    }

    #[test]
    fn test_education_entry_lines() {
        let lines = lines_of(&build_view(&full_resume()), SectionKind::Education);
        assert_eq!(
            lines,
            vec![
                "BSc in Computer Science",
                "University of Sousse, Sousse",
                "(Sep 2018 – Jun 2021)",
                "Relevant Courses: Algorithms, Mobile Development",
            ]
        );
    }

    #[test]
    fn test_experience_with_empty_start_date() {
        let mut doc = full_resume();
        doc.experience[0].start_date = Some(String::new());
        doc.experience[0].end_date = Some("2022-03-15".into());
        let lines = lines_of(&build_view(&doc), SectionKind::Experience);
        assert!(lines.contains(&"( – Mar 2022)".to_string()));
    }

    #[test]
    fn test_lists_joined_with_comma_space() {
        let view = build_view(&full_resume());
        assert_eq!(
            lines_of(&view, SectionKind::Skills),
            vec![
                "Technical: Rust, TypeScript",
                "Tools: Git, Docker",
                "Others: Scrum",
            ]
        );
        assert_eq!(
            lines_of(&view, SectionKind::Languages),
            vec!["Arabic, French, English"]
        );
    }

    #[test]
    fn test_skills_section_omitted_when_all_lists_empty() {
        let mut doc = full_resume();
        doc.skills.technical.clear();
        doc.skills.tools.clear();
        doc.skills.others.clear();
        assert!(!build_view(&doc).has_section(SectionKind::Skills));
    }

    #[test]
    fn test_render_text_lists_sections() {
        let text = build_view(&full_resume()).render_text();
        assert!(text.starts_with("Amira Ben Salah\n"));
        assert!(text.contains("\nProjects\n"));
        assert!(text.contains("  Technologies: Rust, Tokio"));
    }
}
