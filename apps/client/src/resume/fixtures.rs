use crate::models::resume::{
    Contact, Education, Experience, Profile, Project, ResumeDocument, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A resume with every optional block populated.
pub fn full_resume() -> ResumeDocument {
    ResumeDocument {
        id: Some("r-1".into()),
        user_id: "u-1".into(),
        fname: "Amira".into(),
        lname: "Ben Salah".into(),
        request: Some("Mobile developer, Sousse".into()),
        portfolio: false,
        contact: Contact {
            id: None,
            email: "amira@example.com".into(),
            phone: "+216 20 000 000".into(),
            location: "Sousse, Tunisia".into(),
            linkedin: Some("https://linkedin.com/in/amira".into()),
            github: Some("https://github.com/amira".into()),
        },
        profile: Profile {
            id: None,
            title: "Mobile Developer".into(),
            description: "Builds cross-platform apps for R&D at O'Brien & Co.".into(),
        },
        education: vec![Education {
            id: None,
            degree: "BSc".into(),
            major: "Computer Science".into(),
            university: "University of Sousse".into(),
            location: "Sousse".into(),
            start_date: Some("2018-09-01".into()),
            end_date: Some("2021-06-30".into()),
            relevant_courses: strings(&["Algorithms", "Mobile Development"]),
        }],
        experience: vec![Experience {
            id: None,
            title: "Developer".into(),
            company: "Sousse Tech Solutions".into(),
            location: "Sousse".into(),
            start_date: Some("2021-09-01".into()),
            end_date: Some("2023-01-15".into()),
            description: "Shipped the field-service app.".into(),
            skills: strings(&["React Native", "TypeScript"]),
        }],
        projects: Some(vec![Project {
            id: None,
            title: "Resumate".into(),
            description: "Resume generator client.".into(),
            technologies: strings(&["Rust", "Tokio"]),
        }]),
        skills: Skills {
            id: None,
            technical: strings(&["Rust", "TypeScript"]),
            tools: strings(&["Git", "Docker"]),
            others: strings(&["Scrum"]),
        },
        languages: Some(strings(&["Arabic", "French", "English"])),
        interests: Some(strings(&["Chess"])),
    }
}

/// Same person with empty projects, languages and interests and no links.
pub fn bare_resume() -> ResumeDocument {
    let mut doc = full_resume();
    doc.contact.linkedin = None;
    doc.contact.github = Some(String::new());
    doc.projects = Some(Vec::new());
    doc.languages = Some(Vec::new());
    doc.interests = Some(Vec::new());
    doc
}
