use serde::{Deserialize, Serialize};

/// A generated resume as returned by `POST /resumes/generate`.
///
/// Required blocks must be present on the wire; the optional lists
/// (`projects`, `languages`, `interests`) may be missing or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub fname: String,
    pub lname: String,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub portfolio: bool,
    pub contact: Contact,
    pub profile: Profile,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    pub skills: Skills,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub id: Option<String>,
    pub degree: String,
    pub major: String,
    pub university: String,
    pub location: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub relevant_courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub id: Option<String>,
    pub technical: Vec<String>,
    pub tools: Vec<String>,
    pub others: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.tools.is_empty() && self.others.is_empty()
    }
}

/// Body of `POST /resumes/generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub job_description: String,
}
