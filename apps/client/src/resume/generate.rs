//! Resume generation through the backend.

use tracing::info;

use crate::api_client::GENERATE_RESUME_PATH;
use crate::errors::AppError;
use crate::guard::Operation;
use crate::models::resume::{GenerateResumeRequest, ResumeDocument};
use crate::state::AppState;

pub const EMPTY_JOB_DESCRIPTION: &str = "Please enter a job description.";

/// Asks the backend for a resume tailored to `job_description`.
///
/// Blank input is rejected before any request. The text is otherwise sent
/// as typed, with the signed-in user's id when there is one.
pub async fn generate_resume(
    state: &AppState,
    job_description: &str,
) -> Result<ResumeDocument, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_JOB_DESCRIPTION.to_string()));
    }
    let _token = state.flights.begin(Operation::GenerateResume)?;

    let request = GenerateResumeRequest {
        user_id: state.session.current().map(|u| u.user_id),
        job_description: job_description.to_string(),
    };

    let resume: ResumeDocument = state
        .api
        .post(GENERATE_RESUME_PATH, &request)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    info!(
        "Generated resume for {} ({} experience entries)",
        resume.user_id,
        resume.experience.len()
    );
    Ok(resume)
}
