//! Command-line surface: one subcommand per screen.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::auth::{self, flow::LOGIN_SUCCESS, models::RegisterRequest};
use crate::errors::{Alert, AppError};
use crate::jobs::{self, geo::GeoPosition, FixedLocation, Placemark};
use crate::models::resume::ResumeDocument;
use crate::resume::{self, build_view, export_html, render_html};
use crate::state::AppState;
use crate::tasks::TaskList;

const HOME_BLURB: &str = "Explore our powerful tools to help you build a professional resume \
and find your dream job. Start by generating your resume or searching for job opportunities today!";

#[derive(Debug, Parser)]
#[command(author, version, about = "Resumate command-line client", long_about = None)]
pub struct Args {
    /// Backend base URL, e.g. http://localhost:8088/api/v1
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account
    Register {
        #[arg(long)]
        fname: String,
        #[arg(long)]
        lname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and remember the user
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the signed-in user
    Logout,

    /// Greeting and available actions
    Home,

    /// Generate a resume for a job description
    Generate {
        #[arg(
            long,
            value_name = "TEXT",
            conflicts_with = "jd_file",
            required_unless_present = "jd_file"
        )]
        job_description: Option<String>,

        /// Read the job description from a file
        #[arg(long, value_name = "PATH")]
        jd_file: Option<PathBuf>,

        /// Write the HTML page; without a PATH a fresh file goes to EXPORT_DIR
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Keep the generated resume as JSON for `render`
        #[arg(long, value_name = "PATH")]
        save_json: Option<PathBuf>,
    },

    /// Render a saved resume JSON file
    Render {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,

        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// List job postings, nearest first when a position is given
    Jobs {
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Work through the task checklist
    Tasks {
        /// Add a task (repeatable)
        #[arg(long = "add", value_name = "TITLE")]
        add: Vec<String>,
        /// Toggle a task by id (repeatable)
        #[arg(long = "toggle", value_name = "ID")]
        toggle: Vec<u32>,
    },
}

/// Runs one subcommand. The success alert carries everything to print.
pub async fn run(state: &AppState, command: Command) -> Result<Alert, AppError> {
    match command {
        Command::Register {
            fname,
            lname,
            email,
            password,
        } => {
            let form = RegisterRequest {
                fname,
                lname,
                email,
                password,
            };
            let message = auth::register(state, &form).await?;
            Ok(Alert::success(format!("{message}\n")))
        }

        Command::Login { email, password } => {
            let user = auth::login(state, &email, &password).await?;
            Ok(Alert::success(format!(
                "{LOGIN_SUCCESS}\nHello, {}!\n",
                user.fname
            )))
        }

        Command::Logout => {
            auth::logout(state)?;
            Ok(Alert::success("Signed out.\n"))
        }

        Command::Home => Ok(Alert::success(home_screen(state))),

        Command::Generate {
            job_description,
            jd_file,
            export,
            save_json,
        } => {
            let job_description = match (job_description, jd_file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_input(&path)?,
                (None, None) => String::new(),
            };
            let doc = resume::generate_resume(state, &job_description).await?;
            let mut out = String::new();
            if let Some(path) = save_json {
                let json = serde_json::to_string_pretty(&doc)
                    .map_err(|e| AppError::Internal(e.into()))?;
                std::fs::write(&path, json)?;
                let _ = writeln!(out, "Resume saved to {}", path.display());
            }
            out.push_str(&show_resume(state, &doc, export)?);
            Ok(Alert::success(out))
        }

        Command::Render { input, export } => {
            let raw = read_input(&input)?;
            let doc: ResumeDocument = serde_json::from_str(&raw).map_err(|e| {
                AppError::Validation(format!("{} is not a resume file: {e}", input.display()))
            })?;
            Ok(Alert::success(show_resume(state, &doc, export)?))
        }

        Command::Jobs {
            lat,
            lon,
            city,
            country,
        } => {
            let provider = match (lat, lon) {
                (Some(lat), Some(lon)) => {
                    let placemark = (city.is_some() || country.is_some())
                        .then(|| Placemark { city, country });
                    FixedLocation::new(Some(GeoPosition::new(lat, lon)), placemark)
                }
                _ => FixedLocation::denied(),
            };
            let listing = jobs::search_jobs(&provider, &state.flights).await?;
            Ok(Alert::success(listing.render()))
        }

        Command::Tasks { add, toggle } => {
            let mut list = TaskList::seeded();
            for title in &add {
                list.add(title)?;
            }
            for id in toggle {
                if !list.toggle(id) {
                    return Err(AppError::Validation(format!("No task with id {id}.")));
                }
            }
            Ok(Alert::success(list.render()))
        }
    }
}

fn home_screen(state: &AppState) -> String {
    let greeting = match state.session.current() {
        Some(user) => format!("Hello, {}!", user.fname),
        None => "Welcome!".to_string(),
    };
    let mut out = String::new();
    let _ = writeln!(out, "{greeting}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{HOME_BLURB}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  Generate     client generate --job-description TEXT");
    let _ = writeln!(out, "  Search Job   client jobs --lat LAT --lon LON");
    out
}

/// Prints the view tree and, when asked, writes the HTML page.
fn show_resume(
    state: &AppState,
    doc: &ResumeDocument,
    export: Option<Option<PathBuf>>,
) -> Result<String, AppError> {
    let view = build_view(doc);
    let mut out = view.render_text();
    if let Some(target) = export {
        let html = render_html(&view)?;
        let path = export_html(&html, target.as_deref(), &state.config.export_dir)?;
        info!("Exported {} bytes", html.len());
        let _ = writeln!(out);
        let _ = writeln!(out, "Resume exported to {}", path.display());
    }
    Ok(out)
}

fn read_input(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path)
        .map_err(|e| AppError::Validation(format!("Could not read {}: {e}", path.display())))
}
