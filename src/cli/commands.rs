// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `serve` and `predict`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u16, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::domain::submission::RawSubmission;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the prediction web server
    Serve(ServeArgs),

    /// Predict one record from the command line
    Predict(PredictArgs),
}

/// All arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the serialized model artifact
    #[arg(long, default_value = "model/attrition_model.json")]
    pub model_path: String,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static (stylesheet)
    #[arg(long, default_value = "static")]
    pub static_dir: String,
}

/// All arguments for the `predict` command.
///
/// Every field is taken as a raw string — including the
/// numeric ones — so the command exercises the same boundary
/// validation the web form goes through.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Path to the serialized model artifact
    #[arg(long, default_value = "model/attrition_model.json")]
    pub model_path: String,

    /// "Yes" or "No"
    #[arg(long)]
    pub job_role_match: String,

    /// Years.months as a decimal, e.g. 2.5
    #[arg(long)]
    pub experience: String,

    /// One of: Div., Marr., NTBD, Sep., Single
    #[arg(long)]
    pub marital_status: String,

    /// "Yes" or "No"
    #[arg(long)]
    pub emp_group_b1: String,

    /// "Yes" or "No"
    #[arg(long)]
    pub location_gurgaon: String,

    /// "Yes" or "No"
    #[arg(long)]
    pub function_operation: String,

    /// Age in years
    #[arg(long)]
    pub age: String,
}

/// Convert CLI args into the domain submission type.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PredictArgs> for RawSubmission {
    fn from(a: PredictArgs) -> Self {
        RawSubmission {
            job_role_match:     a.job_role_match,
            experience:         a.experience,
            marital_status:     a.marital_status,
            emp_group_b1:       a.emp_group_b1,
            location_gurgaon:   a.location_gurgaon,
            function_operation: a.function_operation,
            age:                a.age,
        }
    }
}
