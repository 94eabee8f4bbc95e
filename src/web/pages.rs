// ============================================================
// Layer 1 — Page Rendering
// ============================================================
// Renders the one page this service has: the input form,
// optionally annotated with a prediction label or a failure
// message, always pre-filled with whatever the user submitted.
//
// The page is assembled with format! rather than a template
// engine — there is a single template and no control flow
// beyond "which banner, which values". Every submitted value
// is HTML-escaped before it is placed into an attribute or
// the page body.

use crate::domain::submission::RawSubmission;

/// What to show above the form.
#[derive(Debug, Clone, Copy)]
pub enum Banner<'a> {
    /// First visit — no banner
    None,
    /// A successful prediction label ("Stay" / "Left")
    Prediction(&'a str),
    /// A validation or inference failure message
    Error(&'a str),
}

/// Minimal HTML escaping for text nodes and double-quoted
/// attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// A <select> with the submitted value (if any) pre-selected.
/// When the submitted value is outside the option list — which
/// happens exactly on the validation-failure redisplay — no
/// option is selected and the raw value is still visible in
/// the error banner above.
fn select(name: &str, label: &str, options: &[&str], current: &str) -> String {
    let mut html = format!(
        "<label for=\"{name}\">{label}</label>\n\
         <select id=\"{name}\" name=\"{name}\">\n"
    );
    for opt in options {
        let selected = if *opt == current { " selected" } else { "" };
        html.push_str(&format!(
            "  <option value=\"{opt}\"{selected}>{opt}</option>\n"
        ));
    }
    html.push_str("</select>\n");
    html
}

fn number_input(name: &str, label: &str, current: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"text\" \
         inputmode=\"decimal\" value=\"{}\">\n",
        escape(current),
    )
}

/// Render the full page. `raw` carries the values to pre-fill;
/// pass a default submission for the empty form.
pub fn render(raw: &RawSubmission, banner: Banner<'_>) -> String {
    let banner_html = match banner {
        Banner::None => String::new(),
        Banner::Prediction(label) => format!(
            "<p class=\"result\">Prediction: <strong>{}</strong></p>\n",
            escape(label),
        ),
        Banner::Error(message) => format!(
            "<p class=\"error\">{}</p>\n",
            escape(message),
        ),
    };

    let yes_no = ["No", "Yes"];
    let marital = ["Div.", "Marr.", "NTBD", "Sep.", "Single"];

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Employee Attrition Predictor</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n\
         <h1>Employee Attrition Predictor</h1>\n\
         {banner}\
         <form method=\"post\" action=\"/predict\">\n\
         {job_role_match}\
         {experience}\
         {marital_status}\
         {emp_group_b1}\
         {location_gurgaon}\
         {function_operation}\
         {age}\
         <button type=\"submit\">Predict</button>\n\
         </form>\n\
         </body>\n\
         </html>\n",
        banner = banner_html,
        job_role_match =
            select("job_role_match", "Job Role Match", &yes_no, &raw.job_role_match),
        experience =
            number_input("experience", "Experience (YY.MM)", &raw.experience),
        marital_status =
            select("marital_status", "Marital Status", &marital, &raw.marital_status),
        emp_group_b1 =
            select("emp_group_b1", "Emp. Group B1", &yes_no, &raw.emp_group_b1),
        location_gurgaon =
            select("location_gurgaon", "Location Gurgaon", &yes_no, &raw.location_gurgaon),
        function_operation =
            select("function_operation", "Function Operation", &yes_no, &raw.function_operation),
        age = number_input("age", "Age in YY.", &raw.age),
    )
}
