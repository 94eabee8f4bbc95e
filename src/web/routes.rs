// ============================================================
// Layer 1 — Routes and Handlers
// ============================================================
// The handlers stay thin: extract, delegate to the prediction
// service, render. Both outcomes of a submission — label or
// failure message — come back as a 200 with the re-rendered
// form, so a bad field never leaves the user on a framework
// error page.
//
// The shared state is one Arc around the prediction service,
// built once at startup. The model inside is read-only, so
// concurrent requests share it without locking.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::application::predict_use_case::PredictionService;
use crate::domain::submission::RawSubmission;
use crate::web::pages::{self, Banner};

/// Everything a handler needs, injected once at startup.
pub struct AppState {
    pub service: PredictionService,
}

/// Build the full application router.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// GET / — the empty input form
async fn index() -> Html<String> {
    Html(pages::render(&RawSubmission::default(), Banner::None))
}

/// GET /health — liveness probe
async fn health() -> &'static str {
    "ok"
}

/// POST /predict — run the pipeline and re-render the form.
///
/// The raw submission is kept whole through both paths so the
/// form comes back pre-filled with exactly what was typed.
async fn predict(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawSubmission>,
) -> Html<String> {
    match state.service.predict(&raw) {
        Ok(outcome) => Html(pages::render(&raw, Banner::Prediction(outcome.label()))),
        Err(e) => {
            tracing::warn!("Prediction failed: {e}");
            Html(pages::render(&raw, Banner::Error(&e.to_string())))
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Handler tests drive the router directly with tower's
// oneshot — no TCP listener, no model artifact.
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::domain::traits::Classifier;

    /// Always predicts the configured class.
    struct FixedStub(u32);

    impl Classifier for FixedStub {
        fn predict(&self, _features: &[f64; 7]) -> Result<u32> {
            Ok(self.0)
        }
    }

    fn test_router(class: u32) -> Router {
        let state = Arc::new(AppState {
            service: PredictionService::new(Arc::new(FixedStub(class))),
        });
        router(state, Path::new("static"))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    const VALID_FORM: &str = "job_role_match=Yes&experience=2.5&marital_status=Single\
                              &emp_group_b1=No&location_gurgaon=Yes\
                              &function_operation=No&age=28";

    #[tokio::test]
    async fn test_index_renders_the_empty_form() {
        let response = test_router(1)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<form method=\"post\" action=\"/predict\">"));
        assert!(!html.contains("Prediction:"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router(1)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_valid_submission_renders_stay() {
        let response = test_router(1).oneshot(form_request(VALID_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Prediction: <strong>Stay</strong>"));
        assert!(html.contains("value=\"2.5\""));
    }

    #[tokio::test]
    async fn test_class_zero_renders_left() {
        let response = test_router(0).oneshot(form_request(VALID_FORM)).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Prediction: <strong>Left</strong>"));
    }

    #[tokio::test]
    async fn test_invalid_field_renders_message_and_keeps_input() {
        let body = "job_role_match=Yes&experience=2.5&marital_status=Married\
                    &emp_group_b1=No&location_gurgaon=Yes\
                    &function_operation=No&age=28";
        let response = test_router(1).oneshot(form_request(body)).await.unwrap();
        // Still a 200 — the failure degrades to a re-rendered form
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(
            "Marital Status must be one of: Div., Marr., NTBD, Sep., Single"
        ));
        assert!(html.contains("value=\"28\""));
    }

    #[tokio::test]
    async fn test_missing_field_fails_like_any_other_bad_value() {
        // age omitted entirely — serde(default) turns it into ""
        let body = "job_role_match=Yes&experience=2.5&marital_status=Single\
                    &emp_group_b1=No&location_gurgaon=Yes&function_operation=No";
        let response = test_router(1).oneshot(form_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Age in YY. must be a number"));
    }
}
