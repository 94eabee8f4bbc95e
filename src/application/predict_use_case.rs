// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// The entire control flow of the system lives here:
//
//   Start → Validating → Encoding → Predicting → Success
//                 └──────────────────────────────→ Failure
//
// Two paths, no intermediate states, no retries, no partial
// success. Failure carries a human-readable message; the
// presentation layer pairs it with the raw input for
// redisplay. Errors are values returned from this function —
// nothing here panics for a bad request.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::encoding::ValidationError;
use crate::domain::features::FeatureVector;
use crate::domain::outcome::Outcome;
use crate::domain::submission::{PredictionRequest, RawSubmission};
use crate::domain::traits::Classifier;

/// Why a prediction request failed. Both variants render to
/// the message shown to the user.
#[derive(Debug, Error)]
pub enum PredictError {
    /// A form field failed validation — the message names the
    /// field and its allowed values
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The model rejected or failed on the encoded vector.
    /// The message is the model error's own text.
    #[error("{0}")]
    Inference(String),
}

/// Holds the one loaded model instance and exposes the single
/// "predict one record" operation.
///
/// Built once at process start and handed (via Arc) into every
/// request-handling context — there is no ambient global
/// state. The classifier is read-only after load, so the Arc
/// is shared across concurrent requests without locking.
pub struct PredictionService {
    model: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self { model }
    }

    /// Run the full pipeline for one submission.
    ///
    /// Validation is all-or-nothing: the first failing field
    /// determines the message and the model is never consulted.
    /// A model error fails this request only — the service
    /// stays usable for the next one.
    pub fn predict(&self, raw: &RawSubmission) -> Result<Outcome, PredictError> {
        // Validating — first failure wins
        let request = PredictionRequest::parse(raw)?;

        // Encoding — infallible once validation has passed
        let features = FeatureVector::from(&request).to_array();

        // Predicting — model errors degrade to a failure message
        let class = self
            .model
            .predict(&features)
            .map_err(|e| PredictError::Inference(e.to_string()))?;

        let outcome = Outcome::from_class(class);
        tracing::info!("Predicted class {} → {}", class, outcome.label());
        Ok(outcome)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// The service is tested against stub classifiers so no model
// artifact is needed. Reference: Rust Book §11 (Testing)
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed class and counts how often it was asked,
    /// recording the vector it last saw.
    struct CountingStub {
        class: u32,
        calls: AtomicUsize,
        seen:  std::sync::Mutex<Option<[f64; 7]>>,
    }

    impl CountingStub {
        fn new(class: u32) -> Arc<Self> {
            Arc::new(Self {
                class,
                calls: AtomicUsize::new(0),
                seen:  std::sync::Mutex::new(None),
            })
        }
    }

    impl Classifier for CountingStub {
        fn predict(&self, features: &[f64; 7]) -> Result<u32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen.lock().unwrap() = Some(*features);
            Ok(self.class)
        }
    }

    /// Fails every inference with a fixed message.
    struct FailingStub;

    impl Classifier for FailingStub {
        fn predict(&self, _features: &[f64; 7]) -> Result<u32> {
            bail!("tree 3 is malformed")
        }
    }

    fn valid_raw() -> RawSubmission {
        RawSubmission {
            job_role_match:     "Yes".into(),
            experience:         "2.5".into(),
            marital_status:     "Single".into(),
            emp_group_b1:       "No".into(),
            location_gurgaon:   "Yes".into(),
            function_operation: "No".into(),
            age:                "28".into(),
        }
    }

    #[test]
    fn test_scenario_a_vector_reaches_the_model() {
        let stub    = CountingStub::new(1);
        let service = PredictionService::new(stub.clone());

        let outcome = service.predict(&valid_raw()).unwrap();
        assert_eq!(outcome, Outcome::Stay);
        assert_eq!(
            stub.seen.lock().unwrap().unwrap(),
            [1.0, 2.5, 4.0, 0.0, 1.0, 0.0, 28.0],
        );
    }

    #[test]
    fn test_class_zero_maps_to_left() {
        let service = PredictionService::new(CountingStub::new(0));
        assert_eq!(service.predict(&valid_raw()).unwrap(), Outcome::Left);
    }

    #[test]
    fn test_scenario_b_invalid_marital_status_never_reaches_model() {
        let stub    = CountingStub::new(1);
        let service = PredictionService::new(stub.clone());

        let mut raw = valid_raw();
        raw.marital_status = "Married".into();

        let err = service.predict(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Marital Status must be one of: Div., Marr., NTBD, Sep., Single",
        );
        // Validation failed, so the model must not have been consulted
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_scenario_c_invalid_job_role_match() {
        let service = PredictionService::new(CountingStub::new(1));
        let mut raw = valid_raw();
        raw.job_role_match = "maybe".into();

        let err = service.predict(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Job Role Match must be 'Yes' or 'No'");
    }

    #[test]
    fn test_scenario_d_model_error_surfaces_as_its_own_text() {
        let service = PredictionService::new(Arc::new(FailingStub));
        let err = service.predict(&valid_raw()).unwrap_err();
        assert_eq!(err.to_string(), "tree 3 is malformed");
        assert!(matches!(err, PredictError::Inference(_)));
    }

    #[test]
    fn test_identical_submissions_yield_identical_labels() {
        // No hidden state affects the outcome
        let service = PredictionService::new(CountingStub::new(1));
        let first  = service.predict(&valid_raw()).unwrap();
        let second = service.predict(&valid_raw()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_boundary_parse_error_is_a_plain_failure() {
        let stub    = CountingStub::new(1);
        let service = PredictionService::new(stub.clone());
        let mut raw = valid_raw();
        raw.age = "twenty-eight".into();

        let err = service.predict(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Age in YY. must be a number");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}
