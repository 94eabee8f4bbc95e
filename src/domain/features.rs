// ============================================================
// Layer 3 — Encoded Feature Vector
// ============================================================
// The model was trained on a table with exactly these seven
// columns, in exactly this order:
//
//   0  Job Role Match        (0/1)
//   1  Experience (YY.MM)    (years.months as a decimal)
//   2  Marital Status        (0–4)
//   3  Emp. Group_B1         (0/1)
//   4  Location_Gurgaon      (0/1)
//   5  Function_Operation    (0/1)
//   6  Age in YY.            (years)
//
// The column names and order are part of the model contract —
// the artifact records them and refuses to load against a
// different layout, because the model's behavior for
// mismatched columns is undefined.

use crate::domain::submission::PredictionRequest;

/// The column names the model was trained on, in training
/// order. The underscores and punctuation are exactly as they
/// appeared in the training table — do not "fix" them.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "Job Role Match",
    "Experience (YY.MM)",
    "Marital Status",
    "Emp. Group_B1",
    "Location_Gurgaon",
    "Function_Operation",
    "Age in YY.",
];

/// One encoded record, ready for inference. Produced from a
/// validated request, consumed once by the model, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub job_role_match:     f64,
    pub experience:         f64,
    pub marital_status:     f64,
    pub emp_group_b1:       f64,
    pub location_gurgaon:   f64,
    pub function_operation: f64,
    pub age:                f64,
}

impl FeatureVector {
    /// Lay the fields out in training-column order.
    pub fn to_array(self) -> [f64; 7] {
        [
            self.job_role_match,
            self.experience,
            self.marital_status,
            self.emp_group_b1,
            self.location_gurgaon,
            self.function_operation,
            self.age,
        ]
    }
}

/// Encoding a validated request is infallible: the enums carry
/// their codes, so there is no lookup that could miss.
impl From<&PredictionRequest> for FeatureVector {
    fn from(req: &PredictionRequest) -> Self {
        Self {
            job_role_match:     f64::from(req.job_role_match.code()),
            experience:         req.experience,
            marital_status:     f64::from(req.marital_status.code()),
            emp_group_b1:       f64::from(req.emp_group_b1.code()),
            location_gurgaon:   f64::from(req.location_gurgaon.code()),
            function_operation: f64::from(req.function_operation.code()),
            age:                req.age,
        }
    }
}
