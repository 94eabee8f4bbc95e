// ============================================================
// Layer 3 — Form Submission Types
// ============================================================
// Two views of the same seven fields:
//
//   RawSubmission     — every field exactly as the user typed
//                       it, all strings. Kept around on BOTH
//                       the success and failure paths so the
//                       form can be redisplayed pre-filled.
//
//   PredictionRequest — the validated, typed counterpart.
//                       Constructing one from a RawSubmission
//                       is the whole validation step: the
//                       first failing field wins and its
//                       message is returned.
//
// Reference: Rust Book §5 (Structs), §9 (Recoverable Errors)

use serde::Deserialize;

use crate::domain::encoding::{parse_number, MaritalStatus, ValidationError, YesNo};

/// The seven form fields as submitted, before any validation.
///
/// `#[serde(default)]` means a missing field deserializes to an
/// empty string instead of rejecting the whole request — the
/// empty string then fails validation like any other bad value,
/// so the user still gets a re-rendered form with a message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub job_role_match:     String,
    pub experience:         String,
    pub marital_status:     String,
    pub emp_group_b1:       String,
    pub location_gurgaon:   String,
    pub function_operation: String,
    pub age:                String,
}

/// A fully validated prediction request. If a value of this
/// type exists, every categorical field is inside its domain
/// and both numeric fields parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    pub job_role_match:     YesNo,
    pub experience:         f64,
    pub marital_status:     MaritalStatus,
    pub emp_group_b1:       YesNo,
    pub location_gurgaon:   YesNo,
    pub function_operation: YesNo,
    pub age:                f64,
}

impl PredictionRequest {
    /// Validate a raw submission field by field.
    ///
    /// Order matters and mirrors the original service: the
    /// numeric fields fail at the boundary first, then the
    /// categoricals in form order. Validation is all-or-nothing
    /// — the first failure determines the message, no error
    /// accumulation.
    pub fn parse(raw: &RawSubmission) -> Result<Self, ValidationError> {
        let experience = parse_number(&raw.experience, "Experience (YY.MM)")?;
        let age        = parse_number(&raw.age, "Age in YY.")?;

        let job_role_match     = YesNo::parse(&raw.job_role_match, "Job Role Match")?;
        let marital_status     = MaritalStatus::parse(&raw.marital_status)?;
        let emp_group_b1       = YesNo::parse(&raw.emp_group_b1, "Emp. Group B1")?;
        let location_gurgaon   = YesNo::parse(&raw.location_gurgaon, "Location Gurgaon")?;
        let function_operation = YesNo::parse(&raw.function_operation, "Function Operation")?;

        Ok(Self {
            job_role_match,
            experience,
            marital_status,
            emp_group_b1,
            location_gurgaon,
            function_operation,
            age,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// A submission with every field valid — tests mutate one
    /// field at a time from this baseline.
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
    fn test_valid_submission_parses() {
        let req = PredictionRequest::parse(&valid_raw()).unwrap();
        assert_eq!(req.job_role_match, YesNo::Yes);
        assert_eq!(req.experience, 2.5);
        assert_eq!(req.marital_status, MaritalStatus::Single);
        assert_eq!(req.age, 28.0);
    }

    #[test]
    fn test_each_categorical_field_is_checked() {
        // Drive one field out of domain at a time and check the
        // message names that field
        let cases: [(fn(&mut RawSubmission), &str); 5] = [
            (|r| r.job_role_match = "maybe".into(),
             "Job Role Match must be 'Yes' or 'No'"),
            (|r| r.marital_status = "Widowed".into(),
             "Marital Status must be one of: Div., Marr., NTBD, Sep., Single"),
            (|r| r.emp_group_b1 = "B2".into(),
             "Emp. Group B1 must be 'Yes' or 'No'"),
            (|r| r.location_gurgaon = "Delhi".into(),
             "Location Gurgaon must be 'Yes' or 'No'"),
            (|r| r.function_operation = "Sales".into(),
             "Function Operation must be 'Yes' or 'No'"),
        ];
        for (mutate, expected) in cases {
            let mut raw = valid_raw();
            mutate(&mut raw);
            let err = PredictionRequest::parse(&raw).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_numeric_fields_fail_before_categoricals() {
        // Both experience and job_role_match are bad — the
        // numeric boundary error wins because it is checked first
        let mut raw = valid_raw();
        raw.experience = "two".into();
        raw.job_role_match = "maybe".into();
        let err = PredictionRequest::parse(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Experience (YY.MM) must be a number");
    }

    #[test]
    fn test_first_failing_categorical_wins() {
        // job_role_match is validated before marital_status
        let mut raw = valid_raw();
        raw.job_role_match = "maybe".into();
        raw.marital_status = "Married".into();
        let err = PredictionRequest::parse(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Job Role Match must be 'Yes' or 'No'");
    }

    #[test]
    fn test_missing_field_defaults_to_empty_and_fails() {
        // serde(default) turns an absent form field into "",
        // which must fail validation rather than panic
        let raw = RawSubmission::default();
        assert!(PredictionRequest::parse(&raw).is_err());
    }
}
