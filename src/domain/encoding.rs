// ============================================================
// Layer 3 — Categorical Encoding
// ============================================================
// The model was trained on label-encoded columns, so every
// categorical form field has to be mapped to the exact integer
// the encoder produced during training:
//
//   Binary fields (four of them):  "No" → 0, "Yes" → 1
//   Marital status:  "Div." → 0, "Marr." → 1, "NTBD" → 2,
//                    "Sep." → 3, "Single" → 4
//
// Instead of looking these up in a dictionary at runtime we
// define one enum per field shape with an exhaustive mapping.
// The compiler then guarantees that an encoded value is always
// a member of its domain — an out-of-domain string simply
// cannot be constructed as an enum value.
//
// Parsing a raw string IS the validation step: it either
// yields an enum value or a ValidationError carrying the
// user-facing message for that field.
//
// Reference: Rust Book §6 (Enums), §9 (Recoverable Errors)

use thiserror::Error;

/// A validation failure for one form field.
///
/// The Display strings are user-facing — they are rendered
/// verbatim into the page, so they name the field and its
/// allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A yes/no field received something other than "Yes" or "No"
    #[error("{field} must be 'Yes' or 'No'")]
    NotYesNo { field: &'static str },

    /// The marital status field received a value outside its five codes
    #[error("Marital Status must be one of: Div., Marr., NTBD, Sep., Single")]
    BadMaritalStatus,

    /// A numeric field was missing or not parseable as a number
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
}

/// A binary categorical field. Four form fields share this
/// domain: Job Role Match, Emp. Group B1, Location Gurgaon
/// and Function Operation.
///
/// The discriminants are the label-encoder codes the model
/// was trained on — do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    No  = 0,
    Yes = 1,
}

impl YesNo {
    /// Parse a raw form value, naming the owning field in the
    /// error message. Matching is exact: "yes" or "YES" are
    /// rejected, because the training data only ever contained
    /// the two canonical strings.
    pub fn parse(raw: &str, field: &'static str) -> Result<Self, ValidationError> {
        match raw {
            "No"  => Ok(YesNo::No),
            "Yes" => Ok(YesNo::Yes),
            _     => Err(ValidationError::NotYesNo { field }),
        }
    }

    /// The integer code the model expects
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The five-way marital status field.
///
/// The variant labels mirror the abbreviated strings used in
/// the source HR dataset ("Div.", "Marr.", …); the
/// discriminants are their label-encoder codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Divorced  = 0,
    Married   = 1,
    /// "NTBD" — not to be disclosed
    Undisclosed = 2,
    Separated = 3,
    Single    = 4,
}

impl MaritalStatus {
    /// Parse a raw form value against the five allowed strings.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "Div."   => Ok(MaritalStatus::Divorced),
            "Marr."  => Ok(MaritalStatus::Married),
            "NTBD"   => Ok(MaritalStatus::Undisclosed),
            "Sep."   => Ok(MaritalStatus::Separated),
            "Single" => Ok(MaritalStatus::Single),
            _        => Err(ValidationError::BadMaritalStatus),
        }
    }

    /// The integer code the model expects
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Parse a numeric form field, naming the field in the error.
/// An empty string (missing field) fails here too, before any
/// categorical validation runs.
pub fn parse_number(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber { field })
}
