// ============================================================
// Layer 3 — Prediction Outcome
// ============================================================
// The model is a binary classifier: class 1 means the employee
// is predicted to stay, anything else means they are predicted
// to leave. The labels here are the exact strings rendered
// into the page.

/// The binary classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Left,
}

impl Outcome {
    /// Translate the model's raw class index into an outcome.
    /// 1 → Stay, every other class → Left.
    pub fn from_class(class: u32) -> Self {
        if class == 1 { Outcome::Stay } else { Outcome::Left }
    }

    /// The user-facing label for this outcome
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Stay => "Stay",
            Outcome::Left => "Left",
        }
    }
}
