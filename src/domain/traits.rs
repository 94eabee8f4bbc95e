// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - GbdtModel implements Classifier
//   - The tests use stub classifiers that count calls or fail
//     on purpose
//   - The application layer only sees Classifier and works
//     with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

/// Any component that can classify one encoded record.
///
/// `Send + Sync` because the one loaded instance is shared,
/// read-only, across all concurrently handled requests.
///
/// Implementations:
///   - GbdtModel → evaluates the serialized tree ensemble
///   - test stubs → fixed class, failure injection, call counting
pub trait Classifier: Send + Sync {
    /// Classify one feature row laid out in training-column
    /// order. Returns the raw class index (1 = stay).
    ///
    /// Errors represent a malformed artifact or input — they
    /// fail the current request only and are never retried.
    fn predict(&self, features: &[f64; 7]) -> Result<u32>;
}
