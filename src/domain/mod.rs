// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust enums,
// structs and traits that define the core concepts of the
// attrition predictor.
//
// Rules for this layer:
//   - NO axum or HTTP types allowed here
//   - NO file I/O or network calls
//   - NO knowledge of the model artifact's structure
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no server, no artifact on disk)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Categorical field enums and their integer codes
pub mod encoding;

// The raw form submission and its validated counterpart
pub mod submission;

// The fixed seven-column feature vector the model consumes
pub mod features;

// The binary classification outcome and its label
pub mod outcome;

// Core abstractions (traits) that other layers implement
pub mod traits;
