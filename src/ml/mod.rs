// ============================================================
// Layer 4 — ML / Model Layer
// ============================================================
// This layer contains ALL knowledge of the model artifact's
// structure. No other layer knows it is a tree ensemble —
// they only see the Classifier trait.
//
// Why isolate the model code here?
//   - If the artifact format changes, we only update this layer
//   - Other layers are testable with stub classifiers
//   - The model stays a black box to the rest of the system
//
// What's in this layer:
//
//   model.rs — The gradient-boosted tree ensemble.
//              Deserializes from JSON, validates the recorded
//              feature columns against the expected layout,
//              and evaluates one record by walking every tree
//              and summing leaf values onto the base score.

/// The serialized tree-ensemble classifier
pub mod model;
