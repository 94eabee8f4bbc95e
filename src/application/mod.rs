// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal: turning a raw form submission into a prediction
// label or a failure message.
//
// Rules for this layer:
//   - No model math here (that's Layer 4)
//   - No HTML or HTTP here (that's Layer 1)
//   - No file access here (that's Layer 5)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The validate → encode → predict pipeline
pub mod predict_use_case;
