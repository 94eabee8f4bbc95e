// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   model_store.rs — Loading the serialized model artifact
//                    from disk. The one piece of persisted
//                    state in the whole system: read once at
//                    startup, read-only thereafter.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model artifact loading
pub mod model_store;
