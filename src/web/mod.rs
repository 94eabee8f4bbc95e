// ============================================================
// Layer 1 — Web / Presentation Layer
// ============================================================
// The HTTP entry point. It uses axum for routing and form
// extraction, and tower-http to serve the stylesheet under
// /static. All business logic is delegated to Layer 2 — the
// handlers only translate between HTTP and the application's
// result type.
//
// Routes:
//   GET  /         → the empty input form
//   POST /predict  → run the pipeline, re-render the form with
//                    the label or the failure message
//   GET  /health   → liveness probe
//   GET  /static/* → stylesheet and other assets

// Router construction and request handlers
pub mod routes;

// HTML page rendering
pub mod pages;
