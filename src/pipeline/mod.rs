/// The three upload pipelines, as pure functions `(upload, params) → view`.
///
/// Each pipeline owns one file format end to end: parse with its
/// [`TableFormat`](crate::data::format::TableFormat), convert units, filter,
/// derive statistics, and emit a [`render`](crate::render) model. They share
/// no state; the UI re-runs one pipeline per upload or threshold change.
pub mod log;
pub mod msd;
pub mod rdf;
