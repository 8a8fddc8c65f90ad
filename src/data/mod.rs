/// Data layer: core types, format descriptors, parsing, and statistics.
///
/// Architecture:
/// ```text
///  log / msd / rdf text file
///        │
///        ▼
///   ┌──────────┐
///   │  parse    │  bytes + TableFormat → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  named numeric columns with units
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / standard error / OLS fit
///   └──────────┘
/// ```
pub mod format;
pub mod model;
pub mod parse;
pub mod stats;
