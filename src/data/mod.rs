/// Data layer: the generic table model and the delimited-text loader.
///
/// Architecture:
/// ```text
///  .csv (semicolon or comma delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  rows of text cells, header lookup, numeric coercion
///   └──────────┘
/// ```
pub mod loader;
pub mod table;
