/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, distinct values per filter column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the four selection sets → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
