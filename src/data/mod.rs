/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ JobDataset │  Vec<Row>, column index
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ insights  │  distinct values, filters, salary queries
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
