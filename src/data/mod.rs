//! Data layer: raw tables, normalization, and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet        sample
//!        │                          │
//!        ▼                          ▼
//!   ┌──────────┐              ┌──────────┐
//!   │  loader   │  file →     │ RawTable │  header row + string cells
//!   └──────────┘              └──────────┘
//!        │                          │
//!        └────────────┬─────────────┘
//!                     ▼
//!   ┌────────────────────────┐
//!   │ normalize + AliasTable  │  rename headers, type coordinates, drop bad rows
//!   └────────────────────────┘
//!                     │
//!                     ▼
//!   ┌──────────┐
//!   │ Dataset   │  Vec<FacilityRecord> + LoadReport, immutable
//!   └──────────┘
//!                     │
//!                     ▼
//!   ┌──────────┐
//!   │  filter   │  FacilityFilter predicate, fed to query_nearest
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod sample;
pub mod schema;
