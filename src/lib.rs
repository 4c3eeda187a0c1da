//! Nearest public restroom lookup over Seoul facility tables.
//!
//! A raw table is normalized once into an immutable [`Dataset`]; each request
//! then ranks facilities by geodesic distance from a [`ReferencePoint`]:
//!
//! ```
//! use std::num::NonZeroUsize;
//! use restroom_locator::{normalize, query_nearest, sample_table, AliasTable, ReferencePoint};
//!
//! let dataset = normalize(&sample_table(), &AliasTable::default()).unwrap();
//! let city_hall = ReferencePoint::new(37.5665, 126.9780);
//! let nearest = query_nearest(&dataset, city_hall, NonZeroUsize::new(3).unwrap(), None).unwrap();
//! assert_eq!(nearest[0].record.name, "서울광장화장실");
//! ```

pub mod cli;
pub mod data;
pub mod distance;
pub mod error;
pub mod query;
pub mod render;
pub mod resolve;

pub use data::filter::{is_open_24_hours, FacilityFilter};
pub use data::loader::load_file;
pub use data::model::{Dataset, DropReason, FacilityRecord, LoadReport, RawTable, ReferencePoint};
pub use data::normalize::normalize;
pub use data::sample::sample_table;
pub use data::schema::{AliasTable, Field};
pub use error::{InvalidReferenceError, ResolveError, SchemaError};
pub use query::{query_nearest, NearestFacility, DEFAULT_COUNT};
pub use resolve::{parse_coordinates, CoordinateInput, DistrictTable, LocationResolver};
