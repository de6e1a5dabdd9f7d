//! Territory roster representation.
//!
//! Contains the territory value type, the fixed-roster registry with its
//! lookup and counting queries, and custom-layout parsing.

pub mod layout;
pub mod registry;
pub mod territory;

pub use layout::{parse_layout, LayoutError, TerritorySpec, MIN_TERRITORIES};
pub use registry::{RegistryError, TerritoryRegistry, DEMO_SIZE};
pub use territory::{Territory, MAX_COLOR_LEN, MAX_NAME_LEN};
