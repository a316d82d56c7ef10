//src/model/mod.rs
pub mod catalog;
pub mod chain;
pub mod elements;
pub mod nuclide;
pub mod strength;

// Re-exports for cleaner imports
pub use chain::{ChainKind, ChainSelection};
pub use nuclide::{is_magic, Coord, Dataset, GridBounds, NuclideRecord, MAGIC_NUMBERS, MAX_NUCLEON_COUNT};
pub use strength::{StrengthPoint, StrengthQuery, StrengthSpectrum};
