// world/ - Scene geometry queries
//
// Pure functions over time of day and surface size.
// No state, no allocation beyond returned outlines.

mod sky;
mod terrain;

pub use sky::*;
pub use terrain::*;
