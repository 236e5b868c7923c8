pub mod coverage;
pub mod placeholder;

pub use coverage::{missing_pairs, CoverageSet, MissingPair};
pub use placeholder::PlaceholderListing;
