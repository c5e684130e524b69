mod fuzzy;

pub use fuzzy::{FuzzyIndex, SearchHit};
