mod census;
mod is_valid;

pub use census::{Census, CensusReport};
pub use is_valid::IsValid;
