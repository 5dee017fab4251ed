//! Input case data structures and CSV loading

mod data;
pub mod loader;

pub use data::{InputCase, Gender, parse_date};
pub use loader::{load_cases, load_cases_from_reader, load_cases_lenient, CaseRecord, CaseLoadError};
