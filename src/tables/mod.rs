//! Statutory and actuarial reference tables
//!
//! All three tables are compiled-in constants: nothing is read from disk
//! and nothing is mutated, so lookups are safe from any thread.

mod useful_life;
mod life_expectancy;
mod present_value;

pub use useful_life::{useful_life, is_known_structure, STRUCTURE_USEFUL_LIVES};
pub use life_expectancy::{life_expectancy, LIFE_TABLE_EDITION};
pub use present_value::{present_value_factor, STATUTORY_RATE};
