//! Valuation of the spousal residence right
//!
//! One pass, no state: an `InputCase` goes in, a `ResultRecord` with every
//! intermediate value comes out.
//!
//! # Example
//!
//! ```rust,ignore
//! use residence_right::{calculate_checked, InputCase};
//!
//! let result = calculate_checked(&case)?;
//! println!("Spouse's rights: {} yen", result.spouse_right_total);
//! ```

mod engine;
mod result;
mod validation;

pub use engine::{calculate, TENANCY_RIGHT_RATIO};
pub use result::{ResultRecord, CalculationRecord};
pub use validation::{validate, calculate_checked, LEASE_RATIOS};
