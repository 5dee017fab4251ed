//! Residence Right - statutory valuation of the spousal residence right (配偶者居住権)
//!
//! This library provides:
//! - Date arithmetic for the spouse's attained age and the building's elapsed years
//! - Compiled-in lookup tables (useful life, life expectancy, present value factors)
//! - The valuation engine splitting building and land values between the
//!   spouse's right and the remainder owner
//! - CSV batch loading and a best-effort analytics sink for the executables

pub mod case;
pub mod dates;
pub mod tables;
pub mod valuation;
pub mod error;
pub mod analytics;
pub mod format;

// Re-export commonly used types
pub use case::{InputCase, Gender};
pub use valuation::{calculate, calculate_checked, ResultRecord, CalculationRecord};
pub use error::ValuationError;
pub use analytics::{AnalyticsConfig, AnalyticsSink};
