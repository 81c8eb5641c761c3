//! Utility Module
//!
//! Small helpers shared by the estimators and writers:
//!
//! - [`format`]: C `%g`-style number formatting for warning messages
//! - [`fs`]: Directory creation and near-atomic file replacement
//!
//! ```rust,ignore
//! use scene_export::utils::format::format_significant;
//!
//! assert_eq!(format_significant(1.0049, 3), "1");
//! assert_eq!(format_significant(0.000_012_5, 3), "1.25e-05");
//! ```

pub mod format;
pub mod fs;

pub use format::format_significant;
pub use fs::{ensure_dir, write_atomic};
