//! # Timecode Core
//!
//! SMPTE timecode anchored on an absolute frame count, with drop-frame support at 29.97 fps.
//!
//! ## Modules
//!
//! - `constants`: Named frame rates and clock constants
//! - `types`: The `Timecode` type and its constructors
//! - `format`: Frame count to `HH:MM:SS:FF` / `HH:MM:SS;FF`, millisecond views
//! - `parse`: Strict timecode parsing
//! - `arith`: Addition, subtraction, offsets and comparisons with 24-hour wraparound
//! - `decimal`: Decimal seconds ↔ frames conversion and millisecond rounding
//!
//! ## Example
//!
//! ```rust
//! use timecode_core::Timecode;
//!
//! let mut tc = Timecode::drop_frame_from_frame(44970).unwrap();
//! let hour = Timecode::drop_frame_from_seconds(3599.0).unwrap();
//! tc.add(&hour).unwrap();
//! assert_eq!(tc.to_string(), "01:24:59;14");
//! ```

#![warn(missing_docs)]

pub mod arith;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod format;
pub mod parse;
pub mod types;

// Re-export commonly used types
pub use constants::{FPS_23_976, FPS_29_97};
pub use error::TimecodeError;
pub use types::Timecode;

/// Result type alias for timecode operations
pub type Result<T> = core::result::Result<T, TimecodeError>;
