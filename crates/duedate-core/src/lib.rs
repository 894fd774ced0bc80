//! # Duedate Core Library
//!
//! Computes the due date of a work item from its submission instant and a
//! turnaround measured in business hours.
//!
//! ## Features
//!
//! - **Business Calendar**: 09:00-17:00, Monday to Friday, with a fixed set of
//!   rule-based US holidays
//! - **Timezone Awareness**: every rule is evaluated in one IANA reference zone
//!   (America/New_York by default) with DST-correct offsets
//! - **Bounded Correction**: the due-date advancer carries out-of-hours overflow
//!   into the next business morning and stops with an error instead of looping
//!   forever
//!
//! ## Core Modules
//!
//! - [`config`]: Calendar configuration and named constants
//! - [`timezone`]: Timezone normalization and display helpers
//! - [`holiday`]: Rule-based holiday calendar
//! - [`validation`]: Submission checks (time, weekday, holiday)
//! - [`due_date`]: The due-date advancer
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::TimeZone;
//! use chrono_tz::America::New_York;
//! use duedate_core::due_date::calculate_due_date;
//!
//! // Wednesday 09:15:05 with an 8 hour turnaround is due Thursday 09:15:05
//! let submitted = New_York.with_ymd_and_hms(2023, 5, 24, 9, 15, 5).unwrap();
//! let due = calculate_due_date(&submitted, 8).unwrap();
//! assert_eq!(due.due_at, New_York.with_ymd_and_hms(2023, 5, 25, 9, 15, 5).unwrap());
//! ```

pub mod config;
pub mod due_date;
pub mod error;
pub mod holiday;
pub mod timezone;
pub mod validation;
