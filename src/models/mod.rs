//! Academy data models
//!
//! Each record type has a `from_backend` constructor that turns one
//! loosely-typed backend JSON object into a fully-populated record. These
//! constructors never fail: every field has a documented default.

pub mod raw;

mod belt;
mod certificate;
mod event;
mod fee;
mod student;
mod user;

// Re-export all models for convenient access
pub use belt::{BeltLevel, BeltTest, Promotion};
pub use certificate::{Certificate, CertificateVerification};
pub use event::Event;
pub use fee::{Fee, FeeStatus, FeeSummary};
pub use raw::DateContext;
pub use student::{AttendanceEntry, AttendanceStatus, AttendanceSummary, Student};
pub use user::{Credentials, UserRecord};
