/// Recovery SDK - Domain model for crypto-asset recovery cases.
///
/// Closed enumerations for the tag sets the wider system stores as strings
/// (wallet types, case status and priority), and the pure validation stage
/// of a recovery submission. Persistence, token lookup, and HTTP surfaces
/// live outside this crate.

pub mod case;
pub mod submission;
pub mod wallet;

mod error;
pub use error::SubmissionError;
