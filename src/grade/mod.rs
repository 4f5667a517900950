#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grading for the code-writing activity.
//!
//! Deliberately not an interpreter: submissions are classified against a
//! small ordered catalog of expected exercise shapes, each a conjunction of
//! required substrings tolerant of quote style. Every submission yields an
//! in-character verdict, matched or not.

/// The exercise catalog and its simulated execution.
pub mod python;
/// Quote-tolerant substring matching over submissions.
pub mod rules;
/// Verdict type returned by the grader.
pub mod verdict;

pub use python::grade;
pub use rules::Submission;
pub use verdict::Verdict;
