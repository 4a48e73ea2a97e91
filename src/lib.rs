//! Scan a directory of ngram CSV files and pick out the rows whose `ngram`
//! is one of a fixed set of years.
//!
//! [`data::filter::Sieve::matches`] is the programmatic entry point: a lazy
//! stream of [`data::model::Match`]es that stops at the first error.
//! [`run::run`] is what the binary calls; it adds the text report and the
//! error policy.

pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod run;
