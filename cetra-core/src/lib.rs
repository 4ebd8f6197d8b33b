//! Core data structures and I/O plumbing shared by the cetra crates.
//!
//! This crate holds the leaf types every pipeline stage consumes: the
//! per-chromosome length table ([`models::Karyotype`]) and the 1-based
//! inclusive interval type ([`models::GenomicInterval`]), plus a reader
//! helper that handles gzip transparently.

pub mod errors;
pub mod models;
pub mod utils;
