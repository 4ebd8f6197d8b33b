//! Centromere detection from low gene density and tandem repeat evidence.
//!
//! The centromere of an assembled chromosome tends to sit in a stretch that
//! is depleted of annotated genes and enriched in tandem repeats. This crate
//! combines those two independent signals:
//!
//! - [`annotation`] reads the gene rows out of a GFF3 file
//! - [`density`] bins genes into fixed windows along each chromosome and
//!   extracts the maximal runs of zero-gene windows (low gene density regions)
//! - [`candidates`] pools repeat-finder candidate intervals per chromosome
//! - [`resolver`] intersects the two region sets and keeps the single
//!   best-supported interval per chromosome
//! - [`writer`] serializes the per-chromosome summary table
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! use cetra_core::models::Karyotype;
//! use cetra_centromere::annotation::read_gene_features;
//! use cetra_centromere::candidates::{aggregate_tr_intervals, discover_candidate_files};
//! use cetra_centromere::density::{compute_lgd_regions, DEFAULT_WINDOW_SIZE};
//! use cetra_centromere::resolver::resolve_centromeres;
//!
//! let karyotype = Karyotype::try_from(Path::new("karyotype.txt")).unwrap();
//! let genes = read_gene_features(Path::new("annotation.gff")).unwrap();
//!
//! let lgd_map = compute_lgd_regions(&karyotype, &genes, DEFAULT_WINDOW_SIZE).unwrap();
//! let files = discover_candidate_files(Path::new("candidates/")).unwrap();
//! let tr_map = aggregate_tr_intervals(&files);
//!
//! let centromeres = resolve_centromeres(&karyotype, &lgd_map, &tr_map);
//! ```

pub mod annotation;
pub mod candidates;
pub mod density;
pub mod errors;
pub mod resolver;
pub mod writer;

// re-exports
pub use candidates::{
    CandidateFile, IntervalSource, aggregate_tr_intervals, discover_candidate_files,
};
pub use density::{DEFAULT_WINDOW_SIZE, compute_lgd_regions};
pub use resolver::{CentromereCandidate, resolve_centromeres};
