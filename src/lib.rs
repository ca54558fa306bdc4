//! Foal Development - milestone lifecycle, enrichment eligibility and evaluation scoring
//!
//! Everything here is a pure function of the snapshot the caller hands in.
//! Nothing is persisted or mutated; callers apply results and store them.

pub mod core;
pub mod enrichment;
pub mod evaluation;
pub mod foal;
pub mod milestones;
