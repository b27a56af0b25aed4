//! Query helpers for team building and matchup display
//!
//! This module provides chart-wide scans for answering questions like
//! "what threatens this creature" without walking the chart by hand.

mod matchup;

pub use matchup::{all_resisted_by, any_strong_against, resisted_by, threats_to};
