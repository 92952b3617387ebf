//! Sort-trace generator
//!
//! A deterministic step-log producer for five classic in-place sorting
//! algorithms. Unlike the snippet simulator it actually runs the algorithm,
//! recording one [`SortStep`] per comparison, swap, and milestone.
//!
//! - [`trace`]: the [`SortTracer`] and its step records
//! - [`info`]: static descriptions and complexity figures

pub mod info;
pub mod trace;

pub use info::AlgorithmInfo;
pub use trace::{ascending, descending, random, SortStep, SortTracer};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Merge => "merge",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm '{0}' (expected bubble, selection, insertion, quick, or merge)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for SortAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
