//! Search strategies enumerating and classifying numerical semigroups with a
//! fixed Frobenius number, a fixed genus, or a fixed genus and multiplicity.

mod brute_force;
mod classify;
mod combinations;
mod config;
mod frobenius_fixed;
mod genus_fixed;
mod genus_multiplicity;
mod report;
mod strategy;

pub use classify::{classify, Classification, Majority};
pub use combinations::{Combinations, SubsetSweep};
pub use config::{SearchConfig, DEFAULT_CANDIDATE_BOUND_FACTOR};
pub use frobenius_fixed::{candidates, frobenius_valid, seed, Candidate, FixedFrobeniusSearch};
pub use genus_fixed::FixedGenusSearch;
pub use genus_multiplicity::FixedGenusMultiplicitySearch;
pub use report::{
    ClassificationSummary, RecordOrigin, SearchMetrics, SearchReport, SemigroupRecord,
};
pub use strategy::{
    collect, run_search, FnSink, NullSink, SearchMode, SearchSink, SearchStrategy, REPORT_SCHEMA,
};
