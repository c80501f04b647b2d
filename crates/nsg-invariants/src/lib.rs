#![deny(missing_docs)]
#![doc = "Representability oracle, generator minimisation and invariant calculators \
for numerical semigroups, plus the memoising session that bundles them."]

/// Apéry set calculator.
pub mod apery;
/// Conductor and genus calculator.
pub mod conductor;
/// Frobenius number calculator.
pub mod frobenius;
/// Hilbert-minimality filter for brute-force candidates.
pub mod hilbert;
/// Minimal generating set reduction.
pub mod minimize;
/// Boolean reachability tables.
pub mod oracle;
/// Memoising invariant engine.
pub mod session;

pub use apery::{apery, DEFAULT_APERY_BOUND_FACTOR};
pub use conductor::conductor_and_genus;
pub use frobenius::frobenius;
pub use hilbert::is_hilbert_minimal;
pub use minimize::{minimize, minimize_values};
pub use oracle::{reachability_table, representable};
pub use session::{CacheStats, InvariantOptions, InvariantSession};
