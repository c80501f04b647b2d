#![deny(missing_docs)]
#![doc = "Core traits and data types for the numerical semigroup engine."]

pub mod errors;
pub mod generators;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, NsgError};
pub use generators::{angle_notation, gcd, gcd_of, CanonicalKey, GeneratorSet};
pub use provenance::{RunProvenance, SchemaVersion};
pub use types::{AperySet, ConductorGenus};

/// Invariant engine contract consumed by every search strategy.
///
/// Methods taking `&mut self` may consult and populate memo tables keyed by
/// [`CanonicalKey`]; results for a given key never change.
pub trait SemigroupInvariants {
    /// Whether `value` is a non-negative integer combination of the generators.
    fn representable(&self, value: i64, generators: &GeneratorSet) -> bool;

    /// Unique minimal generating set of the semigroup spanned by `generators`.
    fn minimize(&self, generators: &GeneratorSet) -> Result<GeneratorSet, NsgError>;

    /// Conductor and genus of the semigroup.
    fn conductor_and_genus(&mut self, generators: &GeneratorSet)
        -> Result<ConductorGenus, NsgError>;

    /// Frobenius number, or `None` when every non-negative integer is representable.
    fn frobenius(&mut self, generators: &GeneratorSet) -> Result<Option<u64>, NsgError>;

    /// Apéry set relative to `period`.
    fn apery(&mut self, generators: &GeneratorSet, period: u64) -> Result<AperySet, NsgError>;

    /// Non-redundancy and closure completeness filter used by the brute-force searches.
    fn is_hilbert_minimal(&mut self, generators: &GeneratorSet) -> Result<bool, NsgError>;

    /// Genus of the semigroup.
    fn genus(&mut self, generators: &GeneratorSet) -> Result<u64, NsgError> {
        Ok(self.conductor_and_genus(generators)?.genus)
    }

    /// Conductor of the semigroup.
    fn conductor(&mut self, generators: &GeneratorSet) -> Result<u64, NsgError> {
        Ok(self.conductor_and_genus(generators)?.conductor)
    }
}
