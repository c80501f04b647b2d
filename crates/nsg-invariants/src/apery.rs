use nsg_core::{AperySet, ErrorInfo, GeneratorSet, NsgError};

use crate::oracle::{reachability_table, to_index};

/// Default multiple of `period²` scanned for Apéry representatives.
pub const DEFAULT_APERY_BOUND_FACTOR: u64 = 2;

/// Apéry set of `generators` relative to `period`.
///
/// Representatives are searched in `0..=factor * period²`. That bound is
/// sufficient for the fixed-Frobenius family (`period = F + 1` and the set
/// already spans `[F + 1, 2F + 1]`) but not for arbitrary sets, so a residue
/// class left empty is reported as `apery-bound-exceeded` instead of being
/// dropped.
pub fn apery(generators: &GeneratorSet, period: u64, factor: u64) -> Result<AperySet, NsgError> {
    if period == 0 {
        return Err(NsgError::Invariant(
            ErrorInfo::new("invalid-period", "Apéry period must be positive")
                .with_context("key", generators.key().as_str()),
        ));
    }
    let bound = factor
        .checked_mul(period)
        .and_then(|v| v.checked_mul(period))
        .ok_or_else(|| {
            NsgError::Invariant(
                ErrorInfo::new("bound-overflow", "Apéry bound overflowed")
                    .with_context("period", period.to_string())
                    .with_context("factor", factor.to_string()),
            )
        })?;
    let modulus = to_index(period)?;
    let table = reachability_table(generators.values(), to_index(bound)?);

    let mut representatives: Vec<Option<u64>> = vec![None; modulus];
    let mut missing = modulus;
    for (value, &reachable) in table.iter().enumerate() {
        if !reachable {
            continue;
        }
        let slot = &mut representatives[value % modulus];
        if slot.is_none() {
            *slot = Some(value as u64);
            missing -= 1;
            if missing == 0 {
                break;
            }
        }
    }

    if missing > 0 {
        let first_missing = representatives
            .iter()
            .position(Option::is_none)
            .unwrap_or_default();
        return Err(NsgError::Invariant(
            ErrorInfo::new(
                "apery-bound-exceeded",
                "residue class without representative inside the search bound",
            )
            .with_context("key", generators.key().as_str())
            .with_context("period", period.to_string())
            .with_context("bound", bound.to_string())
            .with_context("residue", first_missing.to_string())
            .with_hint("raise apery_bound_factor"),
        ));
    }

    Ok(AperySet {
        period,
        representatives: representatives.into_iter().flatten().collect(),
    })
}
