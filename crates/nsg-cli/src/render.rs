use std::fmt::Write;
use std::time::Duration;

use nsg_core::angle_notation;
use nsg_search::{SearchMode, SearchReport, SemigroupRecord};

/// `<g1,...>` padded to 30 columns followed by the Apéry set.
pub fn apery_line(record: &SemigroupRecord) -> Option<String> {
    let apery = record.apery.as_ref()?;
    let generators = record.generators.to_string();
    let members: Vec<String> = apery.sorted().iter().map(u64::to_string).collect();
    Some(format!(
        "{generators:<30} | Ap({generators}, {}) = {{{}}}",
        apery.period,
        members.join(",")
    ))
}

fn parameters(mode: &SearchMode) -> String {
    match *mode {
        SearchMode::FixedFrobenius { frobenius } => format!("F={frobenius}"),
        SearchMode::FixedGenus { genus } => format!("g={genus}"),
        SearchMode::FixedGenusMultiplicity {
            genus,
            multiplicity,
        } => format!("m={multiplicity}, g={genus}"),
    }
}

fn listing<'a>(
    out: &mut String,
    title: &str,
    params: &str,
    records: impl Iterator<Item = &'a SemigroupRecord>,
) {
    let _ = writeln!(out, "{title} numerical semigroups ({params}):");
    for record in records {
        let _ = writeln!(out, "{}", angle_notation(record.generators.values()));
    }
}

/// Text summary printed after the search finishes.
pub fn summary(report: &SearchReport, elapsed: Duration) -> String {
    let params = parameters(&report.mode);
    let mut out = String::new();
    listing(&mut out, "Internal", &params, report.internal());
    out.push('\n');
    listing(&mut out, "Leaf", &params, report.leaves());
    out.push('\n');
    match report.mode {
        SearchMode::FixedFrobenius { .. } => {
            let _ = writeln!(
                out,
                "Total internal: {}   Total leaves: {}",
                report.summary.internal, report.summary.leaves
            );
        }
        SearchMode::FixedGenus { .. } | SearchMode::FixedGenusMultiplicity { .. } => {
            let _ = writeln!(out, "{}", report.summary.majority.sentence());
        }
    }
    let _ = writeln!(out, "Elapsed: {} s", elapsed.as_secs());
    out
}
