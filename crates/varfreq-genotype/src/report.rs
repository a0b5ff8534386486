//! Report rendering for genotype-frequency results.
//! See ARCHITECTURE.md §4 — the layout is a presentation contract: global
//! cohort line first, separator, then the remaining populations in
//! lexicographic order.

use std::collections::HashMap;

/// Population key rendered first, as the labeled global line.
pub const GLOBAL_POPULATION: &str = "1000GENOMES:phase_3:ALL";

/// Fixed sentence rendered when no frequency could be computed.
pub const NO_DATA_MESSAGE: &str = "No genotype frequency data found for this variant.";

const SEPARATOR: &str = "----------------------------------------";

/// Render a population → frequency map as a multi-line report, with the
/// default global-population key.
pub fn render_report(frequencies: &HashMap<String, f64>) -> String {
    render_report_with_global(frequencies, GLOBAL_POPULATION)
}

/// Render with an explicit global-population key, for config-driven callers.
pub fn render_report_with_global(
    frequencies: &HashMap<String, f64>,
    global_population: &str,
) -> String {
    if frequencies.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut lines = Vec::new();

    if let Some(frequency) = frequencies.get(global_population) {
        lines.push(format!("Global population: {frequency:.4}"));
        lines.push(SEPARATOR.to_string());
    }

    // The global key is excluded from the lexicographic tail so it is never
    // rendered twice.
    let mut rest: Vec<&str> = frequencies
        .keys()
        .map(String::as_str)
        .filter(|name| *name != global_population)
        .collect();
    rest.sort_unstable();

    for name in rest {
        lines.push(format!("{name}: {:.4}", frequencies[name]));
    }

    lines.join("\n")
}
