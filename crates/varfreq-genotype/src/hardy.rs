//! Hardy–Weinberg genotype-frequency computation.
//! See ARCHITECTURE.md §3 — p² homozygote and 2pq heterozygote terms,
//! restricted to the trusted cohort.

use std::collections::HashMap;

use varfreq_variation::models::VariantPopulationData;

/// Cohort whose population rows take part in the computation. The upstream
/// service mixes many cohort sources of uneven quality; only 1000 Genomes
/// rows are trusted for frequency estimation.
pub const COHORT_MARKER: &str = "1000GENOMES";

/// A two-allele genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genotype {
    pub allele1: char,
    pub allele2: char,
}

impl Genotype {
    /// Lenient reading: the first two characters of the input, `None` when
    /// fewer than two are present. This is the compatibility contract for
    /// existing callers; anything after the second character is ignored.
    pub fn lenient(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let allele1 = chars.next()?;
        let allele2 = chars.next()?;
        Some(Self { allele1, allele2 })
    }

    /// Strict reading for new callers: exactly two alphanumeric allele
    /// symbols, surrounding whitespace tolerated.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let trimmed = raw.trim();
        let well_formed = trimmed.chars().count() == 2
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        match Self::lenient(trimmed) {
            Some(genotype) if well_formed => Ok(genotype),
            _ => anyhow::bail!(
                "invalid genotype {:?}: expected two allele symbols, e.g. \"AG\"",
                raw
            ),
        }
    }

    pub fn is_homozygous(&self) -> bool {
        self.allele1 == self.allele2
    }
}

/// Expected genotype frequency per population under Hardy–Weinberg
/// equilibrium, restricted to the default trusted cohort.
///
/// Absent data, a genotype shorter than two characters, or an empty record
/// list all yield an empty map rather than an error.
pub fn genotype_frequencies(
    data: Option<&VariantPopulationData>,
    genotype: &str,
) -> HashMap<String, f64> {
    genotype_frequencies_in_cohort(data, genotype, COHORT_MARKER)
}

/// Same computation against an explicit cohort marker substring.
pub fn genotype_frequencies_in_cohort(
    data: Option<&VariantPopulationData>,
    genotype: &str,
    cohort_marker: &str,
) -> HashMap<String, f64> {
    let mut result = HashMap::new();

    let Some(data) = data else {
        return result;
    };
    let Some(genotype) = Genotype::lenient(genotype) else {
        return result;
    };

    // Regroup the denormalised rows into an allele → frequency map per
    // cohort population.
    let mut alleles_by_population: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
    for record in &data.populations {
        if !record.population.contains(cohort_marker) {
            continue;
        }
        alleles_by_population
            .entry(record.population.as_str())
            .or_default()
            .insert(record.allele.as_str(), record.frequency);
    }

    let allele1 = genotype.allele1.to_string();
    let allele2 = genotype.allele2.to_string();

    for (population, alleles) in alleles_by_population {
        // A population missing either allele is skipped: partial allele data
        // must not be computed against a zero default.
        let (Some(&f1), Some(&f2)) = (
            alleles.get(allele1.as_str()),
            alleles.get(allele2.as_str()),
        ) else {
            continue;
        };

        let frequency = if genotype.is_homozygous() {
            f1 * f1
        } else {
            2.0 * f1 * f2
        };
        result.insert(population.to_string(), frequency);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use varfreq_variation::models::PopulationAlleleRecord;

    fn data(rows: &[(&str, &str, f64)]) -> VariantPopulationData {
        VariantPopulationData {
            populations: rows
                .iter()
                .map(|(population, allele, frequency)| PopulationAlleleRecord {
                    population: population.to_string(),
                    allele: allele.to_string(),
                    frequency: *frequency,
                })
                .collect(),
            maf: None,
        }
    }

    #[test]
    fn test_heterozygote_is_2pq() {
        let data = data(&[
            ("1000GENOMES:phase_3:ALL", "A", 0.6),
            ("1000GENOMES:phase_3:ALL", "G", 0.4),
        ]);
        let freqs = genotype_frequencies(Some(&data), "AG");
        assert_eq!(freqs.len(), 1);
        assert!((freqs["1000GENOMES:phase_3:ALL"] - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_homozygote_is_p_squared() {
        let data = data(&[
            ("1000GENOMES:phase_3:ALL", "A", 0.6),
            ("1000GENOMES:phase_3:ALL", "G", 0.4),
        ]);
        let freqs = genotype_frequencies(Some(&data), "AA");
        assert!((freqs["1000GENOMES:phase_3:ALL"] - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_populations_outside_cohort_are_skipped() {
        let data = data(&[
            ("GNOMAD:ALL", "A", 0.6),
            ("GNOMAD:ALL", "G", 0.4),
            ("TOPMED:ALL", "A", 0.5),
        ]);
        assert!(genotype_frequencies(Some(&data), "AG").is_empty());
    }

    #[test]
    fn test_population_missing_one_allele_is_skipped() {
        let data = data(&[
            ("1000GENOMES:phase_3:EUR", "A", 0.5),
            ("1000GENOMES:phase_3:EUR", "G", 0.5),
            ("1000GENOMES:phase_3:AMR", "A", 0.9),
        ]);
        let freqs = genotype_frequencies(Some(&data), "AG");
        // AMR lacks G, so only EUR produces an entry.
        assert_eq!(freqs.len(), 1);
        assert!((freqs["1000GENOMES:phase_3:EUR"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_short_genotype_yields_empty_map() {
        let data = data(&[("1000GENOMES:phase_3:ALL", "A", 0.6)]);
        assert!(genotype_frequencies(Some(&data), "A").is_empty());
        assert!(genotype_frequencies(Some(&data), "").is_empty());
    }

    #[test]
    fn test_absent_data_yields_empty_map() {
        assert!(genotype_frequencies(None, "AG").is_empty());
        assert!(genotype_frequencies(Some(&data(&[])), "AG").is_empty());
    }

    #[test]
    fn test_extra_genotype_characters_are_ignored() {
        let data = data(&[
            ("1000GENOMES:phase_3:ALL", "A", 0.6),
            ("1000GENOMES:phase_3:ALL", "G", 0.4),
        ]);
        let freqs = genotype_frequencies(Some(&data), "AGT");
        assert!((freqs["1000GENOMES:phase_3:ALL"] - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let data = data(&[
            ("1000GENOMES:phase_3:ALL", "A", 0.6),
            ("1000GENOMES:phase_3:ALL", "G", 0.4),
            ("1000GENOMES:phase_3:EUR", "A", 0.7),
            ("1000GENOMES:phase_3:EUR", "G", 0.3),
        ]);
        let first = genotype_frequencies(Some(&data), "AG");
        let second = genotype_frequencies(Some(&data), "AG");
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_cohort_marker() {
        let data = data(&[
            ("GNOMAD:ALL", "A", 0.6),
            ("GNOMAD:ALL", "G", 0.4),
        ]);
        let freqs = genotype_frequencies_in_cohort(Some(&data), "AG", "GNOMAD");
        assert!((freqs["GNOMAD:ALL"] - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_strict_parse_accepts_two_symbols() {
        let genotype = Genotype::parse(" AG ").unwrap();
        assert_eq!(genotype.allele1, 'A');
        assert_eq!(genotype.allele2, 'G');
        assert!(!genotype.is_homozygous());
        assert!(Genotype::parse("AA").unwrap().is_homozygous());
    }

    #[test]
    fn test_strict_parse_rejects_malformed_input() {
        assert!(Genotype::parse("A").is_err());
        assert!(Genotype::parse("AGT").is_err());
        assert!(Genotype::parse("A/").is_err());
        assert!(Genotype::parse("").is_err());
    }
}
