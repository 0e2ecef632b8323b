//! Nucleic-acid sequence helpers.
//!
//! Sequences are validated against the canonical DNA alphabet before any
//! transformation. Case handling follows the historical behaviour of the
//! bootcamp exercises: an all-uppercase sequence stays uppercase, anything
//! else is normalised to lowercase.

/// Sequence validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Characters outside `ACGT` (either case), sorted and deduplicated.
    InvalidBases(Vec<char>),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::InvalidBases(chars) => {
                let listed: Vec<String> = chars.iter().map(|c| format!("'{}'", c)).collect();
                write!(f, "sequence contains invalid DNA characters: {}", listed.join(", "))
            }
        }
    }
}

impl std::error::Error for SequenceError {}

fn validate_dna(seq: &str) -> Result<(), SequenceError> {
    let mut invalid: Vec<char> = seq
        .chars()
        .filter(|c| !matches!(c, 'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't'))
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    invalid.sort_unstable();
    invalid.dedup();
    Err(SequenceError::InvalidBases(invalid))
}

fn normalized_dna(seq: &str) -> String {
    if seq.chars().all(|c| c.is_ascii_uppercase()) {
        seq.to_string()
    } else {
        seq.to_ascii_lowercase()
    }
}

/// Convert a DNA sequence to RNA by replacing thymine with uracil.
pub fn dna_to_rna(seq: &str) -> Result<String, SequenceError> {
    validate_dna(seq)?;
    let rna = normalized_dna(seq)
        .chars()
        .map(|c| match c {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect();
    Ok(rna)
}

/// Convert a DNA sequence into its reverse complement, expressed as RNA.
pub fn reverse_rna_complement(seq: &str) -> Result<String, SequenceError> {
    validate_dna(seq)?;
    let rna = normalized_dna(seq)
        .chars()
        .rev()
        .map(|c| match c {
            'A' => 'U',
            'C' => 'G',
            'G' => 'C',
            'T' => 'A',
            'a' => 'u',
            'c' => 'g',
            'g' => 'c',
            't' => 'a',
            other => other,
        })
        .collect();
    Ok(rna)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_to_rna_uppercase_stays_uppercase() {
        assert_eq!(dna_to_rna("GATTACA").unwrap(), "GAUUACA");
    }

    #[test]
    fn test_dna_to_rna_mixed_case_lowered() {
        assert_eq!(dna_to_rna("GaTTaCa").unwrap(), "gauuaca");
        assert_eq!(dna_to_rna("acgt").unwrap(), "acgu");
    }

    #[test]
    fn test_reverse_rna_complement() {
        // ACGT reversed = TGCA, complemented as RNA = ACGU
        assert_eq!(reverse_rna_complement("ACGT").unwrap(), "ACGU");
        assert_eq!(reverse_rna_complement("GATTACA").unwrap(), "UGUAAUC");
    }

    #[test]
    fn test_invalid_characters_reported_sorted() {
        let err = dna_to_rna("ACGX-Z").unwrap_err();
        assert_eq!(err, SequenceError::InvalidBases(vec!['-', 'X', 'Z']));
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        assert_eq!(dna_to_rna("").unwrap(), "");
        assert_eq!(reverse_rna_complement("").unwrap(), "");
    }
}
