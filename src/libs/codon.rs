use crate::libs::alignment::Alignment;
use crate::libs::error::{invalid, Result};
use crate::libs::select::ColumnSelection;

/// Start columns of codons made only of indeterminate symbols.
///
/// A codon qualifies when each of its three columns, ignoring gaps, holds nothing but
/// `indet` (case-insensitive). A column of gaps only does not qualify.
pub fn indet_codons(aln: &Alignment, gap: u8, indet: u8) -> Result<Vec<usize>> {
    if aln.len() % 3 != 0 {
        return Err(invalid(format!(
            "alignment length {} is not a multiple of 3",
            aln.len()
        )));
    }
    let indet = indet.to_ascii_uppercase();

    let only_indet = |col: usize| {
        let mut seen = false;
        for c in aln.column(col) {
            if c == gap {
                continue;
            }
            if c.to_ascii_uppercase() != indet {
                return false;
            }
            seen = true;
        }
        seen
    };

    Ok((0..aln.len())
        .step_by(3)
        .filter(|&pos| (pos..pos + 3).all(&only_indet))
        .collect())
}

/// Selection dropping the given codons, or keeping only them when `complementary`.
pub fn codon_selection(length: usize, codons: &[usize], complementary: bool) -> ColumnSelection {
    let columns: Vec<usize> = codons.iter().flat_map(|&pos| pos..pos + 3).collect();
    if complementary {
        ColumnSelection::from_retained(length, &columns)
    } else {
        ColumnSelection::from_removed(length, &columns)
    }
}
