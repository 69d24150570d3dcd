use crate::libs::error::{invalid, Result};
use crate::libs::select::ColumnSelection;
use indexmap::IndexMap;

/// Aligned sequences keyed by id, in input order. All sequences share one length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    seq_of: IndexMap<String, Vec<u8>>,
    // header text after the id, when there is any
    desc_of: IndexMap<String, String>,
    length: usize,
}

impl Alignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sequence. Duplicated ids and unequal lengths are rejected.
    pub fn push(&mut self, name: &str, seq: &[u8]) -> Result<()> {
        if self.seq_of.contains_key(name) {
            return Err(invalid(format!("duplicated sequence id '{}'", name)));
        }
        if !self.seq_of.is_empty() && seq.len() != self.length {
            return Err(invalid(format!(
                "sequence '{}' has {} columns, expected {}; is the input aligned?",
                name,
                seq.len(),
                self.length
            )));
        }
        self.length = seq.len();
        self.seq_of.insert(name.to_string(), seq.to_vec());
        Ok(())
    }

    /// Attaches the header description of an existing sequence.
    pub fn set_description(&mut self, name: &str, desc: &str) -> Result<()> {
        if !self.seq_of.contains_key(name) {
            return Err(invalid(format!("no sequence '{}'", name)));
        }
        if !desc.is_empty() {
            self.desc_of.insert(name.to_string(), desc.to_string());
        }
        Ok(())
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.desc_of.get(name).map(|s| s.as_str())
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.seq_of.is_empty()
    }

    pub fn num_seqs(&self) -> usize {
        self.seq_of.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.seq_of.keys().map(|k| k.as_str()).collect()
    }

    pub fn seq(&self, name: &str) -> Option<&[u8]> {
        self.seq_of.get(name).map(|s| s.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.seq_of.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn column(&self, i: usize) -> impl Iterator<Item = u8> + '_ {
        self.seq_of.values().map(move |s| s[i])
    }

    /// Number of `gap` symbols in every column
    pub fn gaps_in_column(&self, gap: u8) -> Vec<usize> {
        let mut gaps = vec![0; self.length];
        for seq in self.seq_of.values() {
            for (i, &c) in seq.iter().enumerate() {
                if c == gap {
                    gaps[i] += 1;
                }
            }
        }
        gaps
    }

    /// Gap counts averaged over a `2 * half_window + 1` window, mirrored at both ends
    /// and rounded to the nearest integer.
    ///
    /// `half_window` may not exceed a quarter of the alignment length.
    pub fn gaps_window(&self, gap: u8, half_window: usize) -> Result<Vec<usize>> {
        let gaps = self.gaps_in_column(gap);
        if half_window == 0 {
            return Ok(gaps);
        }
        let n = self.length;
        if half_window > n / 4 {
            return Err(invalid(format!(
                "half window {} is larger than a quarter of the alignment length {}",
                half_window, n
            )));
        }

        let window = (2 * half_window + 1) as f64;
        let hw = half_window as isize;
        let n_i = n as isize;
        let mut result = Vec::with_capacity(n);
        for i in 0..n_i {
            let mut sum = 0usize;
            for j in (i - hw)..=(i + hw) {
                let idx = if j < 0 {
                    -j
                } else if j >= n_i {
                    2 * n_i - j - 2
                } else {
                    j
                };
                sum += gaps[idx as usize];
            }
            result.push((sum as f64 / window).round() as usize);
        }

        Ok(result)
    }

    /// Per-column gap score, `1 - gaps / sequences`.
    pub fn gap_scores(&self, gap: u8, half_window: usize) -> Result<Vec<f64>> {
        if self.is_empty() || self.length == 0 {
            return Err(invalid("empty alignment"));
        }
        let nseq = self.num_seqs() as f64;
        Ok(self
            .gaps_window(gap, half_window)?
            .into_iter()
            .map(|g| 1.0 - g as f64 / nseq)
            .collect())
    }

    /// Total gaps over the number of cells, or -1 when there are none.
    pub fn average_gaps(&self, gap: u8) -> f64 {
        let cells = self.length * self.num_seqs();
        if cells == 0 {
            return -1.0;
        }
        let total: usize = self.gaps_in_column(gap).iter().sum();
        total as f64 / cells as f64
    }

    /// Mean pairwise identity, or -1 with fewer than two sequences.
    ///
    /// For each pair, positions where at least one side holds a residue count toward the
    /// common length; identical symbols there are hits.
    pub fn average_identity(&self, gap: u8, indet: u8) -> f64 {
        let seqs: Vec<&Vec<u8>> = self.seq_of.values().collect();
        if seqs.len() < 2 {
            return -1.0;
        }
        let is_residue = |c: u8| c != gap && c.to_ascii_uppercase() != indet;

        let mut sum = 0.0;
        let mut pairs = 0usize;
        for i in 0..seqs.len() {
            for j in (i + 1)..seqs.len() {
                let mut hit = 0usize;
                let mut dst = 0usize;
                for (&a, &b) in seqs[i].iter().zip(seqs[j].iter()) {
                    if is_residue(a) || is_residue(b) {
                        dst += 1;
                        if a.eq_ignore_ascii_case(&b) {
                            hit += 1;
                        }
                    }
                }
                if dst > 0 {
                    sum += hit as f64 / dst as f64;
                }
                pairs += 1;
            }
        }

        sum / pairs as f64
    }

    /// Is there a sequence made of gaps and indeterminations only?
    pub fn has_all_gaps_indets(&self, gap: u8, indet: u8) -> bool {
        self.seq_of.values().any(|seq| {
            seq.iter()
                .all(|&c| c == gap || c.to_ascii_uppercase() == indet)
        })
    }

    /// A new alignment holding only the retained columns.
    pub fn apply_selection(&self, selection: &ColumnSelection) -> Result<Alignment> {
        if selection.len() != self.length {
            return Err(invalid(format!(
                "selection covers {} columns, alignment has {}",
                selection.len(),
                self.length
            )));
        }
        let kept = selection.retained();

        let mut trimmed = Alignment::new();
        for (name, seq) in self.iter() {
            let new_seq: Vec<u8> = kept.iter().map(|&i| seq[i]).collect();
            trimmed.push(name, &new_seq)?;
        }
        trimmed.desc_of = self.desc_of.clone();
        Ok(trimmed)
    }
}
