use crate::libs::error::{invalid, Result};
use crate::libs::score::validate_scores;
use std::cmp::Ordering;

/// Orders column indices ascending by score.
///
/// The lowest score is the least conserved column and the first candidate for removal.
/// Equal scores keep their original column order.
///
/// ```
/// let ranked = colsel::libs::select::rank_columns(&[0.5, 0.1, 0.5, 0.0]).unwrap();
/// assert_eq!(ranked, vec![3, 1, 0, 2]);
/// ```
pub fn rank_columns(scores: &[f64]) -> Result<Vec<usize>> {
    validate_scores(scores)?;

    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    // slice::sort_by is stable
    ranked.sort_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(Ordering::Equal)
    });

    Ok(ranked)
}

/// Retention policy: two competing floors on the number of columns to keep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Budget {
    /// Absolute floor
    pub min_columns: usize,
    /// Fractional floor, in `[0, 1]`
    pub min_percentage: f64,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            min_columns: 200,
            min_percentage: 0.4,
        }
    }
}

/// A budget turned into concrete column counts for one alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedBudget {
    pub alignment_length: usize,
    pub columns_to_conserve: usize,
    pub columns_to_remove: usize,
    /// `min_columns` asked for more columns than the alignment has
    pub clamped: bool,
}

impl Budget {
    pub fn new(min_columns: usize, min_percentage: f64) -> Self {
        Self {
            min_columns,
            min_percentage,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_percentage.is_finite() || !(0.0..=1.0).contains(&self.min_percentage) {
            return Err(invalid(format!(
                "min_percentage must be within [0, 1], got {}",
                self.min_percentage
            )));
        }
        Ok(())
    }

    /// Resolves the budget against an alignment of `length` columns.
    ///
    /// The percentage-based count wins only when it already reaches the absolute floor.
    /// Otherwise the absolute floor is used, clamped to the alignment length.
    ///
    /// ```
    /// use colsel::Budget;
    /// let budget = Budget::default();
    /// assert_eq!(budget.resolve(1000).unwrap().columns_to_conserve, 400);
    /// assert_eq!(budget.resolve(300).unwrap().columns_to_conserve, 200);
    /// assert_eq!(budget.resolve(100).unwrap().columns_to_conserve, 100);
    /// ```
    pub fn resolve(&self, length: usize) -> Result<ResolvedBudget> {
        self.validate()?;

        let by_percentage = self.min_percentage * length as f64;
        let mut clamped = false;
        let columns_to_conserve = if by_percentage >= self.min_columns as f64 {
            by_percentage.floor() as usize
        } else if self.min_columns > length {
            clamped = true;
            length
        } else {
            self.min_columns
        };
        let columns_to_remove = length.saturating_sub(columns_to_conserve);

        if clamped {
            log::warn!(
                "Requested {} columns but the alignment only has {}; keeping all",
                self.min_columns,
                length
            );
        }

        Ok(ResolvedBudget {
            alignment_length: length,
            columns_to_conserve,
            columns_to_remove,
            clamped,
        })
    }
}

/// Retained/removed partition of the columns `0..len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSelection {
    retained: Vec<bool>,
}

impl ColumnSelection {
    /// Out-of-range indices are ignored.
    pub fn from_retained(length: usize, retained: &[usize]) -> Self {
        let mut flags = vec![false; length];
        for &i in retained {
            if i < length {
                flags[i] = true;
            }
        }
        Self { retained: flags }
    }

    /// Out-of-range indices are ignored.
    pub fn from_removed(length: usize, removed: &[usize]) -> Self {
        let mut flags = vec![true; length];
        for &i in removed {
            if i < length {
                flags[i] = false;
            }
        }
        Self { retained: flags }
    }

    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { retained: flags }
    }

    /// Size of the column domain
    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    pub fn is_retained(&self, column: usize) -> bool {
        self.retained.get(column).copied().unwrap_or(false)
    }

    /// Sorted retained indices
    pub fn retained(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.retained[i]).collect()
    }

    /// Sorted removed indices
    pub fn removed(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| !self.retained[i]).collect()
    }

    pub fn num_retained(&self) -> usize {
        self.retained.iter().filter(|&&b| b).count()
    }

    pub fn num_removed(&self) -> usize {
        self.len() - self.num_retained()
    }

    pub fn complement(&self) -> Self {
        Self {
            retained: self.retained.iter().map(|b| !b).collect(),
        }
    }

    /// Retained columns as a runlist, e.g. `0-2,5-6,9`
    pub fn runlist(&self) -> String {
        let mut ints = intspan::IntSpan::new();
        for i in self.retained() {
            ints.add_n(i as i32);
        }
        ints.to_string()
    }
}

/// Marks the first `columns_to_remove` entries of `ranked` as removed.
///
/// ```
/// let sel = colsel::libs::select::select_columns(&[3, 1, 0, 2], 2);
/// assert_eq!(sel.removed(), vec![1, 3]);
/// assert_eq!(sel.retained(), vec![0, 2]);
/// ```
pub fn select_columns(ranked: &[usize], columns_to_remove: usize) -> ColumnSelection {
    let n = columns_to_remove.min(ranked.len());
    ColumnSelection::from_removed(ranked.len(), &ranked[..n])
}

/// Validate, rank, resolve the budget and select, in that order.
pub fn run_selection(
    scores: &[f64],
    budget: &Budget,
) -> Result<(ResolvedBudget, ColumnSelection)> {
    budget.validate()?;
    let ranked = rank_columns(scores)?;
    let resolved = budget.resolve(scores.len())?;
    log::debug!(
        "{} columns: conserve {}, remove {}",
        resolved.alignment_length,
        resolved.columns_to_conserve,
        resolved.columns_to_remove
    );
    let selection = select_columns(&ranked, resolved.columns_to_remove);

    Ok((resolved, selection))
}
