use crate::libs::block::{find_blocks, BlockReport};
use crate::libs::io::column_directive;
use crate::libs::select::{ColumnSelection, ResolvedBudget};
use itertools::Itertools;

/// What a selection run hands back to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionReport {
    pub budget: ResolvedBudget,
    /// Sorted
    pub columns_removed: Vec<usize>,
    /// Runlist of the retained columns
    pub columns_kept: String,
    pub blocks: BlockReport,
}

impl SelectionReport {
    pub fn new(budget: ResolvedBudget, selection: &ColumnSelection, max_blocks: usize) -> Self {
        let blocks = find_blocks(selection, max_blocks);
        if blocks.truncated {
            log::warn!(
                "More than {} blocks; the block count is a lower bound",
                max_blocks
            );
        }

        Self {
            budget,
            columns_removed: selection.removed(),
            columns_kept: selection.runlist(),
            blocks,
        }
    }

    pub fn number_of_blocks(&self) -> usize {
        self.blocks.number_of_blocks()
    }

    pub fn left_block_column(&self) -> i64 {
        self.blocks.left_column()
    }

    pub fn right_block_column(&self) -> i64 {
        self.blocks.right_column()
    }

    pub fn header() -> String {
        [
            "alignment_length",
            "columns_to_conserve",
            "columns_to_remove",
            "number_of_blocks",
            "left_block_column",
            "right_block_column",
            "columns_kept",
            "columns_removed",
            "truncated",
        ]
        .join("\t")
    }

    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.budget.alignment_length,
            self.budget.columns_to_conserve,
            self.budget.columns_to_remove,
            self.number_of_blocks(),
            self.left_block_column(),
            self.right_block_column(),
            self.columns_kept,
            self.columns_removed.iter().join(","),
            self.blocks.truncated,
        )
    }

    /// `{ i,j,k }` listing the removed columns
    pub fn directive(&self) -> String {
        column_directive(&self.columns_removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::select::{run_selection, Budget};

    #[test]
    fn report_fields() {
        let scores = vec![0.9, 0.1, 0.8, 0.7, 0.2, 0.95];
        let (budget, sel) = run_selection(&scores, &Budget::new(4, 0.5)).unwrap();
        let report = SelectionReport::new(budget, &sel, 0);

        assert_eq!(report.columns_removed, vec![1, 4]);
        assert_eq!(report.columns_kept, "0,2-3,5");
        assert_eq!(report.number_of_blocks(), 3);
        assert_eq!(report.left_block_column(), 2);
        assert_eq!(report.right_block_column(), 3);
        assert_eq!(report.directive(), "{ 1,4 }");
        assert_eq!(report.to_tsv(), "6\t4\t2\t3\t2\t3\t0,2-3,5\t1,4\tfalse");
        assert_eq!(
            SelectionReport::header().split('\t').count(),
            report.to_tsv().split('\t').count()
        );
    }

    #[test]
    fn report_truncated() {
        let scores = vec![0.9, 0.1, 0.8, 0.7, 0.2, 0.95];
        let (budget, sel) = run_selection(&scores, &Budget::new(4, 0.5)).unwrap();
        let report = SelectionReport::new(budget, &sel, 2);

        assert_eq!(report.number_of_blocks(), 2);
        assert!(report.to_tsv().ends_with("\t1,4\ttrue"));
    }
}
