use crate::libs::select::ColumnSelection;
use std::fmt;

/// A maximal run of contiguous retained columns, both ends inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockReport {
    pub blocks: Vec<Block>,
    /// Scanning stopped at `max_blocks`; the count is a lower bound
    pub truncated: bool,
}

impl BlockReport {
    pub fn number_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// The largest block, earliest one on ties
    pub fn largest(&self) -> Option<&Block> {
        let mut best: Option<&Block> = None;
        for block in &self.blocks {
            match best {
                Some(b) if b.len() >= block.len() => {}
                _ => best = Some(block),
            }
        }
        best
    }

    /// First column of the largest block, or -1
    pub fn left_column(&self) -> i64 {
        self.largest().map_or(-1, |b| b.start as i64)
    }

    /// Last column of the largest block, or -1
    pub fn right_column(&self) -> i64 {
        self.largest().map_or(-1, |b| b.end as i64)
    }

    /// The `## key\tvalue` summary lines. `## Truncated` only shows up when the
    /// count was capped.
    pub fn boundaries(&self) -> String {
        let mut out = format!(
            "## Blocks\t{}\n## Left column\t{}\n## Right column\t{}\n",
            self.number_of_blocks(),
            self.left_column(),
            self.right_column()
        );
        if self.truncated {
            out.push_str("## Truncated\ttrue\n");
        }
        out
    }
}

/// Scans the retained columns for maximal contiguous runs.
///
/// Contiguity is on the original column numbering. Scanning stops once `max_blocks`
/// blocks have been found and another one starts; `0` means no cap.
///
/// ```
/// use colsel::{find_blocks, ColumnSelection};
/// let sel = ColumnSelection::from_retained(10, &[0, 1, 2, 5, 6, 9]);
/// let report = find_blocks(&sel, 0);
/// assert_eq!(report.number_of_blocks(), 3);
/// assert_eq!((report.left_column(), report.right_column()), (0, 2));
/// ```
pub fn find_blocks(selection: &ColumnSelection, max_blocks: usize) -> BlockReport {
    let mut report = BlockReport::default();
    let mut start: Option<usize> = None;

    for i in 0..selection.len() {
        match (selection.is_retained(i), start) {
            (true, None) => {
                if max_blocks > 0 && report.blocks.len() == max_blocks {
                    report.truncated = true;
                    log::debug!("Stopped at {} blocks, column {}", max_blocks, i);
                    return report;
                }
                start = Some(i);
            }
            (false, Some(s)) => {
                report.blocks.push(Block { start: s, end: i - 1 });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        report.blocks.push(Block {
            start: s,
            end: selection.len() - 1,
        });
    }

    report
}

/// Columns whose score reaches `min_score` are retained.
pub fn retained_by_score(scores: &[f64], min_score: f64) -> ColumnSelection {
    ColumnSelection::from_flags(scores.iter().map(|&s| s >= min_score).collect())
}
