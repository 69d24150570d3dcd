use crate::libs::error::{invalid, Result, SelectError};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::BufRead;

lazy_static! {
    static ref RE_ANSI: Regex = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
}

/// Which per-column score drives the ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreMode {
    Gaps,
    Similarity,
    /// Product of gap and similarity scores
    Combined,
}

impl ScoreMode {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "gaps" => Ok(ScoreMode::Gaps),
            "similarity" => Ok(ScoreMode::Similarity),
            "combined" => Ok(ScoreMode::Combined),
            _ => Err(invalid(format!("unknown score mode '{}'", name))),
        }
    }

    pub fn needs_gaps(&self) -> bool {
        matches!(self, ScoreMode::Gaps | ScoreMode::Combined)
    }

    pub fn needs_similarity(&self) -> bool {
        matches!(self, ScoreMode::Similarity | ScoreMode::Combined)
    }
}

/// Scores must be non-empty and finite.
pub fn validate_scores(scores: &[f64]) -> Result<()> {
    if scores.is_empty() {
        return Err(invalid("empty score vector"));
    }
    if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
        return Err(invalid(format!(
            "non-finite score {} at column {}",
            scores[i], i
        )));
    }
    Ok(())
}

/// Element-wise product of gap and similarity scores.
///
/// ```
/// let combined = colsel::libs::score::combine_scores(&[0.5, 1.0], &[0.5, 0.2]).unwrap();
/// assert_eq!(combined, vec![0.25, 0.2]);
/// ```
pub fn combine_scores(gaps: &[f64], similarity: &[f64]) -> Result<Vec<f64>> {
    if gaps.len() != similarity.len() {
        return Err(SelectError::ScoreMismatch {
            gaps: gaps.len(),
            similarity: similarity.len(),
        });
    }
    validate_scores(gaps)?;
    validate_scores(similarity)?;

    Ok(gaps
        .iter()
        .zip(similarity.iter())
        .map(|(g, s)| g * s)
        .collect())
}

/// Picks the score vector for `mode`, combining when needed.
pub fn scores_for_mode(
    mode: ScoreMode,
    gaps: Option<&[f64]>,
    similarity: Option<&[f64]>,
) -> Result<Vec<f64>> {
    match (mode, gaps, similarity) {
        (ScoreMode::Gaps, Some(g), _) => {
            validate_scores(g)?;
            Ok(g.to_vec())
        }
        (ScoreMode::Similarity, _, Some(s)) => {
            validate_scores(s)?;
            Ok(s.to_vec())
        }
        (ScoreMode::Combined, Some(g), Some(s)) => combine_scores(g, s),
        _ => Err(invalid(format!("missing scores for mode {:?}", mode))),
    }
}

/// Parses a per-column score report.
///
/// Two layouts are accepted:
///
/// * Tabular reports: lines whose first field is the 0-based column number, the score
///   sitting in the 1-based `field`. Comment lines (`#`), headers and separators are
///   skipped. Column numbers must run consecutively from 0.
/// * Bare lists: one score per line.
///
/// Terminal colour escapes are stripped first.
pub fn parse_report<R: BufRead>(reader: R, field: usize) -> Result<Vec<f64>> {
    if field == 0 {
        return Err(invalid("score field is 1-based"));
    }

    let mut scores = vec![];
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| invalid(e.to_string()))?;
        let line = RE_ANSI.replace_all(&line, "");
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() == 1 {
            if fields[0].chars().all(|c| c == '-' || c == '=') {
                continue;
            }
            let value = fields[0].parse::<f64>().map_err(|_| {
                invalid(format!(
                    "line {}: cannot parse score '{}'",
                    lineno + 1,
                    fields[0]
                ))
            })?;
            scores.push(value);
            continue;
        }

        let column = match fields[0].parse::<usize>() {
            Ok(c) => c,
            Err(_) => continue, // headers
        };
        if column != scores.len() {
            return Err(invalid(format!(
                "line {}: expected column {}, found {}",
                lineno + 1,
                scores.len(),
                column
            )));
        }
        let value = fields.get(field - 1).ok_or_else(|| {
            invalid(format!(
                "line {}: no field {} in '{}'",
                lineno + 1,
                field,
                line
            ))
        })?;
        let value = value.parse::<f64>().map_err(|_| {
            invalid(format!(
                "line {}: cannot parse score '{}'",
                lineno + 1,
                value
            ))
        })?;
        scores.push(value);
    }

    Ok(scores)
}
