//! Score band resolution and band-table validation

use crate::dataset::ScoreBand;
use crate::prelude::*;
use crate::types::LIKERT_MAX;

/// Highest achievable total for a questionnaire of `question_count` items
pub fn max_score(question_count: usize) -> u32 {
    u32::try_from(question_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(LIKERT_MAX))
}

/// Find the band whose inclusive range contains `score`
///
/// Falls back to the last band when nothing matches. Returns `None` only
/// for an empty slice.
pub fn resolve_band(bands: &[ScoreBand], score: u32) -> Option<&ScoreBand> {
    bands
        .iter()
        .find(|band| band.contains(score))
        .or_else(|| bands.last())
}

/// Check that bands partition `[0, max_score]` with no gaps or overlaps
pub fn validate_bands(bands: &[ScoreBand], max_score: u32) -> Result<()> {
    let Some(first) = bands.first() else {
        return Err(Error::dataset_invalid("no scoring bands defined"));
    };

    if first.min != 0 {
        return Err(Error::dataset_invalid(format!(
            "first band '{}' starts at {} instead of 0",
            first.level, first.min
        )));
    }

    for band in bands {
        if band.min > band.max {
            return Err(Error::dataset_invalid(format!(
                "band '{}' has min {} above max {}",
                band.level, band.min, band.max
            )));
        }
    }

    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min <= prev.max {
            return Err(Error::dataset_invalid(format!(
                "bands '{}' and '{}' overlap at {}",
                prev.level, next.level, next.min
            )));
        }
        if next.min != prev.max + 1 {
            return Err(Error::dataset_invalid(format!(
                "gap between '{}' and '{}': scores {}..={} are not covered",
                prev.level,
                next.level,
                prev.max + 1,
                next.min - 1
            )));
        }
    }

    // `first` exists, so `last` does too
    if let Some(last) = bands.last() {
        if last.max != max_score {
            return Err(Error::dataset_invalid(format!(
                "last band '{}' ends at {} but the maximum score is {}",
                last.level, last.max, max_score
            )));
        }
    }

    Ok(())
}

/// Non-empty, ordered band list
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: Vec<ScoreBand>,
}

impl BandTable {
    /// Build a table after checking it covers `[0, max_score]` exactly
    pub fn new(bands: Vec<ScoreBand>, max_score: u32) -> Result<Self> {
        validate_bands(&bands, max_score)?;
        Ok(Self { bands })
    }

    /// Build a table from bands known to be valid (the built-in dataset)
    pub(crate) fn new_unchecked(bands: Vec<ScoreBand>) -> Self {
        debug_assert!(!bands.is_empty());
        Self { bands }
    }

    pub fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    /// Band for `score`, or the last band when none contains it
    pub fn resolve(&self, score: u32) -> &ScoreBand {
        match resolve_band(&self.bands, score) {
            Some(band) => band,
            None => {
                // Unreachable for tables built through `new`
                warn!("Band table is empty; no band for score {}", score);
                &self.bands[0]
            }
        }
    }
}
