//! Per-question answer slots and the values derived from them

use audit_core::LikertValue;

/// One slot per flattened question, each unset or holding `0..=5`
///
/// Empty while the flow is on the intro screen; sized to the question count
/// when the assessment starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<LikertValue>>,
}

impl AnswerSheet {
    /// An empty sheet (intro phase)
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet with `len` unset slots
    pub fn unset(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Drop every slot, returning to the intro-phase shape
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<LikertValue>] {
        &self.slots
    }

    /// Recorded value for `index`, if any
    pub fn get(&self, index: usize) -> Option<LikertValue> {
        self.slots.get(index).copied().flatten()
    }

    /// Record `value` for `index`, overwriting any previous answer
    ///
    /// Returns the previous value, or `None` when the slot was unset or the
    /// index is out of range (in which case nothing changes).
    pub fn set(&mut self, index: usize, value: LikertValue) -> Option<LikertValue> {
        self.slots
            .get_mut(index)
            .and_then(|slot| slot.replace(value))
    }

    /// Number of slots holding a value
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Sum of recorded values (unset slots count as zero)
    pub fn total_score(&self) -> u32 {
        self.slots
            .iter()
            .flatten()
            .map(|value| u32::from(value.get()))
            .sum()
    }

    /// Answered share of all slots, `0.0..=100.0`
    pub fn progress_percentage(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.answered_count() as f64 * 100.0 / self.slots.len() as f64
    }
}
