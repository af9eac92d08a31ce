//! Per-player stone supply

use super::{COPIES_PER_VALUE, MAX_STONE_VALUE, MIN_STONE_VALUE};

const VALUE_KINDS: usize = (MAX_STONE_VALUE - MIN_STONE_VALUE + 1) as usize;

/// Remaining stones of one player, counted per value.
///
/// Starts at [`COPIES_PER_VALUE`] copies of every value in
/// `MIN_STONE_VALUE..=MAX_STONE_VALUE`. Counts only ever go down until the
/// whole inventory is replaced on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    counts: [u8; VALUE_KINDS],
}

impl Inventory {
    /// Full starting inventory
    pub const fn full() -> Self {
        Self {
            counts: [COPIES_PER_VALUE; VALUE_KINDS],
        }
    }

    #[inline]
    fn slot(value: u8) -> Option<usize> {
        if (MIN_STONE_VALUE..=MAX_STONE_VALUE).contains(&value) {
            Some((value - MIN_STONE_VALUE) as usize)
        } else {
            None
        }
    }

    /// Copies left of `value` (0 for values outside the stone range)
    #[inline]
    pub fn count(&self, value: u8) -> u8 {
        Self::slot(value).map_or(0, |i| self.counts[i])
    }

    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.count(value) > 0
    }

    /// Total stones left
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Distinct values with at least one copy left, ascending
    pub fn distinct_values(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_STONE_VALUE..=MAX_STONE_VALUE).filter(move |&v| self.contains(v))
    }

    /// Remove one copy of `value`. Returns `false` and leaves the inventory
    /// untouched when no copy is left.
    pub fn take(&mut self, value: u8) -> bool {
        match Self::slot(value) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::full()
    }
}
