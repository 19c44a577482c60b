use std::{fmt::Display, ops::Deref};

/// Whole percentage. Can go above 100, clamping is left to whoever displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percentage(u64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    /// `floor(value / whole * 100)`, or 0 when `whole` is 0.
    pub fn of(value: u64, whole: u64) -> Percentage {
        if whole == 0 {
            Percentage(0)
        } else {
            Percentage(value.saturating_mul(100) / whole)
        }
    }

    /// Value limited to `0..=100`, for progress bars.
    pub fn clamped(self) -> u64 {
        self.0.min(100)
    }
}

impl Deref for Percentage {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
