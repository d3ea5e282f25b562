//! Per-philosopher status shared through the table.

/// What a philosopher is doing, as seen by its neighbors.
///
/// Waiting for forks is not a separate status: a philosopher blocked in
/// acquisition is still `Thinking` from the table's point of view, because
/// it holds no fork.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhilosopherStatus {
    #[default]
    Thinking,
    Eating,
}

impl PhilosopherStatus {
    #[inline]
    pub fn is_eating(self) -> bool {
        matches!(self, PhilosopherStatus::Eating)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhilosopherStatus::Thinking => "thinking",
            PhilosopherStatus::Eating   => "eating",
        }
    }
}

impl std::fmt::Display for PhilosopherStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
