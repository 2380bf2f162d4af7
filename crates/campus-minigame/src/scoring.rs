//! Scoring strategies: a minigame's terminal lives mapped to points.

/// Computes the score of a won run from the lives left at the end.
pub trait ScoringStrategy {
    fn calculate(&self, remaining_lives: u32) -> u32;
}

impl<F> ScoringStrategy for F
where
    F: Fn(u32) -> u32,
{
    fn calculate(&self, remaining_lives: u32) -> u32 {
        self(remaining_lives)
    }
}

/// A fixed number of points per life left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeScoring {
    pub points_per_life: u32,
}

impl Default for LifeScoring {
    fn default() -> Self {
        Self { points_per_life: 20 }
    }
}

impl ScoringStrategy for LifeScoring {
    fn calculate(&self, remaining_lives: u32) -> u32 {
        remaining_lives.saturating_mul(self.points_per_life)
    }
}

/// The same award for any run that ends with a life left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatScoring {
    pub points: u32,
}

impl ScoringStrategy for FlatScoring {
    fn calculate(&self, remaining_lives: u32) -> u32 {
        if remaining_lives > 0 { self.points } else { 0 }
    }
}
