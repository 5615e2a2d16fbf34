// Score type and sentinels for move ranking.
pub type Score = i32;

/// Worse than any real score; the starting point when looking for a minimum.
pub const POS_INFINITY: Score = Score::MAX;
