//! Pattern scores for Gomoku evaluation

/// Scoring weights
pub struct PatternScore;

impl PatternScore {
    /// Decided game. Dominates any heuristic total, which stays below 750_000
    /// even for a board filled with one color.
    pub const WIN: i32 = 1_000_000;

    /// Each all-same-color window of length 4
    pub const FOUR: i32 = 1_000;
    /// Each all-same-color window of length 3
    pub const THREE: i32 = 100;
    /// Each all-same-color window of length 2
    pub const TWO: i32 = 10;
}

/// (window length, weight) pairs summed by the evaluator
pub const WINDOW_WEIGHTS: [(usize, i32); 3] = [
    (2, PatternScore::TWO),
    (3, PatternScore::THREE),
    (4, PatternScore::FOUR),
];

/// Score contributed by one maximal run of `len` stones.
///
/// A run of length r contains r - L + 1 windows of length L, so this equals
/// counting every window inside the run.
#[inline]
pub fn run_score(len: usize) -> i32 {
    WINDOW_WEIGHTS
        .iter()
        .filter(|&&(window, _)| len >= window)
        .map(|&(window, weight)| (len - window + 1) as i32 * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_scores() {
        assert_eq!(run_score(0), 0);
        assert_eq!(run_score(1), 0);
        assert_eq!(run_score(2), 10);
        assert_eq!(run_score(3), 2 * 10 + 100);
        assert_eq!(run_score(4), 3 * 10 + 2 * 100 + 1_000);
        assert_eq!(run_score(5), 4 * 10 + 3 * 100 + 2 * 1_000);
    }

    #[test]
    fn test_weights_ordered() {
        assert!(PatternScore::TWO < PatternScore::THREE);
        assert!(PatternScore::THREE < PatternScore::FOUR);
        assert!(PatternScore::FOUR < PatternScore::WIN);
    }
}
