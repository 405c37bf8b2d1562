/// Aggregated view of quiz progress, useful for UI.
///
/// `total` counts every loaded question, not only the filtered ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
    pub score: usize,
    pub percentage: f64,
}

impl QuizProgress {
    #[must_use]
    pub fn new(answered: usize, total: usize, score: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let percentage = if total > 0 {
            answered as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            answered,
            total,
            score,
            percentage,
        }
    }

    /// `"Progress: {answered}/{total}"`
    #[must_use]
    pub fn progress_text(&self) -> String {
        format!("Progress: {}/{}", self.answered, self.total)
    }

    /// `"Score: {score}/{answered}"`; the denominator is 0 until something is answered.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Score: {}/{}", self.score, self.answered)
    }
}
