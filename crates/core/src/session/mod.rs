mod progress;

use std::collections::HashMap;

use crate::model::{FieldFilter, FilterChoices, Question, QuestionFilter, QuestionId};

pub use progress::QuizProgress;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of [`QuizSession::select_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// First answer for this question; `correct` tells whether it scored.
    Recorded { correct: bool },
    /// The question already has an answer, which is kept.
    AlreadyAnswered,
    UnknownQuestion,
    /// The option index does not exist on the question.
    InvalidOption,
}

/// Explicit user decision required before a reset takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    Declined,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz state for one loaded question sequence.
///
/// The question list is fixed at construction. Answers are keyed by question id,
/// so they survive filter changes; `current` indexes the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    filter: QuestionFilter,
    current: usize,
    answers: HashMap<QuestionId, usize>,
    score: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            filter: QuestionFilter::default(),
            current: 0,
            answers: HashMap::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    #[must_use]
    pub fn filter_choices(&self) -> FilterChoices {
        FilterChoices::from_questions(&self.questions)
    }

    /// Questions passing the active filters, in load order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| self.filter.matches(question))
            .collect()
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| self.filter.matches(question))
            .count()
    }

    /// Position in the filtered list, clamped to 0 when it runs past the end.
    #[must_use]
    pub fn current_index(&self) -> usize {
        if self.current >= self.visible_len() {
            0
        } else {
            self.current
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.visible().get(self.current_index()).copied()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index() > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index() + 1 < self.visible_len()
    }

    /// Record the first answer for `question_id`.
    ///
    /// Later calls for the same id are no-ops, as are unknown ids and option
    /// indexes the question does not have.
    pub fn select_option(&mut self, option: usize, question_id: QuestionId) -> AnswerOutcome {
        if self.answers.contains_key(&question_id) {
            return AnswerOutcome::AlreadyAnswered;
        }
        let Some(question) = self.questions.iter().find(|q| q.id() == question_id) else {
            return AnswerOutcome::UnknownQuestion;
        };
        if option >= question.options().len() {
            return AnswerOutcome::InvalidOption;
        }

        let correct = question.is_correct(option);
        self.answers.insert(question_id, option);
        if correct {
            self.score += 1;
        }
        AnswerOutcome::Recorded { correct }
    }

    /// Move to the next visible question. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current = self.current_index() + 1;
        true
    }

    /// Move to the previous visible question. Returns `false` at the start.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current = self.current_index() - 1;
        true
    }

    pub fn set_topic_filter(&mut self, topic: FieldFilter) {
        self.filter.topic = topic;
        self.current = 0;
    }

    pub fn set_level_filter(&mut self, level: FieldFilter) {
        self.filter.level = level;
        self.current = 0;
    }

    /// Clear answers, score and position when confirmed. Filters are kept.
    ///
    /// Returns whether the reset happened.
    pub fn reset(&mut self, confirmation: ResetConfirmation) -> bool {
        if confirmation == ResetConfirmation::Declined {
            return false;
        }
        self.answers.clear();
        self.score = 0;
        self.current = 0;
        true
    }

    #[must_use]
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    /// The option recorded for `question_id`, if it was answered.
    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn answered_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.answers.keys().copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.answered_count(), self.questions.len(), self.score)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
