use quiz_core::markup::Segment;
use quiz_core::model::{ALL_LEVELS, ALL_TOPICS, FieldFilter, Question, QuestionId};
use quiz_core::{AnswerOutcome, QuizSession, ResetConfirmation};

use crate::vm::sanitize_html;

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select { option: usize, question_id: QuestionId },
    Next,
    Previous,
    /// Selector label, `All Topics` included.
    SetTopic(String),
    SetLevel(String),
    RequestReset,
    ConfirmReset,
    CancelReset,
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Selectable,
    SelectedCorrect,
    SelectedIncorrect,
    CorrectAnswer,
    Disabled,
}

impl OptionState {
    #[must_use]
    pub fn for_option(question: &Question, chosen: Option<usize>, index: usize) -> Self {
        let Some(chosen) = chosen else {
            return Self::Selectable;
        };
        match (index == chosen, question.is_correct(index)) {
            (true, true) => Self::SelectedCorrect,
            (true, false) => Self::SelectedIncorrect,
            (false, true) => Self::CorrectAnswer,
            (false, false) => Self::Disabled,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Selectable => "option",
            Self::SelectedCorrect => "option disabled selected correct",
            Self::SelectedIncorrect => "option disabled selected incorrect",
            Self::CorrectAnswer => "option disabled correct-answer",
            Self::Disabled => "option disabled",
        }
    }

    #[must_use]
    pub fn is_selectable(self) -> bool {
        self == Self::Selectable
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoVm {
    pub url: String,
    pub title: String,
}

/// Shown once the current question has an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerVm {
    pub correct: bool,
    pub verdict: &'static str,
    pub explanation: Vec<Segment>,
    pub time_complexity: String,
    pub space_complexity: String,
    pub video: Option<VideoVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub position_label: String,
    pub badge: String,
    /// Prompt markup, already sanitized.
    pub prompt_html: String,
    pub options: Vec<OptionVm>,
    pub answer: Option<AnswerVm>,
    pub can_previous: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub progress_text: String,
    pub score_text: String,
    pub percentage: f64,
}

impl ProgressVm {
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {:.1}%", self.percentage)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiltersVm {
    pub topics: Vec<String>,
    pub levels: Vec<String>,
    pub selected_topic: String,
    pub selected_level: String,
}

#[must_use]
pub fn map_question_card(session: &QuizSession) -> Option<QuestionCardVm> {
    let question = session.current_question()?;
    let chosen = session.answer_for(question.id());

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            text: text.clone(),
            state: OptionState::for_option(question, chosen, index),
        })
        .collect();

    let answer = chosen.map(|chosen| {
        let correct = question.is_correct(chosen);
        AnswerVm {
            correct,
            verdict: if correct { "Correct!" } else { "Incorrect" },
            explanation: question.explanation_segments(),
            time_complexity: question.time_complexity().to_owned(),
            space_complexity: question.space_complexity().to_owned(),
            video: question.video().map(|video| VideoVm {
                url: video.url().to_string(),
                title: video.title().to_owned(),
            }),
        }
    });

    Some(QuestionCardVm {
        id: question.id(),
        position_label: format!(
            "Question {} of {}",
            session.current_index() + 1,
            session.visible_len()
        ),
        badge: format!("{} - {}", question.topic(), question.level()),
        prompt_html: sanitize_html(question.prompt()),
        options,
        answer,
        can_previous: session.has_previous(),
        can_next: session.has_next(),
    })
}

#[must_use]
pub fn map_progress(session: &QuizSession) -> ProgressVm {
    let progress = session.progress();
    ProgressVm {
        progress_text: progress.progress_text(),
        score_text: progress.score_text(),
        percentage: progress.percentage,
    }
}

#[must_use]
pub fn map_filters(session: &QuizSession) -> FiltersVm {
    let choices = session.filter_choices();
    let filter = session.filter();
    FiltersVm {
        topics: choices.topic_labels().map(str::to_owned).collect(),
        levels: choices.level_labels().map(str::to_owned).collect(),
        selected_topic: filter.topic.label(ALL_TOPICS).to_owned(),
        selected_level: filter.level.label(ALL_LEVELS).to_owned(),
    }
}

//
// ─── QUIZ VM ───────────────────────────────────────────────────────────────────
//

/// Owns the quiz session for one view and applies user intents to it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
    confirming_reset: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            confirming_reset: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn confirming_reset(&self) -> bool {
        self.confirming_reset
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.visible_len() == 0
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::Select {
                option,
                question_id,
            } => {
                let outcome = self.session.select_option(option, question_id);
                if !matches!(outcome, AnswerOutcome::Recorded { .. }) {
                    log::debug!("answer for question {question_id} ignored: {outcome:?}");
                }
            }
            QuizIntent::Next => {
                self.session.next();
            }
            QuizIntent::Previous => {
                self.session.previous();
            }
            QuizIntent::SetTopic(label) => self.session.set_topic_filter(FieldFilter::topic(&label)),
            QuizIntent::SetLevel(label) => self.session.set_level_filter(FieldFilter::level(&label)),
            QuizIntent::RequestReset => self.confirming_reset = true,
            QuizIntent::ConfirmReset => {
                self.session.reset(ResetConfirmation::Confirmed);
                self.confirming_reset = false;
            }
            QuizIntent::CancelReset => {
                self.session.reset(ResetConfirmation::Declined);
                self.confirming_reset = false;
            }
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<QuestionCardVm> {
        map_question_card(&self.session)
    }

    #[must_use]
    pub fn progress(&self) -> ProgressVm {
        map_progress(&self.session)
    }

    #[must_use]
    pub fn filters(&self) -> FiltersVm {
        map_filters(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionRecord;

    fn question(id: u64, topic: &str, level: &str, correct: i64) -> Question {
        QuestionRecord::new(id, topic, level, format!("Q{id}"), ["a", "b", "c"], correct)
            .with_explanation("Use **this**.\n```python\nx = 1\n```")
            .with_complexity("O(1)", "O(n)")
            .validate()
            .unwrap()
    }

    fn vm() -> QuizVm {
        QuizVm::new(QuizSession::new(vec![
            question(1, "Python", "General", 1),
            question(2, "Python", "Mid Level", 0),
            question(3, "Data Structures", "General", 2),
        ]))
    }

    #[test]
    fn unanswered_card_has_selectable_options_and_no_answer() {
        let card = vm().card().unwrap();
        assert_eq!(card.position_label, "Question 1 of 3");
        assert_eq!(card.badge, "Python - General");
        assert!(card.options.iter().all(|o| o.state == OptionState::Selectable));
        assert!(card.answer.is_none());
        assert!(!card.can_previous);
        assert!(card.can_next);
    }

    #[test]
    fn wrong_answer_marks_choice_and_reveals_correct_option() {
        let mut vm = vm();
        vm.apply(QuizIntent::Select {
            option: 0,
            question_id: QuestionId::new(1),
        });

        let card = vm.card().unwrap();
        let states: Vec<_> = card.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                OptionState::SelectedIncorrect,
                OptionState::CorrectAnswer,
                OptionState::Disabled
            ]
        );
        let answer = card.answer.unwrap();
        assert!(!answer.correct);
        assert_eq!(answer.verdict, "Incorrect");
        assert_eq!(answer.time_complexity, "O(1)");
        assert_eq!(answer.explanation.len(), 2);
        assert_eq!(vm.progress().score_text, "Score: 0/1");
    }

    #[test]
    fn correct_answer_scores_and_cannot_be_changed() {
        let mut vm = vm();
        let id = QuestionId::new(1);
        vm.apply(QuizIntent::Select { option: 1, question_id: id });
        vm.apply(QuizIntent::Select { option: 0, question_id: id });

        let card = vm.card().unwrap();
        assert_eq!(card.options[1].state, OptionState::SelectedCorrect);
        assert_eq!(card.answer.unwrap().verdict, "Correct!");
        let progress = vm.progress();
        assert_eq!(progress.progress_text, "Progress: 1/3");
        assert_eq!(progress.score_text, "Score: 1/1");
    }

    #[test]
    fn filter_intents_reset_position_and_update_labels() {
        let mut vm = vm();
        vm.apply(QuizIntent::Next);
        vm.apply(QuizIntent::SetTopic("Python".into()));

        assert_eq!(vm.session().current_index(), 0);
        let filters = vm.filters();
        assert_eq!(filters.selected_topic, "Python");
        assert_eq!(filters.selected_level, ALL_LEVELS);
        assert_eq!(filters.topics, vec![ALL_TOPICS, "Python", "Data Structures"]);
        assert_eq!(vm.card().unwrap().position_label, "Question 1 of 2");

        vm.apply(QuizIntent::SetLevel("Senior Level".into()));
        assert!(vm.is_empty());
        assert!(vm.card().is_none());

        vm.apply(QuizIntent::SetTopic(ALL_TOPICS.into()));
        vm.apply(QuizIntent::SetLevel(ALL_LEVELS.into()));
        assert_eq!(vm.card().unwrap().position_label, "Question 1 of 3");
    }

    #[test]
    fn reset_needs_confirmation() {
        let mut vm = vm();
        vm.apply(QuizIntent::Select {
            option: 1,
            question_id: QuestionId::new(1),
        });

        vm.apply(QuizIntent::RequestReset);
        assert!(vm.confirming_reset());
        vm.apply(QuizIntent::CancelReset);
        assert!(!vm.confirming_reset());
        assert_eq!(vm.session().answered_count(), 1);

        vm.apply(QuizIntent::RequestReset);
        vm.apply(QuizIntent::ConfirmReset);
        assert!(!vm.confirming_reset());
        assert_eq!(vm.session().answered_count(), 0);
        assert_eq!(vm.progress().score_text, "Score: 0/0");
    }

    #[test]
    fn fill_style_uses_answered_share_of_all_questions() {
        let mut vm = vm();
        vm.apply(QuizIntent::Select {
            option: 0,
            question_id: QuestionId::new(2),
        });
        assert_eq!(vm.progress().fill_style(), "width: 33.3%");
    }
}
