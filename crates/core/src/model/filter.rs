use crate::model::question::Question;

/// Label of the topic choice that shows every topic.
pub const ALL_TOPICS: &str = "All Topics";
/// Label of the level choice that shows every level.
pub const ALL_LEVELS: &str = "All Levels";

/// Exact-match filter over one question field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FieldFilter {
    #[default]
    All,
    Only(String),
}

impl FieldFilter {
    /// Interpret a selector label, where `all_label` stands for "no restriction".
    #[must_use]
    pub fn from_label(label: &str, all_label: &str) -> Self {
        if label == all_label {
            Self::All
        } else {
            Self::Only(label.to_owned())
        }
    }

    #[must_use]
    pub fn topic(label: &str) -> Self {
        Self::from_label(label, ALL_TOPICS)
    }

    #[must_use]
    pub fn level(label: &str) -> Self {
        Self::from_label(label, ALL_LEVELS)
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Label for a selector, the inverse of [`FieldFilter::from_label`].
    #[must_use]
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Self::All => all_label,
            Self::Only(value) => value,
        }
    }
}

/// Topic and level restrictions applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuestionFilter {
    pub topic: FieldFilter,
    pub level: FieldFilter,
}

impl QuestionFilter {
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        self.topic.matches(question.topic()) && self.level.matches(question.level())
    }
}

/// Selector values offered for a question set, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChoices {
    pub topics: Vec<String>,
    pub levels: Vec<String>,
}

impl FilterChoices {
    #[must_use]
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut choices = Self::default();
        for question in questions {
            push_unique(&mut choices.topics, question.topic());
            push_unique(&mut choices.levels, question.level());
        }
        choices
    }

    /// Topic labels including the leading "All Topics" entry.
    pub fn topic_labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL_TOPICS).chain(self.topics.iter().map(String::as_str))
    }

    /// Level labels including the leading "All Levels" entry.
    pub fn level_labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL_LEVELS).chain(self.levels.iter().map(String::as_str))
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_owned());
    }
}
