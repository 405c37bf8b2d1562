mod markup_vm;
mod quiz_vm;

pub use markup_vm::sanitize_html;
pub use quiz_vm::{
    AnswerVm, FiltersVm, OptionState, OptionVm, ProgressVm, QuestionCardVm, QuizIntent, QuizVm,
    VideoVm, map_filters, map_progress, map_question_card,
};
