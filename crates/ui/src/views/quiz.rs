use dioxus::prelude::*;
use quiz_core::markup::{CodeBlock, Segment, Span};
use quiz_core::model::QuestionId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AnswerVm, FiltersVm, OptionVm, ProgressVm, QuestionCardVm, QuizIntent, QuizVm,
};

const NO_MATCH: &str = "No questions match the selected filters.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();

    let resource = use_resource(move || {
        let quiz = quiz.clone();
        async move {
            let session = quiz
                .start_session()
                .await
                .map_err(|_| ViewError::LoadFailed)?;
            Ok::<_, ViewError>(QuizVm::new(session))
        }
    });

    match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "no-questions", "Loading questions..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "no-questions", "{err.message()}" }
        },
        ViewState::Ready(vm) => rsx! { QuizPanel { initial: vm } },
    }
}

/// Interactive quiz over an already loaded session.
#[component]
pub fn QuizPanel(initial: QuizVm) -> Element {
    let mut vm = use_signal(|| initial);

    let (card, progress, filters, confirming_reset) = {
        let vm = vm.read();
        (vm.card(), vm.progress(), vm.filters(), vm.confirming_reset())
    };
    let on_intent = move |intent: QuizIntent| vm.write().apply(intent);

    rsx! {
        FilterBar { filters, on_intent }
        ProgressBar { progress }

        if let Some(card) = card {
            QuestionCard { card, on_intent }
        } else {
            div { class: "no-questions", "{NO_MATCH}" }
        }

        if confirming_reset {
            ResetConfirm { on_intent }
        }
    }
}

#[component]
fn FilterBar(filters: FiltersVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "filters",
            div { class: "filter-group",
                label { r#for: "topic-filter", "Topic" }
                select {
                    id: "topic-filter",
                    value: "{filters.selected_topic}",
                    onchange: move |evt| on_intent.call(QuizIntent::SetTopic(evt.value())),
                    for topic in filters.topics.clone() {
                        option {
                            key: "{topic}",
                            value: "{topic}",
                            selected: topic == filters.selected_topic,
                            "{topic}"
                        }
                    }
                }
            }
            div { class: "filter-group",
                label { r#for: "level-filter", "Level" }
                select {
                    id: "level-filter",
                    value: "{filters.selected_level}",
                    onchange: move |evt| on_intent.call(QuizIntent::SetLevel(evt.value())),
                    for level in filters.levels.clone() {
                        option {
                            key: "{level}",
                            value: "{level}",
                            selected: level == filters.selected_level,
                            "{level}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-info",
                span { "{progress.progress_text}" }
                span { "{progress.score_text}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{progress.fill_style()}" }
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let question_id = card.id;

    rsx! {
        div { class: "question-header",
            span { class: "question-number", "{card.position_label}" }
            span { class: "question-badge", "{card.badge}" }
        }
        div { class: "question-text", dangerous_inner_html: "{card.prompt_html}" }
        div { class: "options",
            for option in card.options.clone() {
                OptionButton { key: "{option.index}", option, question_id, on_intent }
            }
        }

        if let Some(answer) = card.answer.clone() {
            AnswerPanel { answer }
        }

        div { class: "navigation",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !card.can_previous,
                onclick: move |_| on_intent.call(QuizIntent::Previous),
                "Previous"
            }
            button {
                class: "btn btn-danger",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::RequestReset),
                "Reset Quiz"
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !card.can_next,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn OptionButton(
    option: OptionVm,
    question_id: QuestionId,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let index = option.index;
    let selectable = option.state.is_selectable();

    rsx! {
        div {
            class: option.state.class(),
            onclick: move |_| {
                if selectable {
                    on_intent.call(QuizIntent::Select { option: index, question_id });
                }
            },
            "{option.text}"
        }
    }
}

#[component]
fn AnswerPanel(answer: AnswerVm) -> Element {
    rsx! {
        div { class: "explanation",
            h3 { "{answer.verdict}" }
            div { class: "explanation-text",
                for (index, segment) in answer.explanation.iter().cloned().enumerate() {
                    SegmentBlock { key: "{index}", segment }
                }
            }
            div { class: "complexity",
                p {
                    strong { "Time Complexity: " }
                    "{answer.time_complexity}"
                }
                p {
                    strong { "Space Complexity: " }
                    "{answer.space_complexity}"
                }
            }
            if let Some(video) = answer.video.clone() {
                div { class: "video-link",
                    a { href: "{video.url}", target: "_blank", rel: "noopener", "{video.title}" }
                }
            }
        }
    }
}

#[component]
fn SegmentBlock(segment: Segment) -> Element {
    match segment {
        Segment::Text(spans) => rsx! {
            p {
                for (index, run) in spans.into_iter().enumerate() {
                    match run {
                        Span::Plain(text) => rsx! { span { key: "{index}", "{text}" } },
                        Span::Bold(text) => rsx! { strong { key: "{index}", "{text}" } },
                    }
                }
            }
        },
        Segment::Code(block) => rsx! { CodeBlockView { block } },
    }
}

#[component]
fn CodeBlockView(block: CodeBlock) -> Element {
    let class = block
        .language
        .as_deref()
        .map(|language| format!("language-{language}"))
        .unwrap_or_default();

    rsx! {
        pre { class: "code-block",
            code { class: "{class}", "{block.code}" }
        }
    }
}

#[component]
fn ResetConfirm(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "confirm", role: "alertdialog",
            p { "Are you sure you want to reset the quiz? All progress will be lost." }
            div { class: "confirm-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::CancelReset),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ConfirmReset),
                    "Reset"
                }
            }
        }
    }
}
