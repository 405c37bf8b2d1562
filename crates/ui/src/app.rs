use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizView;

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        style { "{STYLE}" }

        main { class: "container",
            h1 { "{ctx.window_title()}" }
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h2 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
        }
    }
}
