mod quiz;
mod state;

pub use quiz::{QuizPanel, QuizView};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
