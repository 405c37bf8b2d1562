//! The single quiz page served at `/`.

/// Page markup with its stylesheet and script inlined.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
