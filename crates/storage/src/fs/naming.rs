//! File naming convention of the question store: `question_<digits>.json`.

pub const PREFIX: &str = "question_";
pub const EXTENSION: &str = ".json";

/// Returns the digit run of a question file name, or `None` if the name does
/// not follow the convention.
#[must_use]
pub fn question_number(file_name: &str) -> Option<&str> {
    let digits = file_name.strip_prefix(PREFIX)?.strip_suffix(EXTENSION)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

#[must_use]
pub fn is_question_file(file_name: &str) -> bool {
    question_number(file_name).is_some()
}

/// File name for question `number`, zero-padded to two digits.
#[must_use]
pub fn file_name_for(number: u32) -> String {
    format!("{PREFIX}{number:02}{EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefix_digits_and_extension_only() {
        assert_eq!(question_number("question_01.json"), Some("01"));
        assert_eq!(question_number("question_7.json"), Some("7"));
        assert!(!is_question_file("question_.json"));
        assert!(!is_question_file("question_01.JSON"));
        assert!(!is_question_file("question_1a.json"));
        assert!(!is_question_file("question_01.json.bak"));
        assert!(!is_question_file("notes.json"));
    }

    #[test]
    fn formats_two_digit_names() {
        assert_eq!(file_name_for(3), "question_03.json");
        assert_eq!(file_name_for(120), "question_120.json");
    }
}
