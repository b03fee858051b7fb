use serde::{Deserialize, Serialize};

use super::eval::map_visible;

/// A text-case transform applied to every cell of a row kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    /// Leave the text as it is.
    #[default]
    Default,
    /// `lower case`
    Lower,
    /// `Title Case` (first letter of every word upper-cased)
    Title,
    /// `UPPER CASE`
    Upper,
}

impl TextCase {
    /// Applies the transform to the visible parts of `text`.
    ///
    /// ```
    /// use biscuit_table::TextCase;
    ///
    /// assert_eq!(TextCase::Upper.apply("first name"), "FIRST NAME");
    /// assert_eq!(TextCase::Title.apply("first name"), "First Name");
    /// assert_eq!(TextCase::Default.apply("Mixed"), "Mixed");
    /// ```
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Default => text.to_string(),
            TextCase::Lower => map_visible(text, str::to_lowercase),
            TextCase::Upper => map_visible(text, str::to_uppercase),
            TextCase::Title => map_visible(text, title_case),
        }
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower() {
        assert_eq!(TextCase::Upper.apply("Salary"), "SALARY");
        assert_eq!(TextCase::Lower.apply("SaLaRy"), "salary");
    }

    #[test]
    fn title_keeps_inner_letters() {
        assert_eq!(TextCase::Title.apply("mcDonald farm\tyard"), "McDonald Farm\tYard");
    }

    #[test]
    fn escape_sequences_are_not_transformed() {
        assert_eq!(
            TextCase::Lower.apply("\x1b[1mBOLD\x1b[0m"),
            "\x1b[1mbold\x1b[0m"
        );
        // `m` terminators must survive upper-casing
        assert_eq!(
            TextCase::Upper.apply("\x1b[32mok\x1b[0m"),
            "\x1b[32mOK\x1b[0m"
        );
    }
}
