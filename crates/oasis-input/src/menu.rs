//! Numbered menus.
//!
//! A [`NumberedMenu`] prints a titled, 1-based list of entries, optionally
//! followed by one extra trailing option, and reads a single numeric answer.
//! It never re-prompts: the answer is classified once as a [`MenuChoice`]
//! and the caller decides what an invalid answer means.
//!
//! ```text
//!
//! Light Themes (recommended for day):
//!   1. oasis_sand
//!   2. oasis_dawn
//!   3. Use a dark theme instead
//!
//! Select day theme (1-3):
//! ```

use std::fmt::Write as _;

use crate::terminal::TerminalIO;
use crate::InputError;

/// The outcome of a single menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// One of the listed entries, as a 0-based index.
    Entry(usize),
    /// The trailing extra option.
    Extra,
    /// A number outside the offered range (non-numeric input reads as 0).
    Invalid(i64),
}

/// A titled, numbered list with an optional trailing option.
#[derive(Debug, Clone)]
pub struct NumberedMenu {
    title: String,
    entries: Vec<String>,
    extra: Option<String>,
    prompt: String,
}

impl NumberedMenu {
    /// Create a menu with the given title and entry labels.
    pub fn new(
        title: impl Into<String>,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            entries: entries.into_iter().map(Into::into).collect(),
            extra: None,
            prompt: "Select".to_string(),
        }
    }

    /// Append an extra option numbered right after the last entry.
    pub fn extra(mut self, label: impl Into<String>) -> Self {
        self.extra = Some(label.into());
        self
    }

    /// Set the question shown before the accepted range.
    ///
    /// Default is `"Select"`.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Highest number the menu accepts.
    pub fn max_choice(&self) -> usize {
        self.entries.len() + usize::from(self.extra.is_some())
    }

    /// The menu text as written to the terminal, prompt included.
    pub fn render(&self) -> String {
        let mut out = format!("\n{}:\n", self.title);
        for (i, entry) in self.entries.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, entry);
        }
        if let Some(extra) = &self.extra {
            let _ = writeln!(out, "  {}. {}", self.entries.len() + 1, extra);
        }
        let _ = write!(out, "\n{} (1-{}): ", self.prompt, self.max_choice());
        out
    }

    /// Classify a numeric answer against this menu.
    pub fn classify(&self, choice: i64) -> MenuChoice {
        let len = self.entries.len() as i64;
        if (1..=len).contains(&choice) {
            MenuChoice::Entry((choice - 1) as usize)
        } else if self.extra.is_some() && choice == len + 1 {
            MenuChoice::Extra
        } else {
            MenuChoice::Invalid(choice)
        }
    }

    /// Show the menu and read one answer.
    ///
    /// Returns [`InputError::PromptCancelled`] on end of input.
    pub fn ask<T: TerminalIO>(&self, terminal: &T) -> Result<MenuChoice, InputError> {
        terminal.write(&self.render()).map_err(InputError::failed)?;

        let line = terminal.read_line().map_err(InputError::failed)?;
        if line.is_empty() {
            return Err(InputError::PromptCancelled);
        }

        Ok(self.classify(parse_leading_int(&line)))
    }
}

/// Parse the integer at the start of `input`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Input with no leading digits reads as 0. Values beyond
/// the `i64` range saturate.
pub fn parse_leading_int(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;
    use proptest::prelude::*;

    fn light_menu() -> NumberedMenu {
        NumberedMenu::new("Light Themes (recommended for day)", ["sand", "dawn"])
            .extra("Use a dark theme instead")
            .prompt("Select day theme")
    }

    // === parse_leading_int ===

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_leading_int("3"), 3);
        assert_eq!(parse_leading_int("3\n"), 3);
        assert_eq!(parse_leading_int("  12  "), 12);
        assert_eq!(parse_leading_int("+4"), 4);
        assert_eq!(parse_leading_int("-2"), -2);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("3abc"), 3);
        assert_eq!(parse_leading_int("1.5"), 1);
        assert_eq!(parse_leading_int("2 3"), 2);
    }

    #[test]
    fn non_numeric_reads_as_zero() {
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("\n"), 0);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("x1"), 0);
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999"), i64::MAX);
    }

    // === NumberedMenu ===

    #[test]
    fn render_lists_entries_extra_and_prompt() {
        let expected = "\nLight Themes (recommended for day):\n  1. sand\n  2. dawn\n  3. Use a dark theme instead\n\nSelect day theme (1-3): ";
        assert_eq!(light_menu().render(), expected);
    }

    #[test]
    fn render_without_extra() {
        let menu = NumberedMenu::new("Dark Themes", ["ink"]).prompt("Select day theme");
        assert_eq!(
            menu.render(),
            "\nDark Themes:\n  1. ink\n\nSelect day theme (1-1): "
        );
    }

    #[test]
    fn classify_entries_are_zero_based() {
        let menu = light_menu();
        assert_eq!(menu.classify(1), MenuChoice::Entry(0));
        assert_eq!(menu.classify(2), MenuChoice::Entry(1));
    }

    #[test]
    fn classify_extra_is_len_plus_one() {
        assert_eq!(light_menu().classify(3), MenuChoice::Extra);
    }

    #[test]
    fn classify_out_of_range() {
        let menu = light_menu();
        assert_eq!(menu.classify(0), MenuChoice::Invalid(0));
        assert_eq!(menu.classify(4), MenuChoice::Invalid(4));
        assert_eq!(menu.classify(-1), MenuChoice::Invalid(-1));
    }

    #[test]
    fn classify_without_extra_rejects_len_plus_one() {
        let menu = NumberedMenu::new("Dark Themes", ["ink", "coal"]);
        assert_eq!(menu.classify(3), MenuChoice::Invalid(3));
    }

    #[test]
    fn empty_menu_with_extra_only_offers_extra() {
        let menu = NumberedMenu::new("Light Themes", Vec::<String>::new()).extra("other");
        assert_eq!(menu.max_choice(), 1);
        assert_eq!(menu.classify(1), MenuChoice::Extra);
    }

    #[test]
    fn ask_writes_menu_and_reads_answer() {
        let terminal = MockTerminal::with_response("2");
        let choice = light_menu().ask(&terminal).unwrap();
        assert_eq!(choice, MenuChoice::Entry(1));
        assert_eq!(terminal.output(), light_menu().render());
    }

    #[test]
    fn ask_non_numeric_is_invalid_zero() {
        let terminal = MockTerminal::with_response("sand");
        let choice = light_menu().ask(&terminal).unwrap();
        assert_eq!(choice, MenuChoice::Invalid(0));
    }

    #[test]
    fn ask_empty_line_is_invalid_zero() {
        let terminal = MockTerminal::with_response("");
        let choice = light_menu().ask(&terminal).unwrap();
        assert_eq!(choice, MenuChoice::Invalid(0));
    }

    #[test]
    fn ask_eof_cancels() {
        let result = light_menu().ask(&MockTerminal::eof());
        assert!(matches!(result, Err(InputError::PromptCancelled)));
    }

    proptest! {
        #[test]
        fn formatted_integers_parse_back(n in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(parse_leading_int(&n.to_string()), n);
            prop_assert_eq!(parse_leading_int(&format!("  {}\n", n)), n);
        }

        #[test]
        fn letters_first_reads_as_zero(s in "[a-zA-Z][a-zA-Z0-9 ]{0,12}") {
            prop_assert_eq!(parse_leading_int(&s), 0);
        }

        #[test]
        fn every_answer_classifies_into_range(len in 0usize..20, choice in -5i64..30) {
            let menu = NumberedMenu::new("T", (0..len).map(|i| i.to_string())).extra("x");
            match menu.classify(choice) {
                MenuChoice::Entry(i) => prop_assert!(i < len),
                MenuChoice::Extra => prop_assert_eq!(choice, len as i64 + 1),
                MenuChoice::Invalid(v) => {
                    prop_assert_eq!(v, choice);
                    prop_assert!(choice < 1 || choice > len as i64 + 1);
                }
            }
        }
    }
}
