//! Numbered terminal menus for CLI applications.
//!
//! `oasis-input` asks a user to pick one entry from a numbered list. Menus
//! write and read through the [`TerminalIO`] trait, which has a real
//! stdin/stdout implementation and a scriptable mock for tests.
//!
//! # Quick Start
//!
//! ```
//! use oasis_input::{MenuChoice, MockTerminal, NumberedMenu};
//!
//! let menu = NumberedMenu::new("Dark Themes", ["oasis_ink", "oasis_night"])
//!     .prompt("Select night theme");
//!
//! let terminal = MockTerminal::with_response("2");
//! assert_eq!(menu.ask(&terminal).unwrap(), MenuChoice::Entry(1));
//! ```
//!
//! Answers are read once. Anything outside the offered range comes back as
//! [`MenuChoice::Invalid`]; re-prompting is left to the caller.

mod error;
mod menu;
mod terminal;

pub use error::InputError;
pub use menu::{parse_leading_int, MenuChoice, NumberedMenu};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};
