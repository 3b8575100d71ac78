//! Integration tests for oasis-input.
//!
//! Menus are driven through `MockTerminal` so the scripted answers and the
//! text shown to the user can both be checked.

use oasis_input::{InputError, MenuChoice, MockTerminal, NumberedMenu};

fn themes_menu() -> NumberedMenu {
    NumberedMenu::new("Dark Themes (recommended for night)", ["ink", "lagoon"])
        .extra("Use a light theme instead")
        .prompt("Select night theme")
}

// ============================================================================
// Test: one menu, several answers
// ============================================================================

#[test]
fn answers_are_classified_in_order() {
    let terminal = MockTerminal::with_responses(["2", "3", "4", "two"]);
    let menu = themes_menu();

    assert_eq!(menu.ask(&terminal).unwrap(), MenuChoice::Entry(1));
    assert_eq!(menu.ask(&terminal).unwrap(), MenuChoice::Extra);
    assert_eq!(menu.ask(&terminal).unwrap(), MenuChoice::Invalid(4));
    assert_eq!(menu.ask(&terminal).unwrap(), MenuChoice::Invalid(0));
    assert!(matches!(menu.ask(&terminal), Err(InputError::PromptCancelled)));
    assert_eq!(terminal.reads(), 5);
}

#[test]
fn menu_text_is_shown_before_each_read() {
    let terminal = MockTerminal::with_responses(["1", "1"]);
    let menu = themes_menu();

    menu.ask(&terminal).unwrap();
    menu.ask(&terminal).unwrap();

    assert_eq!(terminal.output(), menu.render().repeat(2));
}

// ============================================================================
// Test: two-level flow, as a caller would chain it
// ============================================================================

#[test]
fn extra_then_alternate_menu() {
    let terminal = MockTerminal::with_responses(["3", "1"]);
    let alternate = NumberedMenu::new("Light Themes", ["sand", "dawn"]).prompt("Select night theme");

    assert_eq!(themes_menu().ask(&terminal).unwrap(), MenuChoice::Extra);
    assert_eq!(alternate.ask(&terminal).unwrap(), MenuChoice::Entry(0));

    let shown = terminal.output();
    assert!(shown.contains("  3. Use a light theme instead\n"));
    assert!(shown.ends_with("\nLight Themes:\n  1. sand\n  2. dawn\n\nSelect night theme (1-2): "));
}

#[test]
fn answer_with_trailing_text_uses_leading_number() {
    let terminal = MockTerminal::with_response(" 1 please");
    assert_eq!(themes_menu().ask(&terminal).unwrap(), MenuChoice::Entry(0));
}
