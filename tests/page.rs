use zwidgets::app::{handle_event, Event};
use zwidgets::date::DateRangeSelector;
use zwidgets::ui::helpers::{display_width, strip_ansi};
use zwidgets::ui::render_to_string;
use zwidgets::{initialize, AppState, Column, Config, Field, Form, Row, Table, Theme};

const ROWS: usize = 30;
const COLS: usize = 100;

fn page() -> AppState {
    initialize(&Config::default()).unwrap()
}

fn visible(state: &AppState) -> String {
    strip_ansi(&render_to_string(state, ROWS, COLS))
}

fn send(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

#[test]
fn demo_page_shows_all_three_widgets() {
    let text = visible(&page());

    for expected in [
        "Custom Table",
        "Custom Form",
        "Custom Date Picker",
        "Alice",
        "Bob",
        "Charlie",
        "Enter your name",
        "[ Submit ]",
        "[ Today ]",
        "[ Yesterday ]",
    ] {
        assert!(text.contains(expected), "missing {expected:?} in page");
    }
}

#[test]
fn sorted_rows_render_in_display_order() {
    let mut state = page();
    // Third column is age.
    send(&mut state, &[Event::Right, Event::Right, Event::Enter]);

    let text = visible(&state);
    let position = |name: &str| text.find(name).unwrap();
    assert!(position("Charlie") < position("Alice"));
    assert!(position("Alice") < position("Bob"));
}

#[test]
fn filtering_updates_the_section_title_and_rows() {
    let mut state = page();
    send(
        &mut state,
        &[Event::Right, Event::Char('/'), Event::Char('b'), Event::Escape],
    );

    let text = visible(&state);
    assert!(text.contains("Custom Table (1 of 3 rows)"));
    assert!(text.contains("Bob"));
    assert!(!text.contains("Alice"));
}

#[test]
fn emitted_values_appear_in_the_status_line() {
    let mut state = page();
    send(&mut state, &[Event::NextPanel, Event::Char('A'), Event::Char('l'), Event::Submit]);

    let text = visible(&state);
    assert!(text.contains(r#"Form Submitted: {"feedback":"","name":"Al","rating":""}"#));
}

#[test]
fn small_panes_still_render() {
    let state = page();
    let text = strip_ansi(&render_to_string(&state, 5, 20));
    assert!(!text.is_empty());
}

#[test]
fn wide_and_multiline_cells_stay_in_their_columns() {
    let table = Table::new(
        vec![Row::new().with("a", "日本語日本語日本語日本語").with("b", "x\ny")],
        vec![Column::new("a", "A"), Column::new("b", "B")],
    )
    .unwrap();
    let form = Form::new(vec![Field::text("name", "Name")]).unwrap();
    let state = AppState::new(table, form, DateRangeSelector::new(), Theme::default());

    let raw = render_to_string(&state, ROWS, 40);
    assert!(!raw.contains("x\ny"));

    let text = strip_ansi(&raw);
    let first_cell = " 日本語日本語日本語…";
    assert_eq!(display_width(first_cell), 20);
    assert!(text.contains(&format!("{first_cell} x y")));
}
