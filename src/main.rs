//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the zwidgets library and the
//! Zellij plugin system. It maps key presses to library [`Event`]s, runs
//! [`handle_event`], executes the returned actions and renders the page.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the demo `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys to events, delegate to the library layer
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! - `Tab` / `Shift+Tab`: Next / previous widget
//! - Arrows: Move inside the focused widget
//! - `Enter`: Sort column, submit form (newline in the feedback box), pick preset
//! - `/`: Edit the focused column's filter (table)
//! - `Esc`: Leave the filter input
//! - `Ctrl+s`: Submit the form
//! - `Ctrl+q`, or `q` on the table: Close the plugin
//!
//! Built for any other target, the binary prints one frame of the demo page.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zwidgets::{handle_event, Action, AppState, Config, Event};

    /// Plugin state wrapper.
    ///
    /// `app` stays `None` only if the demo page failed to build, in which case
    /// the error is rendered instead of the page.
    #[derive(Default)]
    pub struct State {
        app: Option<AppState>,
        load_error: Option<String>,
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zwidgets::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(config = ?config, "parsed configuration");
            match zwidgets::initialize(&config) {
                Ok(app) => self.app = Some(app),
                Err(e) => {
                    tracing::error!(error = %e, "failed to build demo page");
                    self.load_error = Some(e.to_string());
                }
            }

            subscribe(&[EventType::Key]);
            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let zellij_tile::prelude::Event::Key(key) = event else {
                return false;
            };
            let Some(app) = self.app.as_mut() else {
                return false;
            };

            let span = tracing::debug_span!("plugin_update_event", key = ?key.bare_key);
            let _guard = span.entered();

            let Some(our_event) = map_key_event(&key) else {
                return false;
            };

            match handle_event(app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            match (&self.app, &self.load_error) {
                (Some(app), _) => zwidgets::ui::render(app, rows, cols),
                (None, Some(error)) => println!("zwidgets failed to load: {error}"),
                (None, None) => {}
            }
        }
    }

    /// Maps a key press to a library event.
    ///
    /// `Ctrl+s` is mapped to `Submit` here and consumed by the handler, so the
    /// key never reaches the host's own bindings.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let shift = key.has_modifiers(&[KeyModifier::Shift]);

        Some(match key.bare_key {
            BareKey::Char('s') if ctrl => Event::Submit,
            BareKey::Char('q' | 'c') if ctrl => Event::Quit,
            BareKey::Tab if shift => Event::PrevPanel,
            BareKey::Tab => Event::NextPanel,
            BareKey::Left => Event::Left,
            BareKey::Right => Event::Right,
            BareKey::Up => Event::Up,
            BareKey::Down => Event::Down,
            BareKey::Enter => Event::Enter,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::Escape,
            BareKey::Char(_) if ctrl => return None,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FormSubmitted(values) => {
                tracing::debug!(field_count = values.len(), "form submission delivered");
            }
            Action::DateSelected(range) => {
                tracing::debug!(range = ?range, "date selection delivered");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    const PREVIEW_ROWS: usize = 30;
    const PREVIEW_COLS: usize = 100;

    match zwidgets::initialize(&zwidgets::Config::default()) {
        Ok(state) => {
            print!("\u{1b}[2J");
            zwidgets::ui::render(&state, PREVIEW_ROWS, PREVIEW_COLS);
            println!("\u{1b}[{};1H", PREVIEW_ROWS + 1);
        }
        Err(e) => {
            eprintln!("zwidgets: {e}");
            std::process::exit(1);
        }
    }
}
