use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{
            feed::FeedMsg,
            home::{HomeMsg, LongPress},
            search::SearchMsg,
            system::SystemMsg,
            Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::Focus,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus, overlay and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // Store publications are mirrored as-is
        RawMsg::SearchStateChanged(snapshot) => vec![Msg::Search(SearchMsg::Synced(snapshot))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // The overlay covers the whole screen and takes every other key
    if state.is_overlay_visible() {
        return translate_overlay_keys(key);
    }

    match state.home.focus {
        Focus::SearchBar => translate_search_bar_keys(key),
        Focus::Feed => translate_feed_keys(key, state),
    }
}

/// Keys that tap the dimming overlay
fn translate_overlay_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            vec![Msg::Home(HomeMsg::OverlayTapped)]
        }
        _ => vec![],
    }
}

/// Key bindings when the search bar has focus
fn translate_search_bar_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        // Clear button
        KeyCode::Esc => vec![Msg::Home(HomeMsg::CancelQuery { abort: true })],
        KeyCode::Tab => vec![Msg::Home(HomeMsg::ToggleFocus)],
        // Single-line input
        KeyCode::Enter => vec![],
        // Everything else is edited by the search bar itself
        _ => vec![Msg::Home(HomeMsg::SearchBarInput(key))],
    }
}

/// Key bindings when the feed has focus
fn translate_feed_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ToggleFocus => vec![Msg::Home(HomeMsg::ToggleFocus)],
        Action::FocusSearch => vec![Msg::Home(HomeMsg::FocusSearchBar)],
        Action::NextShelf => vec![Msg::Feed(FeedMsg::NextShelf)],
        Action::PrevShelf => vec![Msg::Feed(FeedMsg::PrevShelf)],
        Action::NextItem => vec![Msg::Feed(FeedMsg::NextItem)],
        Action::PrevItem => vec![Msg::Feed(FeedMsg::PrevItem)],
        Action::LongPress => translate_long_press(state),
        Action::ClearSearch => vec![Msg::Home(HomeMsg::CancelQuery { abort: true })],
    }
}

/// Long press on the selected item of the home feed
///
/// Items of the home feed can only be pressed while the feed is on screen,
/// which is the case as long as no search is pending.
fn translate_long_press(state: &AppState) -> Vec<Msg> {
    if state.home.pending_search {
        return vec![];
    }

    let shelf = state.feed.shelf;
    let index = state.feed.current_index();
    if index >= state.catalog().items(shelf).len() {
        return vec![];
    }

    vec![Msg::Home(HomeMsg::ItemLongPressed(LongPress { shelf, index }))]
}

/// Pasted text is appended to the query as a single line
fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    if state.is_overlay_visible() {
        return vec![];
    }

    let pasted: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    if pasted.is_empty() {
        return vec![];
    }

    let mut msgs = Vec::new();
    if state.home.focus != Focus::SearchBar {
        msgs.push(Msg::Home(HomeMsg::FocusSearchBar));
    }
    msgs.push(Msg::Home(HomeMsg::PerformSearch(format!(
        "{}{pasted}",
        state.home.query
    ))));
    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::core::state::search::SearchState;
    use crate::domain::catalog::{Catalog, MediaItem, Shelf};
    use crate::infrastructure::config::Config;
    use crate::presentation::config::keybindings::KeyBindings;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_state() -> AppState {
        let mut config = Config::default();

        let bindings = [
            (KeyCode::Char('q'), Action::Quit),
            (KeyCode::Char('/'), Action::FocusSearch),
            (KeyCode::Tab, Action::ToggleFocus),
            (KeyCode::Char('j'), Action::NextShelf),
            (KeyCode::Char('k'), Action::PrevShelf),
            (KeyCode::Char('l'), Action::NextItem),
            (KeyCode::Char('h'), Action::PrevItem),
            (KeyCode::Char('p'), Action::LongPress),
            (KeyCode::Esc, Action::ClearSearch),
        ];
        config.keybindings = KeyBindings(
            bindings
                .into_iter()
                .map(|(code, action)| (vec![key(code)], action))
                .collect(),
        );
        config.catalog = Catalog {
            popular_movies: vec![MediaItem::new(1, "Dune"), MediaItem::new(2, "Heat")],
            popular_tv: vec![MediaItem::new(3, "Dark")],
            ..Default::default()
        };
        config.capabilities.supports_overlay_blur = true;

        AppState::new_with_config(config)
    }

    fn feed_state() -> AppState {
        let mut state = create_test_state();
        state.home.focus = Focus::Feed;
        state
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        let result = translate_raw_to_domain(RawMsg::Quit, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let result = translate_raw_to_domain(RawMsg::Suspend, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Suspend)]);

        let result = translate_raw_to_domain(RawMsg::Resize(100, 50), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Resize(100, 50))]);

        let result = translate_raw_to_domain(RawMsg::Error("boom".into()), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::ShowError("boom".into()))]);
    }

    #[test]
    fn test_translate_global_keys() {
        for state in [create_test_state(), feed_state()] {
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            let result = translate_raw_to_domain(RawMsg::Key(ctrl_c), &state);
            assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

            let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
            let result = translate_raw_to_domain(RawMsg::Key(ctrl_z), &state);
            assert_eq!(result, vec![Msg::System(SystemMsg::Suspend)]);
        }
    }

    #[test]
    fn test_search_bar_keys() {
        let state = create_test_state();

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);
        assert_eq!(result, vec![Msg::Home(HomeMsg::CancelQuery { abort: true })]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Tab)), &state);
        assert_eq!(result, vec![Msg::Home(HomeMsg::ToggleFocus)]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state);
        assert!(result.is_empty());

        // Bound feed keys are plain text while typing
        let q = key(KeyCode::Char('q'));
        let result = translate_raw_to_domain(RawMsg::Key(q), &state);
        assert_eq!(result, vec![Msg::Home(HomeMsg::SearchBarInput(q))]);
    }

    #[test]
    fn test_clear_never_sends_abort_false() {
        let mut state = create_test_state();
        state.home.query = "dune".into();
        state.home.pending_search = true;

        let from_bar = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);
        state.home.focus = Focus::Feed;
        let from_feed = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);

        for msgs in [from_bar, from_feed] {
            assert_eq!(msgs, vec![Msg::Home(HomeMsg::CancelQuery { abort: true })]);
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    #[case(KeyCode::Char('/'), Msg::Home(HomeMsg::FocusSearchBar))]
    #[case(KeyCode::Tab, Msg::Home(HomeMsg::ToggleFocus))]
    #[case(KeyCode::Char('j'), Msg::Feed(FeedMsg::NextShelf))]
    #[case(KeyCode::Char('k'), Msg::Feed(FeedMsg::PrevShelf))]
    #[case(KeyCode::Char('l'), Msg::Feed(FeedMsg::NextItem))]
    #[case(KeyCode::Char('h'), Msg::Feed(FeedMsg::PrevItem))]
    fn test_feed_keybindings(#[case] code: KeyCode, #[case] expected: Msg) {
        let state = feed_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn test_feed_unknown_keys_ignored() {
        let state = feed_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('x'))), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_long_press_reports_selected_item() {
        let mut state = feed_state();
        state.feed.shelf = Shelf::PopularMovies;
        state.feed.selected.insert(Shelf::PopularMovies, 1);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('p'))), &state);

        assert_eq!(
            result,
            vec![Msg::Home(HomeMsg::ItemLongPressed(LongPress {
                shelf: Shelf::PopularMovies,
                index: 1,
            }))]
        );
    }

    #[test]
    fn test_long_press_ignored_while_feed_hidden() {
        let mut state = feed_state();
        state.home.query = "du".into();
        state.home.pending_search = true;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('p'))), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_long_press_ignored_on_empty_shelf() {
        let mut state = feed_state();
        state.feed.shelf = Shelf::Documentary;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('p'))), &state);
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(KeyCode::Enter)]
    #[case(KeyCode::Esc)]
    #[case(KeyCode::Char(' '))]
    fn test_overlay_keys_tap(#[case] code: KeyCode) {
        let mut state = feed_state();
        state.home.item_pressed = true;

        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![Msg::Home(HomeMsg::OverlayTapped)]);
    }

    #[test]
    fn test_overlay_swallows_other_keys() {
        let mut state = feed_state();
        state.home.item_pressed = true;

        for code in [KeyCode::Char('j'), KeyCode::Char('q'), KeyCode::Tab] {
            let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
            assert!(result.is_empty(), "{code:?} should be swallowed");
        }
    }

    #[test]
    fn test_pressed_item_without_overlay_capability_cannot_be_tapped() {
        let mut state = feed_state();
        state.config.config.capabilities.supports_overlay_blur = false;
        state.home.item_pressed = true;

        // The key reaches the feed bindings instead
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);
        assert_eq!(result, vec![Msg::Home(HomeMsg::CancelQuery { abort: true })]);
    }

    #[test]
    fn test_paste_appends_single_line() {
        let mut state = create_test_state();
        state.home.query = "blade ".into();
        state.home.pending_search = true;

        let result = translate_raw_to_domain(RawMsg::Paste("run\nner\r\n".into()), &state);
        assert_eq!(
            result,
            vec![Msg::Home(HomeMsg::PerformSearch("blade runner".into()))]
        );
    }

    #[test]
    fn test_paste_from_feed_focuses_search_bar() {
        let state = feed_state();

        let result = translate_raw_to_domain(RawMsg::Paste("heat".into()), &state);
        assert_eq!(
            result,
            vec![
                Msg::Home(HomeMsg::FocusSearchBar),
                Msg::Home(HomeMsg::PerformSearch("heat".into())),
            ]
        );
    }

    #[test]
    fn test_paste_of_newlines_only_is_ignored() {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Paste("\n\n".into()), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_store_publication_is_mirrored() {
        let state = create_test_state();
        let snapshot = SearchState {
            searching: true,
            has_results: false,
            search_results: vec![],
        };

        let result =
            translate_raw_to_domain(RawMsg::SearchStateChanged(snapshot.clone()), &state);
        assert_eq!(result, vec![Msg::Search(SearchMsg::Synced(snapshot))]);
    }

    #[test]
    fn test_translate_frequent_events_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
