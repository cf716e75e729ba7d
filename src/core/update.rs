use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::AppState,
    core::textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators available to the pure update path
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function without a search bar editor
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Home messages (delegated to HomeState)
        Msg::Home(home_msg) => {
            let commands = state.home.update(home_msg, ctx.text_area);
            (state, commands)
        }

        // Feed messages (delegated to FeedState)
        Msg::Feed(feed_msg) => {
            let commands = state
                .feed
                .update(feed_msg, &state.config.config.catalog);
            (state, commands)
        }

        // Store publications replace the mirrored search state
        Msg::Search(search_msg) => {
            let commands = state.search.update(search_msg);
            (state, commands)
        }
    }
}
