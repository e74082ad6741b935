use cards_logging::cards_debug;

use crate::{AppState, Effect, LoadFailure, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ConfigChanged(config) => {
            let retarget = !state.config().targets_same_repository(&config);
            if !state.replace_config(config) || !retarget {
                return (state, Vec::new());
            }
            state.mark_dirty();
            if !state.config().is_complete() {
                // Late results for the previous repository must not land under the new header.
                state.abandon_request();
                return (state, Vec::new());
            }
            let request_id = state.begin_request();
            vec![Effect::FetchContributors {
                request_id,
                organization: state.config().organization.clone(),
                repository: state.config().repository.clone(),
            }]
        }
        Msg::PageSizeChanged(page_size) => {
            state.set_page_size(page_size);
            Vec::new()
        }
        Msg::ShowMoreClicked => {
            state.reveal_more();
            Vec::new()
        }
        Msg::ContributorsLoaded { request_id, result } => {
            if !state.settle_request(request_id) {
                cards_debug!(
                    "Discarding stale contributors result request_id={} pending={:?}",
                    request_id,
                    state.pending_request()
                );
                return (state, Vec::new());
            }
            match result {
                Ok(contributors) => {
                    cards_debug!(
                        "Applying {} contributors for {} (request_id={})",
                        contributors.len(),
                        state.config().slug(),
                        request_id
                    );
                    state.replace_widget(contributors);
                }
                Err(LoadFailure::Transport | LoadFailure::Malformed) => {
                    state.reset_widget();
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}
