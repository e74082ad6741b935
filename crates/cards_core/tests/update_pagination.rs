use cards_core::{update, AppState, Contributor, Effect, Msg, WidgetConfig, REVEAL_STEP};

fn loaded_state(page_size: usize, n: usize) -> AppState {
    let config = WidgetConfig::new("haxtheweb", "webcomponents").with_page_size(page_size);
    let (state, effects) = update(AppState::new(), Msg::ConfigChanged(config));
    let Some(Effect::FetchContributors { request_id, .. }) = effects.into_iter().next() else {
        panic!("expected fetch effect");
    };
    let contributors = (0..n)
        .map(|i| Contributor {
            login: format!("user{i}"),
            profile_url: format!("https://github.com/user{i}"),
            contributions: i as u64,
        })
        .collect();
    let (mut state, _) = update(
        state,
        Msg::ContributorsLoaded {
            request_id,
            result: Ok(contributors),
        },
    );
    assert!(state.consume_dirty());
    state
}

#[test]
fn three_contributors_fit_without_show_more() {
    let state = loaded_state(10, 3);
    let view = state.view();

    assert_eq!(view.cards.len(), 3);
    assert!(!view.show_more);
}

#[test]
fn fifteen_contributors_reveal_in_one_step() {
    let state = loaded_state(10, 15);
    let view = state.view();
    assert_eq!(view.cards.len(), 10);
    assert!(view.show_more);

    let (mut state, effects) = update(state, Msg::ShowMoreClicked);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.cards.len(), 15);
    assert!(!view.show_more);
}

#[test]
fn show_more_is_monotonic_and_capped() {
    for page_size in 1..=12 {
        for n in 0..=33 {
            let mut state = loaded_state(page_size, n);
            let mut previous = state.view().visible_count;
            for _ in 0..(n / REVEAL_STEP + 3) {
                let (next, _) = update(state, Msg::ShowMoreClicked);
                state = next;
                let visible = state.view().visible_count;
                assert!(visible >= previous);
                assert!(visible <= n);
                assert!(visible - previous <= REVEAL_STEP);
                previous = visible;
            }
            assert_eq!(previous, n);
        }
    }
}

#[test]
fn show_more_at_end_is_idempotent() {
    let state = loaded_state(10, 4);
    let (mut state, _) = update(state, Msg::ShowMoreClicked);

    assert_eq!(state.view().visible_count, 4);
    assert!(!state.consume_dirty());
}

#[test]
fn page_size_change_applies_to_next_fetch_only() {
    let state = loaded_state(10, 30);
    let (state, effects) = update(state, Msg::PageSizeChanged(2));
    assert!(effects.is_empty());
    assert_eq!(state.view().visible_count, 10);

    let (state, effects) = update(
        state,
        Msg::ConfigChanged(WidgetConfig::new("haxtheweb", "other").with_page_size(2)),
    );
    let Some(Effect::FetchContributors { request_id, .. }) = effects.into_iter().next() else {
        panic!("expected fetch effect");
    };
    let (state, _) = update(
        state,
        Msg::ContributorsLoaded {
            request_id,
            result: Ok(vec![
                Contributor {
                    login: "a".into(),
                    profile_url: "https://github.com/a".into(),
                    contributions: 3,
                },
                Contributor {
                    login: "b".into(),
                    profile_url: "https://github.com/b".into(),
                    contributions: 2,
                },
                Contributor {
                    login: "c".into(),
                    profile_url: "https://github.com/c".into(),
                    contributions: 1,
                },
            ]),
        },
    );
    assert_eq!(state.view().visible_count, 2);
    assert!(state.view().show_more);
}

#[test]
fn zero_page_size_is_ignored() {
    let state = loaded_state(10, 30);
    let (state, _) = update(state, Msg::PageSizeChanged(0));
    assert_eq!(state.config().page_size, 10);
}
