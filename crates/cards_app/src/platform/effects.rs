use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use cards_core::{Contributor, Effect, LoadFailure, Msg};
use cards_engine::{ContributorRecord, EngineEvent, EngineHandle};
use cards_logging::{cards_debug, cards_error, cards_info, cards_warn};

use super::app::HostEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    effect_tx: mpsc::Sender<Effect>,
}

impl EffectRunner {
    pub fn spawn(engine: EngineHandle, event_tx: mpsc::Sender<HostEvent>) -> Self {
        let (effect_tx, effect_rx) = mpsc::channel();
        thread::spawn(move || run_loop(engine, effect_rx, event_tx));
        Self { effect_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::FetchContributors {
                    request_id,
                    organization,
                    repository,
                } => {
                    cards_info!(
                        "FetchContributors request_id={} repo={}/{}",
                        request_id,
                        organization,
                        repository
                    );
                }
            }
            let _ = self.effect_tx.send(effect);
        }
    }
}

fn run_loop(
    engine: EngineHandle,
    effect_rx: mpsc::Receiver<Effect>,
    event_tx: mpsc::Sender<HostEvent>,
) {
    loop {
        loop {
            match effect_rx.try_recv() {
                Ok(effect) => execute(&engine, effect),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    cards_debug!("Effect channel closed; stopping runner");
                    return;
                }
            }
        }
        if let Some(event) = engine.recv_timeout(POLL_INTERVAL) {
            if event_tx.send(HostEvent::Widget(map_event(event))).is_err() {
                return;
            }
        }
    }
}

fn execute(engine: &EngineHandle, effect: Effect) {
    match effect {
        Effect::FetchContributors {
            request_id,
            organization,
            repository,
        } => engine.fetch_contributors(request_id, organization, repository),
    }
}

/// Translates an engine completion into the core's vocabulary. Failures are
/// logged here, where the details are still available.
pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ContributorsFetched { request_id, result } => {
            let result = match result {
                Ok(records) => Ok(records.into_iter().map(to_contributor).collect()),
                Err(err) if err.is_malformed() => {
                    cards_warn!(
                        "Contributors response for request {} was not a list: {}",
                        request_id,
                        err.message
                    );
                    Err(LoadFailure::Malformed)
                }
                Err(err) => {
                    cards_error!("Contributors fetch {} failed: {}", request_id, err);
                    Err(LoadFailure::Transport)
                }
            };
            Msg::ContributorsLoaded { request_id, result }
        }
    }
}

fn to_contributor(record: ContributorRecord) -> Contributor {
    Contributor {
        login: record.login,
        profile_url: record.html_url,
        contributions: record.contributions,
    }
}
