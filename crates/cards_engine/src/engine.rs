use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use cards_logging::cards_debug;

use crate::fetch::{ContributorSource, FetchSettings, GithubContributorSource};
use crate::{EngineEvent, FetchError, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchContributors {
        request_id: RequestId,
        organization: String,
        repository: String,
    },
}

/// Background fetch engine. Each command runs as its own task; events are
/// delivered in completion order, not submission order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let source = GithubContributorSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn ContributorSource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            cards_debug!("Engine command channel closed; shutting down runtime");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_contributors(
        &self,
        request_id: RequestId,
        organization: impl Into<String>,
        repository: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::FetchContributors {
            request_id,
            organization: organization.into(),
            repository: repository.into(),
        });
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn ContributorSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchContributors {
            request_id,
            organization,
            repository,
        } => {
            let result = source.fetch_contributors(&organization, &repository).await;
            let _ = event_tx.send(EngineEvent::ContributorsFetched { request_id, result });
        }
    }
}
