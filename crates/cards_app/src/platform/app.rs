use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context};
use cards_core::{update, AppState, Msg, WidgetConfig};
use cards_engine::{EngineHandle, PageWriter};
use cards_logging::{cards_debug, cards_error, cards_info, cards_warn};
use chrono::Utc;

use super::cli::Cli;
use super::commands::{parse_command, Command};
use super::config::{self, FileConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::avatar::AvatarRenderer;
use super::ui::render::{render_page, PageOptions};

/// Everything the host loop reacts to.
pub enum HostEvent {
    Widget(Msg),
    Command(Command),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.verbose);

    let file_config = match &cli.config {
        Some(path) => config::load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = config::resolve(&cli, file_config)?;
    cards_info!(
        "Contributor cards for {} (page size {}) -> {}",
        config.widget.slug(),
        config.widget.page_size,
        config.output.display()
    );

    let engine = EngineHandle::new(config.fetch.clone()).context("starting fetch engine")?;
    let page = PageWriter::new(config.output.clone()).context("preparing output page")?;
    let (event_tx, event_rx) = mpsc::channel();
    let runner = EffectRunner::spawn(engine, event_tx.clone());

    let mut host = Host {
        state: AppState::new(),
        runner,
        events: event_rx,
        page,
        avatar: config.avatar.build(config.avatar_module.clone()),
        renders: 0,
    };
    host.dispatch(Msg::ConfigChanged(config.widget));
    if host.renders == 0 {
        host.render();
    }

    if cli.interactive {
        spawn_stdin_reader(event_tx);
        host.run_interactive();
        Ok(())
    } else {
        drop(event_tx);
        host.run_once(cli.reveal)
    }
}

struct Host {
    state: AppState,
    runner: EffectRunner,
    events: mpsc::Receiver<HostEvent>,
    page: PageWriter,
    avatar: Box<dyn AvatarRenderer>,
    renders: u64,
}

impl Host {
    /// update -> effects -> render when dirty.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            self.render();
        }
    }

    fn render(&mut self) {
        let view = self.state.view();
        let options = PageOptions {
            generated_at: Some(Utc::now().to_rfc3339()),
        };
        let html = render_page(&view, self.avatar.as_ref(), &options);
        self.renders += 1;
        match self.page.write(&html) {
            Ok(path) => cards_debug!(
                "Render #{}: {} of {} contributors -> {}",
                self.renders,
                view.visible_count,
                view.total_count,
                path.display()
            ),
            Err(err) => cards_error!(
                "Failed to write page {}: {}",
                self.page.target().display(),
                err
            ),
        }
    }

    /// Waits for the initial fetch, applies `reveal` activations, and returns.
    fn run_once(mut self, reveal: usize) -> anyhow::Result<()> {
        while self.state.pending_request().is_some() {
            match self.events.recv() {
                Ok(HostEvent::Widget(msg)) => self.dispatch(msg),
                Ok(HostEvent::Command(_) | HostEvent::InputClosed) => {}
                Err(_) => bail!("fetch engine stopped before the contributors request completed"),
            }
        }
        for _ in 0..reveal {
            self.dispatch(Msg::ShowMoreClicked);
        }
        self.report();
        Ok(())
    }

    fn run_interactive(mut self) {
        self.report();
        while let Ok(event) = self.events.recv() {
            match event {
                HostEvent::Widget(msg) => {
                    let was_loading = self.state.pending_request().is_some();
                    self.dispatch(msg);
                    if was_loading && self.state.pending_request().is_none() {
                        self.report();
                    }
                }
                HostEvent::Command(command) => {
                    if !self.handle_command(command) {
                        break;
                    }
                }
                HostEvent::InputClosed => break,
            }
        }
        cards_info!("Interactive session ended after {} renders", self.renders);
    }

    /// Returns `false` when the session should end.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::More => {
                self.dispatch(Msg::ShowMoreClicked);
                self.report();
            }
            Command::Repo {
                organization,
                repository,
            } => self.retarget(|config| {
                config.organization = organization;
                config.repository = repository;
            }),
            Command::Org(organization) => {
                self.retarget(|config| config.organization = organization)
            }
            Command::Name(repository) => self.retarget(|config| config.repository = repository),
            Command::Limit(page_size) => self.dispatch(Msg::PageSizeChanged(page_size)),
            Command::Status => self.report(),
            Command::Quit => return false,
        }
        true
    }

    fn retarget(&mut self, edit: impl FnOnce(&mut WidgetConfig)) {
        let mut config = self.state.config().clone();
        edit(&mut config);
        self.dispatch(Msg::ConfigChanged(config));
        self.report();
    }

    fn report(&self) {
        let view = self.state.view();
        let mut line = format!(
            "{}: showing {} of {} contributors",
            view.repository_label, view.visible_count, view.total_count
        );
        if view.loading {
            line.push_str(" (loading)");
        } else if view.show_more {
            line.push_str(" (`more` reveals more)");
        }
        println!("{line}");
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if event_tx.send(HostEvent::Command(command)).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => cards_warn!("Ignoring input {:?}: {}", line, err),
            }
        }
        let _ = event_tx.send(HostEvent::InputClosed);
    });
}
