//! # Rotator Session
//!
//! A mounted tip rotator. [`RotatorHandle::spawn`] starts one tokio task that
//! exclusively owns the [`TipRotator`], the tip source, the RNG, the in-flight
//! fetch, the rotation interval and the transition timer. The task reacts to
//! one event at a time:
//!
//! - fetch resolution: store tips (or record the failure), arm rotation
//! - rotation tick: begin advancing to another tip
//! - transition deadline: commit the pending tip
//! - refresh command: advance, retry the fetch, or ignore while busy
//! - shutdown: exit
//!
//! Every state change is published as a [`TipView`] on a watch channel.
//!
//! ## Teardown
//!
//! Unmounting ends the task, and with it every timer and the pending fetch
//! future. The watch sender lives inside the task, so once it is gone
//! subscribers see a closed channel; a late timer or fetch has nothing left
//! to write to.

use std::future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, trace, warn};

use crate::config::RotatorConfig;
use crate::error::VivaError;
use crate::payload::TipsPayload;
use crate::rotator::{FetchOutcome, RefreshAction, TipRotator, TipView};
use crate::source::TipSource;
use crate::types::Tip;

type FetchFuture = BoxFuture<'static, Result<Vec<Tip>, VivaError>>;

#[derive(Debug)]
enum Command {
    Refresh,
}

/// Owner-side handle to a running rotator.
///
/// Dropping the handle aborts the session; prefer [`RotatorHandle::unmount`]
/// when the caller can await, since it returns only after the task is gone.
pub struct RotatorHandle {
    commands: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<TipView>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RotatorHandle {
    /// Mounts a rotator over `source` and starts the initial fetch.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn<S>(source: S, config: RotatorConfig) -> Self
    where
        S: TipSource + 'static,
    {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut rotator = TipRotator::new(config.fallback_tip.clone());
        rotator.begin_fetch();

        let (publisher, view) = watch::channel(rotator.view());
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (shutdown, shutdown_rx) = oneshot::channel();

        let session = Session {
            source: Arc::new(source),
            rotator,
            rng,
            rotation_interval: config.rotation_interval,
            transition_delay: config.transition_delay,
            publisher,
        };

        debug!(
            source = session.source.name(),
            rotation = ?config.rotation_interval,
            "Mounting tip rotator"
        );

        let task = tokio::spawn(session.run(command_rx, shutdown_rx));

        Self {
            commands,
            view,
            shutdown: Some(shutdown),
            task,
        }
    }

    /// Requests a manual refresh.
    ///
    /// The session ignores it while a fetch or transition is in progress.
    /// Returns `false` if the session is no longer running.
    pub fn refresh(&self) -> bool {
        self.commands.send(Command::Refresh).is_ok()
    }

    /// Latest published snapshot.
    pub fn view(&self) -> TipView {
        self.view.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<TipView> {
        self.view.clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the session and waits for its task to finish.
    pub async fn unmount(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(e) = (&mut self.task).await
            && !e.is_cancelled()
        {
            warn!("Tip rotator task ended abnormally: {}", e);
        }
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl std::fmt::Debug for RotatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatorHandle")
            .field("mounted", &self.is_mounted())
            .field("view", &*self.view.borrow())
            .finish()
    }
}

struct Session {
    source: Arc<dyn TipSource>,
    rotator: TipRotator,
    rng: StdRng,
    rotation_interval: Duration,
    transition_delay: Duration,
    publisher: watch::Sender<TipView>,
}

impl Session {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        let mut fetch: Option<FetchFuture> = Some(self.start_fetch());
        let mut rotation: Option<Interval> = None;
        let mut commit: Option<Pin<Box<Sleep>>> = None;

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    debug!("Tip rotator unmounted");
                    break;
                }

                command = commands.recv() => match command {
                    Some(Command::Refresh) => self.on_refresh(&mut fetch, &mut commit),
                    None => {
                        debug!("Tip rotator handle dropped");
                        break;
                    }
                },

                result = next_fetch(&mut fetch) => {
                    fetch = None;
                    let outcome = self.rotator.finish_fetch(result, &mut self.rng);
                    self.publish();
                    if let FetchOutcome::Loaded(_) = outcome {
                        // Replacing the interval drops the previous one.
                        rotation = Some(self.arm_rotation());
                    }
                }

                _ = next_commit(&mut commit) => {
                    commit = None;
                    self.rotator.commit_advance();
                    self.publish();
                }

                _ = next_tick(&mut rotation) => {
                    if self.rotator.is_transitioning() {
                        trace!("Rotation tick during transition; skipped");
                    } else {
                        self.advance(&mut commit);
                    }
                }
            }
        }
    }

    fn start_fetch(&self) -> FetchFuture {
        let source = Arc::clone(&self.source);
        Box::pin(async move {
            debug!(source = source.name(), "Requesting tips");
            source.fetch_tips().await.map(TipsPayload::into_tips)
        })
    }

    fn arm_rotation(&self) -> Interval {
        let period = self.rotation_interval;
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        trace!(?period, "Rotation armed");
        interval
    }

    fn advance(&mut self, commit: &mut Option<Pin<Box<Sleep>>>) {
        if self.rotator.begin_advance(&mut self.rng).is_some() {
            *commit = Some(Box::pin(time::sleep(self.transition_delay)));
            self.publish();
        }
    }

    fn on_refresh(&mut self, fetch: &mut Option<FetchFuture>, commit: &mut Option<Pin<Box<Sleep>>>) {
        match self.rotator.refresh_action() {
            RefreshAction::Ignored => trace!("Refresh ignored while busy"),
            RefreshAction::Advance => self.advance(commit),
            RefreshAction::Retry => {
                self.rotator.begin_fetch();
                *fetch = Some(self.start_fetch());
                self.publish();
            }
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.rotator.view());
    }
}

async fn next_fetch(fetch: &mut Option<FetchFuture>) -> Result<Vec<Tip>, VivaError> {
    match fetch {
        Some(pending) => pending.await,
        None => future::pending().await,
    }
}

async fn next_commit(commit: &mut Option<Pin<Box<Sleep>>>) {
    match commit {
        Some(sleep) => sleep.as_mut().await,
        None => future::pending().await,
    }
}

async fn next_tick(rotation: &mut Option<Interval>) {
    match rotation {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending().await,
    }
}
