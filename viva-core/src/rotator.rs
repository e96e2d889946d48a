//! # Tip Rotator
//!
//! The state behind the sidebar's "tip of the day". A rotator holds the
//! fetched tips, the tip on display and the loading/error/transition flags,
//! and exposes each lifecycle step as an explicit transition:
//!
//! - [`TipRotator::begin_fetch`] / [`TipRotator::finish_fetch`]: the initial
//!   load (and the manual retry when nothing was loaded).
//! - [`TipRotator::begin_advance`] / [`TipRotator::commit_advance`]: swap to a
//!   different random tip across a transition window.
//! - [`TipRotator::refresh_action`]: what a manual refresh should do now.
//!
//! Nothing here sleeps or spawns. Timers live in
//! [`RotatorHandle`](crate::session::RotatorHandle), which drives these
//! transitions; randomness is passed in so tests can seed it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::error::VivaError;
use crate::types::{Tip, TipIcon};

/// User-facing message shown when the tips fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load tips. Using default.";

/// Result of applying a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Tips were stored; carries how many.
    Loaded(usize),
    /// The source answered with no tips; the fallback stays.
    Empty,
    /// The source could not be read; the fallback stays and `error` is set.
    Failed,
}

/// What a manual refresh should do given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshAction {
    /// A fetch or transition is in progress.
    Ignored,
    /// Tips are loaded; rotate to another one.
    Advance,
    /// Nothing is loaded; fetch again.
    Retry,
}

/// Immutable snapshot of a rotator, published to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipView {
    pub tip: Tip,
    pub icon: TipIcon,
    /// Position of `tip` in the fetched list, `None` while showing the fallback.
    pub index: Option<usize>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub transitioning: bool,
    /// When the displayed content last changed.
    pub updated_at: DateTime<Utc>,
    /// The whole fetched list, shared with the rotator.
    #[serde(skip)]
    pub tips: Arc<[Tip]>,
}

impl TipView {
    /// True while the fallback tip is on display.
    pub fn is_fallback(&self) -> bool {
        self.index.is_none()
    }
}

/// Tip rotation state for one sidebar.
#[derive(Debug, Clone)]
pub struct TipRotator {
    all_tips: Arc<[Tip]>,
    current_tip: Tip,
    current_index: Option<usize>,
    pending_index: Option<usize>,
    loading: bool,
    error: Option<String>,
    transitioning: bool,
    updated_at: DateTime<Utc>,
}

impl TipRotator {
    /// Creates an empty rotator showing `fallback`.
    pub fn new(fallback: Tip) -> Self {
        Self {
            all_tips: Arc::default(),
            current_tip: fallback,
            current_index: None,
            pending_index: None,
            loading: false,
            error: None,
            transitioning: false,
            updated_at: Utc::now(),
        }
    }

    pub fn all_tips(&self) -> &[Tip] {
        &self.all_tips
    }

    pub fn current_tip(&self) -> &Tip {
        &self.current_tip
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Icon for the tip on display. Recomputed on every call.
    pub fn icon(&self) -> TipIcon {
        self.current_tip.icon()
    }

    pub fn view(&self) -> TipView {
        TipView {
            tip: self.current_tip.clone(),
            icon: self.icon(),
            index: self.current_index,
            total: self.all_tips.len(),
            loading: self.loading,
            error: self.error.clone(),
            transitioning: self.transitioning,
            updated_at: self.updated_at,
            tips: Arc::clone(&self.all_tips),
        }
    }

    /// Marks a fetch as started and clears any previous error.
    pub fn begin_fetch(&mut self) {
        debug!("Fetching tips");
        self.loading = true;
        self.error = None;
    }

    /// Applies the result of a fetch. Always clears `loading`.
    pub fn finish_fetch<R: Rng>(
        &mut self,
        result: Result<Vec<Tip>, VivaError>,
        rng: &mut R,
    ) -> FetchOutcome {
        self.loading = false;

        match result {
            Ok(tips) if tips.is_empty() => {
                info!("No tips found; keeping the current tip");
                FetchOutcome::Empty
            }
            Ok(tips) => {
                let count = tips.len();
                let index = rng.gen_range(0..count);
                self.current_tip = tips[index].clone();
                self.current_index = Some(index);
                self.pending_index = None;
                self.transitioning = false;
                self.all_tips = Arc::from(tips);
                self.updated_at = Utc::now();
                info!(count, index, "Loaded tips");
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                warn!("Error fetching tips: {}", e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Picks the next tip and opens the transition window.
    ///
    /// Returns the chosen index, or `None` when no tips are loaded. The
    /// choice differs from the current index whenever more than one tip is
    /// loaded; repeats further back are allowed.
    pub fn begin_advance<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.all_tips.is_empty() {
            return None;
        }

        let index = pick_distinct(self.all_tips.len(), self.current_index, rng);
        trace!(from = ?self.current_index, to = index, "Advancing tip");
        self.pending_index = Some(index);
        self.transitioning = true;
        Some(index)
    }

    /// Closes the transition window, committing the pending tip if any.
    pub fn commit_advance(&mut self) {
        if let Some(index) = self.pending_index.take()
            && let Some(tip) = self.all_tips.get(index)
        {
            self.current_tip = tip.clone();
            self.current_index = Some(index);
            self.updated_at = Utc::now();
        }
        self.transitioning = false;
    }

    pub fn refresh_action(&self) -> RefreshAction {
        if self.loading || self.transitioning {
            RefreshAction::Ignored
        } else if self.all_tips.is_empty() {
            RefreshAction::Retry
        } else {
            RefreshAction::Advance
        }
    }
}

/// Uniform index in `0..len`, re-sampled until it differs from `current`
/// when there is anything else to choose.
fn pick_distinct<R: Rng>(len: usize, current: Option<usize>, rng: &mut R) -> usize {
    let mut index = rng.gen_range(0..len);
    if len > 1 {
        while Some(index) == current {
            index = rng.gen_range(0..len);
        }
    }
    index
}
