//! Per-entry vote controller.
//!
//! ```text
//! unvoted → voting → voted
//!                  → unvoted (error kept, retry allowed)
//! ```
//!
//! Counters start from the entry's fetched values and are replaced by the
//! server's reply; they are never incremented locally. At most one request
//! is in flight per entry, and once a vote succeeds further votes are
//! ignored for the rest of the session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use faq_client::{VoteApi, VoteError};
use faq_core::entities::{Faq, VoteCounts};
use faq_core::enums::{VoteKind, VoteStatus};
use faq_core::responses::VoteSummary;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the post-vote acknowledgement stays visible.
pub const ACKNOWLEDGE_FOR: Duration = Duration::from_millis(700);

/// What a call to [`VoteController::vote`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The server accepted the vote; these are the counters now shown.
    Recorded { likes: u64, dislikes: u64 },
    /// The vote failed and may be retried.
    Failed(VoteError),
    /// A vote was already in flight or already recorded.
    Ignored,
}

impl VoteOutcome {
    /// # Errors
    ///
    /// Returns the [`VoteError`] of a failed vote.
    pub fn into_result(self) -> Result<bool, VoteError> {
        match self {
            Self::Recorded { .. } => Ok(true),
            Self::Ignored => Ok(false),
            Self::Failed(e) => Err(e),
        }
    }
}

#[derive(Debug)]
struct VoteState {
    likes: u64,
    dislikes: u64,
    status: VoteStatus,
    last_vote_type: Option<VoteKind>,
    vote_error: Option<VoteError>,
    acknowledged_at: Option<Instant>,
}

impl VoteState {
    /// Move to `Voting` if allowed. Returns `false` when the vote must be dropped.
    fn begin(&mut self) -> bool {
        if !self.status.can_transition_to(VoteStatus::Voting) {
            return false;
        }
        self.status = VoteStatus::Voting;
        self.vote_error = None;
        true
    }

    fn finish(&mut self, id: &str, kind: VoteKind, result: Result<VoteCounts, VoteError>) -> VoteOutcome {
        match result {
            Ok(counts) => {
                (self.likes, self.dislikes) = counts.apply(self.likes, self.dislikes);
                self.status = VoteStatus::Voted;
                self.last_vote_type = Some(kind);
                self.acknowledged_at = Some(Instant::now());
                tracing::debug!(id, %kind, likes = self.likes, dislikes = self.dislikes, "vote recorded");
                VoteOutcome::Recorded {
                    likes: self.likes,
                    dislikes: self.dislikes,
                }
            }
            Err(e) => {
                self.status = VoteStatus::Unvoted;
                self.vote_error = Some(e.clone());
                tracing::warn!(id, %kind, error = %e, "vote failed");
                VoteOutcome::Failed(e)
            }
        }
    }
}

/// Returns the state to `Unvoted` if a vote future is dropped mid-request.
struct InFlight<'a> {
    state: &'a Mutex<VoteState>,
    id: &'a str,
    kind: VoteKind,
    armed: bool,
}

impl<'a> InFlight<'a> {
    const fn new(state: &'a Mutex<VoteState>, id: &'a str, kind: VoteKind) -> Self {
        Self {
            state,
            id,
            kind,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.status == VoteStatus::Voting {
            state.status = VoteStatus::Unvoted;
            tracing::debug!(id = self.id, kind = %self.kind, "vote cancelled before the server answered");
        }
    }
}

/// Vote state for one FAQ entry. Clones share the same state.
#[derive(Debug)]
pub struct VoteController<A> {
    id: String,
    api: Arc<A>,
    state: Arc<Mutex<VoteState>>,
}

impl<A> Clone for VoteController<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: VoteApi> VoteController<A> {
    /// Seed a controller from a fetched entry.
    #[must_use]
    pub fn new(faq: &Faq, api: Arc<A>) -> Self {
        Self::with_counts(&faq.id, faq.likes, faq.dislikes, api)
    }

    #[must_use]
    pub fn with_counts(id: &str, likes: u64, dislikes: u64, api: Arc<A>) -> Self {
        Self {
            id: id.to_string(),
            api,
            state: Arc::new(Mutex::new(VoteState {
                likes,
                dislikes,
                status: VoteStatus::Unvoted,
                last_vote_type: None,
                vote_error: None,
                acknowledged_at: None,
            })),
        }
    }

    /// Cast a vote and wait for the server.
    ///
    /// Ignored while a vote is in flight or after one was recorded.
    pub async fn vote(&self, kind: VoteKind) -> VoteOutcome {
        if !self.lock().begin() {
            tracing::debug!(id = %self.id, %kind, "vote ignored");
            return VoteOutcome::Ignored;
        }

        let guard = InFlight::new(&self.state, &self.id, kind);
        let result = self.api.cast_vote(&self.id, kind).await;
        guard.disarm();
        self.lock().finish(&self.id, kind, result)
    }

    /// Cast a vote on the runtime without waiting.
    ///
    /// The task holds only a weak reference to the state: if every handle
    /// to this controller is gone when the server answers, the reply is
    /// discarded and the task yields `None`. Returns `None` immediately when
    /// the vote is ignored.
    pub fn spawn_vote(&self, kind: VoteKind) -> Option<JoinHandle<Option<VoteOutcome>>>
    where
        A: 'static,
    {
        if !self.lock().begin() {
            tracing::debug!(id = %self.id, %kind, "vote ignored");
            return None;
        }

        let state: Weak<Mutex<VoteState>> = Arc::downgrade(&self.state);
        let api = Arc::clone(&self.api);
        let id = self.id.clone();

        Some(tokio::spawn(async move {
            let result = api.cast_vote(&id, kind).await;
            let Some(state) = state.upgrade() else {
                tracing::debug!(id, %kind, "vote resolved after its view was dropped; discarding");
                return None;
            };
            let outcome = state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .finish(&id, kind, result);
            Some(outcome)
        }))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn likes_count(&self) -> u64 {
        self.lock().likes
    }

    #[must_use]
    pub fn dislikes_count(&self) -> u64 {
        self.lock().dislikes
    }

    #[must_use]
    pub fn status(&self) -> VoteStatus {
        self.lock().status
    }

    #[must_use]
    pub fn has_voted(&self) -> bool {
        self.status() == VoteStatus::Voted
    }

    #[must_use]
    pub fn is_voting(&self) -> bool {
        self.status() == VoteStatus::Voting
    }

    #[must_use]
    pub fn last_vote_type(&self) -> Option<VoteKind> {
        self.lock().last_vote_type
    }

    #[must_use]
    pub fn vote_error(&self) -> Option<VoteError> {
        self.lock().vote_error.clone()
    }

    /// Hide the last error message.
    pub fn dismiss_error(&self) {
        self.lock().vote_error = None;
    }

    /// Whether the acknowledgement after a successful vote is still showing.
    #[must_use]
    pub fn is_acknowledging(&self) -> bool {
        self.lock()
            .acknowledged_at
            .is_some_and(|at| at.elapsed() < ACKNOWLEDGE_FOR)
    }

    #[must_use]
    pub fn summary(&self) -> VoteSummary {
        let state = self.lock();
        VoteSummary {
            id: self.id.clone(),
            likes_count: state.likes,
            dislikes_count: state.dislikes,
            status: state.status,
            has_voted: state.status == VoteStatus::Voted,
            last_vote_type: state.last_vote_type,
            vote_error: state.vote_error.as_ref().map(ToString::to_string),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VoteState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
