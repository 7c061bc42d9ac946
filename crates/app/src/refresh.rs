//! Refresh generations: discard package lists that arrive out of order.
//!
//! Every refresh takes a [`Ticket`] before it fetches. A list that arrives
//! is rendered only if no refresh that started later has been rendered
//! already, so the table ends on the newest *successful* refresh. A failed
//! refresh never settles its ticket and does not hide an older success.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::presenter::PackageRow;

/// Shared generation counters. Clones observe the same counters.
#[derive(Debug, Clone, Default)]
pub struct RefreshGenerations {
    started: Arc<AtomicU64>,
    settled: Arc<AtomicU64>,
}

/// Generation number handed out by [`RefreshGenerations::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RefreshGenerations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation.
    #[must_use]
    pub fn begin(&self) -> Ticket {
        Ticket(self.started.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record that `ticket` fetched its list successfully.
    ///
    /// Returns `false` when a later generation has already settled, in which
    /// case the list must not be rendered.
    #[must_use]
    pub fn settle(&self, ticket: Ticket) -> bool {
        self.settled.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }
}

/// Outcome of a successful package fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// Newest data; replace the table body with these rows.
    Current(Vec<PackageRow>),
    /// A later-started refresh was already rendered; leave the table alone.
    Stale,
}

impl Refresh {
    /// The rows to render, or `None` for a stale result.
    #[must_use]
    pub fn into_rows(self) -> Option<Vec<PackageRow>> {
        match self {
            Self::Current(rows) => Some(rows),
            Self::Stale => None,
        }
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}
