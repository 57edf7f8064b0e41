//! View state as a reducer over incoming events.
//!
//! [`ViewState::apply`] consumes the current state and one [`Event`] and
//! returns the next state plus the [`Effect`]s the runtime must start. The
//! visible list is recomputed inside every transition that changes one of its
//! inputs (dataset, location, query), so it is always a function of those three.
//!
//! Location requests and directory fetches carry sequence numbers. A
//! resolution that is not newer than the last one applied is dropped. Loads
//! and failures are tracked separately, so a late successful fetch still
//! delivers data after a newer fetch has failed.

use std::sync::Arc;

use beacon_core::{filter, rank, LocationState, RankedRecord, SchoolRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirectoryStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The latest fetch failed. Any previously loaded dataset stays visible.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Init,
    LocationResolved {
        seq: u64,
        state: LocationState,
    },
    DirectoryLoaded {
        seq: u64,
        records: Vec<SchoolRecord>,
    },
    DirectoryFailed {
        seq: u64,
        message: String,
    },
    QueryChanged(String),
    /// Focus or click on the search box; re-asks for the user's position.
    SearchBoxActivated,
}

/// Work the runtime must start on behalf of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RequestLocation { seq: u64 },
    FetchDirectory { seq: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    dataset: Vec<Arc<SchoolRecord>>,
    directory: DirectoryStatus,
    location: LocationState,
    query: String,
    ranked: Vec<RankedRecord>,
    visible: Vec<RankedRecord>,
    location_issued: u64,
    location_applied: u64,
    fetch_issued: u64,
    loaded_seq: u64,
    failed_seq: u64,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning the next state and the effects to run.
    #[must_use]
    pub fn apply(mut self, event: Event) -> (Self, Vec<Effect>) {
        let effects = match event {
            Event::Init => vec![self.request_location(), self.fetch_directory()],
            Event::LocationResolved { seq, state } => self.on_location_resolved(seq, state),
            Event::DirectoryLoaded { seq, records } => {
                self.on_directory_loaded(seq, records);
                Vec::new()
            }
            Event::DirectoryFailed { seq, message } => {
                self.on_directory_failed(seq, message);
                Vec::new()
            }
            Event::QueryChanged(text) => {
                self.query = text;
                self.visible = filter(&self.ranked, &self.query);
                Vec::new()
            }
            Event::SearchBoxActivated => vec![self.request_location()],
        };
        (self, effects)
    }

    #[must_use]
    pub fn visible_list(&self) -> &[RankedRecord] {
        &self.visible
    }

    #[must_use]
    pub fn ranked_list(&self) -> &[RankedRecord] {
        &self.ranked
    }

    #[must_use]
    pub fn location(&self) -> &LocationState {
        &self.location
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn directory_status(&self) -> &DirectoryStatus {
        &self.directory
    }

    #[must_use]
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    fn request_location(&mut self) -> Effect {
        self.location_issued += 1;
        // Keep a resolved state while the new request is pending so the list
        // does not fall back to alphabetical in between.
        if !self.location.is_resolved() {
            self.location = LocationState::Resolving;
        }
        Effect::RequestLocation {
            seq: self.location_issued,
        }
    }

    fn fetch_directory(&mut self) -> Effect {
        self.fetch_issued += 1;
        if self.directory != DirectoryStatus::Loaded {
            self.directory = DirectoryStatus::Loading;
        }
        Effect::FetchDirectory {
            seq: self.fetch_issued,
        }
    }

    fn on_location_resolved(&mut self, seq: u64, state: LocationState) -> Vec<Effect> {
        if seq <= self.location_applied || seq > self.location_issued {
            tracing::debug!(
                seq,
                applied = self.location_applied,
                "ignoring superseded location resolution"
            );
            return Vec::new();
        }
        if !state.is_resolved() {
            tracing::debug!(seq, %state, "ignoring non-terminal location resolution");
            return Vec::new();
        }

        tracing::debug!(seq, from = %self.location, to = %state, "location resolved");
        self.location_applied = seq;
        self.location = state;
        self.recompute();
        vec![self.fetch_directory()]
    }

    fn on_directory_loaded(&mut self, seq: u64, records: Vec<SchoolRecord>) {
        if seq <= self.loaded_seq {
            tracing::debug!(seq, loaded = self.loaded_seq, "ignoring stale directory");
            return;
        }
        self.loaded_seq = seq;
        self.dataset = records.into_iter().map(Arc::new).collect();
        // A newer fetch already failed: show this data but keep reporting the failure.
        if seq > self.failed_seq {
            self.directory = DirectoryStatus::Loaded;
        }
        self.recompute();
    }

    fn on_directory_failed(&mut self, seq: u64, message: String) {
        if seq <= self.failed_seq || seq <= self.loaded_seq {
            tracing::debug!(
                seq,
                loaded = self.loaded_seq,
                failed = self.failed_seq,
                "ignoring stale fetch failure"
            );
            return;
        }
        self.failed_seq = seq;
        self.directory = DirectoryStatus::Failed(message);
    }

    fn recompute(&mut self) {
        self.ranked = rank(&self.dataset, &self.location);
        self.visible = filter(&self.ranked, &self.query);
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
