//! Session-scoped history of viewed destinations.
//!
//! Entries are keyed by destination id and never replaced: the first payload
//! recorded for an id is the one the sidebar keeps showing, even after a
//! follow-up changes the advice on the backend.

use advisor_api::{AdvicePayload, DestinationId};
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub payload: AdvicePayload,
    pub last_viewed: DateTime<Local>,
}

impl HistoryEntry {
    pub fn id(&self) -> &DestinationId {
        &self.payload.id
    }

    pub fn title(&self) -> String {
        format!("{}, {}", self.payload.name, self.payload.country)
    }

    pub fn last_viewed_label(&self) -> String {
        format!("Last viewed: {}", self.last_viewed.format("%H:%M:%S"))
    }
}

#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a new entry was appended.
    pub fn record(&mut self, payload: AdvicePayload) -> bool {
        self.record_at(payload, Local::now())
    }

    fn record_at(&mut self, payload: AdvicePayload, at: DateTime<Local>) -> bool {
        if self.contains(&payload.id) {
            return false;
        }
        self.entries.push(HistoryEntry {
            payload,
            last_viewed: at,
        });
        true
    }

    pub fn contains(&self, id: &DestinationId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
