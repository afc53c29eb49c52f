//! Session input types and boundary filtering.

pub mod event;
pub mod record;

pub use event::SessionEvent;
pub use record::SessionRecord;

/// Convert store records into events, dropping sessions that are still open.
pub fn completed_events(records: &[SessionRecord]) -> Vec<SessionEvent> {
    records
        .iter()
        .filter(|r| r.is_complete())
        .map(SessionEvent::from_record)
        .collect()
}
