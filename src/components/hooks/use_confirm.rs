use leptos::prelude::*;

/// Guard state for destructive actions behind a confirmation dialog
/// (delete, restore, permanent delete).
///
/// Rules:
/// - One pending entity id at a time; opening for another id replaces it.
/// - `close` is a no-op while the confirmed action is in flight, so the
///   dialog cannot lose the pending id mid-request.
/// - `reset` clears both fields once the action settles (or on cancel).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfirmState {
    pending_id: Option<String>,
    processing: bool,
}

impl ConfirmState {
    pub fn open(&mut self, id: impl Into<String>) {
        self.pending_id = Some(id.into());
    }

    pub fn close(&mut self) {
        if !self.processing {
            self.pending_id = None;
        }
    }

    pub fn start_processing(&mut self) {
        self.processing = true;
    }

    pub fn stop_processing(&mut self) {
        self.processing = false;
    }

    pub fn reset(&mut self) {
        self.pending_id = None;
        self.processing = false;
    }

    pub fn pending_id(&self) -> Option<&str> {
        self.pending_id.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }
}

/// Signal-wrapped [`ConfirmState`] for use inside components.
pub(crate) fn use_confirm() -> RwSignal<ConfirmState> {
    RwSignal::new(ConfirmState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_pending_id() {
        let mut s = ConfirmState::default();
        s.open("A");
        assert_eq!(s.pending_id(), Some("A"));
        s.open("B");
        assert_eq!(s.pending_id(), Some("B"));
    }

    #[test]
    fn test_close_is_noop_while_processing() {
        let mut s = ConfirmState::default();
        s.open("A");
        s.start_processing();
        s.close();
        assert_eq!(s.pending_id(), Some("A"));
        assert!(s.is_processing());

        s.stop_processing();
        s.close();
        assert_eq!(s.pending_id(), None);
    }

    #[test]
    fn test_reset_clears_both_fields() {
        let mut s = ConfirmState::default();
        s.open("A");
        s.start_processing();
        s.reset();
        assert_eq!(s.pending_id(), None);
        assert!(!s.is_processing());
    }

    #[test]
    fn test_processing_flag_round_trip() {
        let mut s = ConfirmState::default();
        s.open("A");
        assert!(!s.is_processing());
        s.start_processing();
        assert!(s.is_processing());
        s.stop_processing();
        assert!(!s.is_processing());
        assert_eq!(s.pending_id(), Some("A"));
    }
}
