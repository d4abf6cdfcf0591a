//! Guard that keeps a superseded response from overwriting newer state.

/// Sequence guard for overlapping fetches.
///
/// Each fetch takes a ticket before it starts; when the response arrives it
/// is applied only if no newer fetch began in the meantime.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

/// Ticket handed out by [`RequestSeq::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSeq {
    /// Start a new fetch, superseding every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent fetch.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        assert!(seq.is_current(first));
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
