use std::cell::Cell;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets so that responses of
/// superseded requests can be discarded.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: Cell::new(0),
        }
    }

    pub fn start(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Returns `value` only if `ticket` is still the latest one.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("Discard stale response of request #{}", ticket.0);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.start();
        assert!(seq.is_current(first));
        let second = seq.start();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn stale_responses_are_dropped() {
        let seq = RequestSequence::default();
        let slow = seq.start();
        let fast = seq.start();
        assert_eq!(seq.accept(fast, "fresh"), Some("fresh"));
        assert_eq!(seq.accept(slow, "stale"), None);
    }
}
