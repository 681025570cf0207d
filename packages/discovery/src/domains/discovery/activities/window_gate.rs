//! Active-window evaluation.

use chrono::{DateTime, Utc};

use crate::domains::discovery::models::TimeWindowed;

/// Whether `entity` is enabled and inside its active window at `as_of`.
///
/// Each bound is checked on its own and is inclusive; a missing bound is
/// unbounded on that side. An inverted window (start after end) is not
/// rejected, it simply never matches.
pub fn is_active<E>(entity: &E, as_of: DateTime<Utc>) -> bool
where
    E: TimeWindowed + ?Sized,
{
    if !entity.enabled() {
        return false;
    }

    let started = entity.window_start().map_or(true, |start| start <= as_of);
    let not_ended = entity.window_end().map_or(true, |end| end >= as_of);

    started && not_ended
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    struct Gate {
        enabled: bool,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    }

    impl TimeWindowed for Gate {
        fn enabled(&self) -> bool {
            self.enabled
        }
        fn window_start(&self) -> Option<DateTime<Utc>> {
            self.start
        }
        fn window_end(&self) -> Option<DateTime<Utc>> {
            self.end
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_disabled_is_never_active() {
        let gate = Gate {
            enabled: false,
            start: None,
            end: None,
        };
        assert!(!is_active(&gate, noon()));
    }

    #[test]
    fn test_unbounded_is_always_active() {
        let gate = Gate {
            enabled: true,
            start: None,
            end: None,
        };
        assert!(is_active(&gate, noon()));
        assert!(is_active(&gate, DateTime::<Utc>::MIN_UTC));
        assert!(is_active(&gate, DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_future_start_becomes_active_on_start() {
        let tomorrow = noon() + Duration::days(1);
        let gate = Gate {
            enabled: true,
            start: Some(tomorrow),
            end: None,
        };
        assert!(!is_active(&gate, noon()));
        assert!(is_active(&gate, tomorrow));
        assert!(is_active(&gate, tomorrow + Duration::seconds(1)));
    }

    #[test]
    fn test_end_bound_is_inclusive() {
        let gate = Gate {
            enabled: true,
            start: None,
            end: Some(noon()),
        };
        assert!(is_active(&gate, noon()));
        assert!(!is_active(&gate, noon() + Duration::milliseconds(1)));
    }

    #[test]
    fn test_inverted_window_never_matches() {
        let gate = Gate {
            enabled: true,
            start: Some(noon() + Duration::days(1)),
            end: Some(noon() - Duration::days(1)),
        };
        assert!(!is_active(&gate, noon()));
        assert!(!is_active(&gate, noon() + Duration::days(2)));
        assert!(!is_active(&gate, noon() - Duration::days(2)));
    }
}
