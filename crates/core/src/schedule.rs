//! Splitting a record's shows into upcoming and past relative to a moment.

use serde::Serialize;

use crate::types::Timestamp;

/// Anything that happens at a single point in time.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Shows of one venue or artist, split around a reference instant.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule<T> {
    pub upcoming_shows: Vec<T>,
    pub past_shows: Vec<T>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

/// Partition `items` around `now`, preserving input order within each side.
///
/// Strictly after `now` is upcoming, strictly before is past; an item
/// starting exactly at `now` lands in neither list.
pub fn partition_by_time<T: Scheduled>(items: Vec<T>, now: Timestamp) -> Schedule<T> {
    let mut upcoming_shows = Vec::new();
    let mut past_shows = Vec::new();

    for item in items {
        let start = item.start_time();
        if start > now {
            upcoming_shows.push(item);
        } else if start < now {
            past_shows.push(item);
        }
    }

    Schedule {
        upcoming_shows_count: upcoming_shows.len(),
        past_shows_count: past_shows.len(),
        upcoming_shows,
        past_shows,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    struct Gig(&'static str, Timestamp);

    impl Scheduled for Gig {
        fn start_time(&self) -> Timestamp {
            self.1
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
    }

    fn names(gigs: &[Gig]) -> Vec<&'static str> {
        gigs.iter().map(|g| g.0).collect()
    }

    #[test]
    fn future_is_upcoming_and_past_is_past() {
        let gigs = vec![
            Gig("later", now() + Duration::days(3)),
            Gig("earlier", now() - Duration::days(3)),
        ];
        let schedule = partition_by_time(gigs, now());
        assert_eq!(names(&schedule.upcoming_shows), ["later"]);
        assert_eq!(names(&schedule.past_shows), ["earlier"]);
        assert_eq!(schedule.upcoming_shows_count, 1);
        assert_eq!(schedule.past_shows_count, 1);
    }

    #[test]
    fn show_starting_exactly_now_is_in_neither_list() {
        let gigs = vec![Gig("tie", now())];
        let schedule = partition_by_time(gigs, now());
        assert!(schedule.upcoming_shows.is_empty());
        assert!(schedule.past_shows.is_empty());
    }

    #[test]
    fn one_second_either_side_is_classified() {
        let gigs = vec![
            Gig("just-after", now() + Duration::seconds(1)),
            Gig("just-before", now() - Duration::seconds(1)),
        ];
        let schedule = partition_by_time(gigs, now());
        assert_eq!(names(&schedule.upcoming_shows), ["just-after"]);
        assert_eq!(names(&schedule.past_shows), ["just-before"]);
    }

    #[test]
    fn order_is_preserved() {
        let gigs = vec![
            Gig("a", now() + Duration::hours(1)),
            Gig("b", now() + Duration::hours(5)),
            Gig("c", now() + Duration::hours(2)),
        ];
        let schedule = partition_by_time(gigs, now());
        assert_eq!(names(&schedule.upcoming_shows), ["a", "b", "c"]);
    }
}
