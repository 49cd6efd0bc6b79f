use proptest::prelude::*;
use proptest::test_runner::Config;
use time::{macros::datetime, Duration, OffsetDateTime};

use super::*;

fn event(id: i64, date: OffsetDateTime) -> EventRecord {
    EventRecord {
        id,
        title: format!("event {id}"),
        description: None,
        detailed_description: None,
        event_date: date,
        location: None,
        gallery_link: None,
        order_index: id as i32,
    }
}

fn ids(events: &[EventRecord]) -> Vec<i64> {
    events.iter().map(|e| e.id).collect()
}

#[test]
fn event_exactly_now_is_upcoming() {
    let now = datetime!(2025-06-01 12:00:00.123 UTC);
    let board = EventBoard::partition(
        vec![
            event(1, now),
            event(2, now - Duration::milliseconds(1)),
            event(3, now + Duration::milliseconds(1)),
        ],
        now,
    );
    assert_eq!(ids(&board.upcoming), vec![1, 3]);
    assert_eq!(ids(&board.completed), vec![2]);
}

#[test]
fn upcoming_ascending_completed_descending() {
    let now = datetime!(2025-06-01 0:00 UTC);
    let board = EventBoard::partition(
        vec![
            event(1, now - Duration::days(30)),
            event(2, now + Duration::days(10)),
            event(3, now - Duration::days(1)),
            event(4, now + Duration::days(2)),
            event(5, now - Duration::days(400)),
        ],
        now,
    );
    assert_eq!(ids(&board.upcoming), vec![4, 2]);
    assert_eq!(ids(&board.completed), vec![3, 1, 5]);
    assert_eq!(board.len(), 5);
}

#[test]
fn equal_dates_keep_input_order() {
    let now = datetime!(2025-06-01 0:00 UTC);
    let same = now + Duration::days(3);
    let board = EventBoard::partition(vec![event(7, same), event(8, same)], now);
    assert_eq!(ids(&board.upcoming), vec![7, 8]);
}

#[test]
fn empty_input_is_empty_board() {
    let board = EventBoard::partition(vec![], datetime!(2025-06-01 0:00 UTC));
    assert!(board.is_empty());
}

#[test]
fn find_looks_on_both_sides() {
    let now = datetime!(2025-06-01 0:00 UTC);
    let board = EventBoard::partition(
        vec![event(1, now - Duration::days(1)), event(2, now)],
        now,
    );
    assert_eq!(board.find(1).map(|e| e.id), Some(1));
    assert_eq!(board.find(2).map(|e| e.id), Some(2));
    assert!(board.find(3).is_none());
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn partition_is_exhaustive_disjoint_and_sorted(
        offsets in prop::collection::vec(-10_000_i64..10_000_i64, 0..40)
    ) {
        let now = datetime!(2025-01-01 0:00 UTC);
        let input: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(i, off)| event(i as i64, now + Duration::seconds(*off)))
            .collect();
        let board = EventBoard::partition(input.clone(), now);

        let mut seen: Vec<i64> = ids(&board.upcoming);
        seen.extend(ids(&board.completed));
        seen.sort_unstable();
        prop_assert_eq!(seen, ids(&input));

        prop_assert!(board.upcoming.iter().all(|e| e.event_date >= now));
        prop_assert!(board.completed.iter().all(|e| e.event_date < now));
        prop_assert!(board.upcoming.windows(2).all(|w| w[0].event_date <= w[1].event_date));
        prop_assert!(board.completed.windows(2).all(|w| w[0].event_date >= w[1].event_date));
    }
}
