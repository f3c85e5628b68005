//! Queue ordering engine.
//!
//! Orders the waiting population for treatment by clinical urgency rather
//! than arrival order: higher urgency weight first, earlier triage timestamp
//! first among patients sharing a weight.

use crate::patient::Patient;

/// Orders a snapshot of waiting patients into the treatment queue.
///
/// Stable sort by a composite key: urgency weight descending, then triage
/// timestamp ascending. Two patients sharing an identical (weight, timestamp)
/// pair keep their relative input order. Produces a new vector; the input is
/// never mutated. An empty input yields an empty output.
pub fn order_by_urgency(patients: &[Patient]) -> Vec<Patient> {
    let mut ordered = patients.to_vec();
    ordered.sort_by(|a, b| {
        b.priority
            .weight()
            .cmp(&a.priority.weight())
            .then_with(|| a.triaged_at.cmp(&b.triaged_at))
    });
    ordered
}

#[cfg(test)]
mod queue_tests {
    use super::*;
    use crate::patient::VitalSigns;
    use crate::priority::Priority;
    use crate::record_id::RecordId;
    use chrono::{DateTime, Utc};
    use triage_types::{NationalId, NonEmptyText};

    fn patient(national_id: &str, priority: Priority, triaged_at_secs: i64) -> Patient {
        Patient {
            id: RecordId::new(),
            name: NonEmptyText::new("Test Patient").expect("valid name"),
            age: 40,
            national_id: NationalId::new(national_id).expect("valid identifier"),
            symptoms: None,
            priority,
            vitals: VitalSigns::default(),
            triaged_at: DateTime::<Utc>::from_timestamp(triaged_at_secs, 0)
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(order_by_urgency(&[]).is_empty());
    }

    #[test]
    fn orders_by_weight_descending_then_timestamp_ascending() {
        let input = vec![
            patient("c", Priority::NonUrgent, 2),
            patient("b", Priority::HighUrgency, 1),
            patient("a", Priority::Emergency, 0),
            patient("d", Priority::HighUrgency, 0),
        ];

        let ordered = order_by_urgency(&input);
        let ids: Vec<&str> = ordered.iter().map(|p| p.national_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn ordered_output_satisfies_the_composite_key_invariant() {
        let input = vec![
            patient("a", Priority::LowUrgency, 9),
            patient("b", Priority::Emergency, 5),
            patient("c", Priority::NonUrgent, 1),
            patient("d", Priority::Emergency, 3),
            patient("e", Priority::HighUrgency, 7),
        ];

        let ordered = order_by_urgency(&input);

        for pair in ordered.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            let earlier_weight = earlier.priority.weight();
            let later_weight = later.priority.weight();
            assert!(
                earlier_weight > later_weight
                    || (earlier_weight == later_weight
                        && earlier.triaged_at <= later.triaged_at)
            );
        }
    }

    #[test]
    fn equal_weight_and_timestamp_preserve_input_order() {
        let first = patient("first", Priority::HighUrgency, 10);
        let second = patient("second", Priority::HighUrgency, 10);
        let input = vec![first, second];

        for _ in 0..5 {
            let ordered = order_by_urgency(&input);
            assert_eq!(ordered[0].national_id.as_str(), "first");
            assert_eq!(ordered[1].national_id.as_str(), "second");
        }
    }

    #[test]
    fn reordering_an_already_ordered_queue_is_identical() {
        let input = vec![
            patient("a", Priority::Emergency, 0),
            patient("b", Priority::HighUrgency, 1),
            patient("c", Priority::NonUrgent, 2),
        ];

        let once = order_by_urgency(&input);
        let twice = order_by_urgency(&once);

        let once_ids: Vec<&str> = once.iter().map(|p| p.national_id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|p| p.national_id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![
            patient("low", Priority::NonUrgent, 0),
            patient("high", Priority::Emergency, 1),
        ];

        let _ = order_by_urgency(&input);

        assert_eq!(input[0].national_id.as_str(), "low");
        assert_eq!(input[1].national_id.as_str(), "high");
    }
}
