//! Wait-time estimation.
//!
//! Estimates how long a patient will wait for treatment given their rank in
//! the ordered queue and the number of caregivers serving it in parallel.
//!
//! Each patient ahead of the target contributes service time proportional to
//! *their own* urgency weight: a queue headed by emergencies drains slower
//! than one headed by non-urgent cases. The per-weight unit of service time
//! is the configured base minutes per patient
//! ([`crate::constants::DEFAULT_BASE_MINUTES_PER_PATIENT`] by default).

use crate::patient::Patient;
use triage_types::NationalId;

/// The outcome of a wait-time estimation.
///
/// `NotInQueue` and `NoCaregivers` are expected operational states, not
/// errors; callers branch on the variant rather than handling a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitEstimate {
    /// The patient is in the queue; the estimated wait is `hours` and
    /// `minutes` (minutes always below 60).
    Queued { hours: u64, minutes: u64 },
    /// The patient is not in the waiting queue (already treated, removed, or
    /// never registered).
    NotInQueue,
    /// No caregivers are available, so no service rate exists to estimate
    /// against.
    NoCaregivers,
}

/// Estimates the wait time for one patient within an ordered queue.
///
/// The target is matched by national identifier against `queue`, which must
/// already be ordered by [`crate::queue::order_by_urgency`]. Every patient
/// strictly ahead of the target contributes `base_minutes_per_patient`
/// multiplied by their own urgency weight; the accumulated minutes are
/// divided by `caregivers` to model parallel service, then truncated into
/// whole hours and remainder minutes.
///
/// An absent patient yields [`WaitEstimate::NotInQueue`] regardless of the
/// caregiver count; a non-positive caregiver count yields
/// [`WaitEstimate::NoCaregivers`].
pub fn estimate_wait(
    national_id: &NationalId,
    queue: &[Patient],
    caregivers: i32,
    base_minutes_per_patient: f64,
) -> WaitEstimate {
    let Some(position) = queue.iter().position(|p| p.national_id == *national_id) else {
        return WaitEstimate::NotInQueue;
    };

    if caregivers <= 0 {
        return WaitEstimate::NoCaregivers;
    }

    let total_minutes: f64 = queue[..position]
        .iter()
        .map(|ahead| base_minutes_per_patient * f64::from(ahead.priority.weight()))
        .sum();
    let total_minutes = total_minutes / f64::from(caregivers);

    WaitEstimate::Queued {
        hours: (total_minutes / 60.0) as u64,
        minutes: (total_minutes % 60.0) as u64,
    }
}
