//! The four-timestamp bitemporal validity window.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ObservationPoint;

/// Validity of one fact version along both time axes.
///
/// Every bound is optional. A missing `*_from` is the unbounded past, a
/// missing `*_to` means the axis is still open. Both axes are half-open:
/// `[from, to)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitemporality {
    /// When the fact was recorded by the system of record.
    pub registration_from: Option<DateTime<Utc>>,
    /// When the recording was superseded. `None` = still registered.
    pub registration_to: Option<DateTime<Utc>>,
    /// When the fact became true in the real world.
    pub effect_from: Option<DateTime<Utc>>,
    /// When the fact stopped being true. `None` = still in effect.
    pub effect_to: Option<DateTime<Utc>>,
}

impl Bitemporality {
    pub fn new(
        registration_from: Option<DateTime<Utc>>,
        registration_to: Option<DateTime<Utc>>,
        effect_from: Option<DateTime<Utc>>,
        effect_to: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            registration_from,
            registration_to,
            effect_from,
            effect_to,
        }
    }

    /// An interval open on both axes, starting at the given instants.
    pub fn open(
        registration_from: Option<DateTime<Utc>>,
        effect_from: Option<DateTime<Utc>>,
    ) -> Self {
        Self::new(registration_from, None, effect_from, None)
    }

    pub fn with_registration_to(mut self, registration_to: DateTime<Utc>) -> Self {
        self.registration_to = Some(registration_to);
        self
    }

    pub fn with_effect_to(mut self, effect_to: DateTime<Utc>) -> Self {
        self.effect_to = Some(effect_to);
        self
    }

    /// Whether `instant` lies in `[registration_from, registration_to)`.
    pub fn registration_contains(&self, instant: DateTime<Utc>) -> bool {
        axis_contains(self.registration_from, self.registration_to, instant)
    }

    /// Whether `instant` lies in `[effect_from, effect_to)`.
    pub fn effect_contains(&self, instant: DateTime<Utc>) -> bool {
        axis_contains(self.effect_from, self.effect_to, instant)
    }

    /// Whether the observation point falls inside the window on both axes.
    pub fn contains(&self, point: &ObservationPoint) -> bool {
        self.registration_contains(point.registration) && self.effect_contains(point.effect)
    }

    /// Open on both axes: neither closed by a later registration nor ended
    /// in the real world.
    pub fn is_open(&self) -> bool {
        self.registration_to.is_none() && self.effect_to.is_none()
    }

    /// Either axis ends before it starts.
    pub fn is_malformed(&self) -> bool {
        axis_inverted(self.registration_from, self.registration_to)
            || axis_inverted(self.effect_from, self.effect_to)
    }

    /// The effect axis spans a positive duration. An absent `effect_from` is
    /// the unbounded past, so only a closed `effect_to` at or before a
    /// present `effect_from` fails.
    pub fn has_positive_effect_span(&self) -> bool {
        match (self.effect_from, self.effect_to) {
            (Some(from), Some(to)) => to > from,
            _ => true,
        }
    }

    /// Registration-axis ordering: `registration_from` ascending with the
    /// unbounded past first.
    pub fn cmp_registration(&self, other: &Self) -> Ordering {
        self.registration_from.cmp(&other.registration_from)
    }

    /// Effect-axis ordering: `effect_from` ascending with the unbounded past
    /// first.
    pub fn cmp_effect(&self, other: &Self) -> Ordering {
        self.effect_from.cmp(&other.effect_from)
    }
}

fn axis_contains(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    instant: DateTime<Utc>,
) -> bool {
    from.map_or(true, |f| f <= instant) && to.map_or(true, |t| instant < t)
}

fn axis_inverted(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    matches!((from, to), (Some(f), Some(t)) if f > t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn open_interval_contains_everything_after_start() {
        let b = Bitemporality::open(Some(ts(2020, 1, 1)), Some(ts(2020, 1, 1)));
        assert!(b.contains(&ObservationPoint::at(ts(2020, 1, 1))));
        assert!(b.contains(&ObservationPoint::at(ts(2099, 1, 1))));
        assert!(!b.contains(&ObservationPoint::at(ts(2019, 12, 31))));
    }

    #[test]
    fn missing_from_is_unbounded_past() {
        let b = Bitemporality::open(None, None);
        assert!(b.contains(&ObservationPoint::at(ts(1900, 1, 1))));
    }

    #[test]
    fn upper_bounds_are_exclusive() {
        let b = Bitemporality::open(Some(ts(2020, 1, 1)), Some(ts(2020, 1, 1)))
            .with_registration_to(ts(2021, 1, 1))
            .with_effect_to(ts(2022, 1, 1));
        assert!(!b.registration_contains(ts(2021, 1, 1)));
        assert!(b.registration_contains(ts(2020, 12, 31)));
        assert!(!b.effect_contains(ts(2022, 1, 1)));
        assert!(b.effect_contains(ts(2021, 12, 31)));
    }

    #[test]
    fn axes_are_checked_independently() {
        let b = Bitemporality::open(Some(ts(2021, 1, 1)), Some(ts(2020, 1, 1)));
        let point = ObservationPoint::new(ts(2020, 6, 1), ts(2020, 6, 1));
        assert!(!b.contains(&point));
        let point = ObservationPoint::new(ts(2021, 6, 1), ts(2020, 6, 1));
        assert!(b.contains(&point));
    }

    #[test]
    fn inverted_axis_is_malformed() {
        let b = Bitemporality::open(Some(ts(2020, 1, 1)), Some(ts(2021, 1, 1)))
            .with_effect_to(ts(2020, 1, 1));
        assert!(b.is_malformed());
        let b = Bitemporality::open(Some(ts(2021, 1, 1)), None).with_registration_to(ts(2020, 1, 1));
        assert!(b.is_malformed());
    }

    #[test]
    fn zero_length_effect_is_well_formed_but_not_positive() {
        let b = Bitemporality::open(None, Some(ts(2020, 1, 1))).with_effect_to(ts(2020, 1, 1));
        assert!(!b.is_malformed());
        assert!(!b.has_positive_effect_span());
    }

    #[test]
    fn unbounded_past_sorts_first() {
        let a = Bitemporality::open(None, None);
        let b = Bitemporality::open(Some(ts(2020, 1, 1)), None);
        assert_eq!(a.cmp_registration(&b), Ordering::Less);
        assert_eq!(a.cmp_effect(&b), Ordering::Equal);
    }
}
