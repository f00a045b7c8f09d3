//! The bitemporal point a resolution is evaluated against.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One instant per time axis.
///
/// A request captures its point once and reuses it for every attribute and
/// every lookup hop so all answers come from the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationPoint {
    /// "What had been recorded by this time."
    pub registration: DateTime<Utc>,
    /// "What was true at this time."
    pub effect: DateTime<Utc>,
}

impl ObservationPoint {
    pub fn new(registration: DateTime<Utc>, effect: DateTime<Utc>) -> Self {
        Self {
            registration,
            effect,
        }
    }

    /// Both axes at the same instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::new(instant, instant)
    }

    /// Drop sub-second precision on both axes.
    ///
    /// Lookup results are cached per exact point, so wall-clock points must be
    /// coarsened before they can share cache entries.
    pub fn truncated_to_seconds(self) -> Self {
        Self::new(self.registration.trunc_subsecs(0), self.effect.trunc_subsecs(0))
    }
}
