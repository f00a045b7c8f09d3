mod bitemporal;
mod clock;
mod dictionary;
mod supplier;

pub use bitemporal::{HasBitemporality, HasUndoFlag, VersionedRecord};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dictionary::{CodeDictionary, CodeTable};
pub use supplier::{CandidateSupplier, LookupNodeSupplier};
