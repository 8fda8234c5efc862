use serde::{Deserialize, Serialize};

use crate::core::YearAxis;

/// Anything placed on the axis by year.
///
/// The engine only ever reads `id` and `year`; payloads stay opaque.
pub trait Dated {
    fn id(&self) -> u64;
    fn year(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    Event,
    Note,
}

/// Minimal `{id, year}` record for events and user notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineMarker {
    pub id: u64,
    pub year: i32,
    pub kind: MarkerKind,
}

impl TimelineMarker {
    #[must_use]
    pub fn event(id: u64, year: i32) -> Self {
        Self {
            id,
            year,
            kind: MarkerKind::Event,
        }
    }

    #[must_use]
    pub fn note(id: u64, year: i32) -> Self {
        Self {
            id,
            year,
            kind: MarkerKind::Note,
        }
    }
}

impl Dated for TimelineMarker {
    fn id(&self) -> u64 {
        self.id
    }

    fn year(&self) -> i32 {
        self.year
    }
}

impl<T: Dated> Dated for &T {
    fn id(&self) -> u64 {
        (**self).id()
    }

    fn year(&self) -> i32 {
        (**self).year()
    }
}

/// Highlighted sub-interval of the axis, always stored with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearInterval {
    pub start: i32,
    pub end: i32,
}

impl YearInterval {
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    #[must_use]
    pub fn clamped_to(self, axis: YearAxis) -> Self {
        Self::new(axis.clamp_year(self.start), axis.clamp_year(self.end))
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Number of years covered, both ends inclusive.
    #[must_use]
    pub fn len_years(self) -> i64 {
        i64::from(self.end) - i64::from(self.start) + 1
    }
}
