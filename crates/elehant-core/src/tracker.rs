//! Latest-reading tracking across many meters.
//!
//! Meters advertise every few seconds, and a few of those advertisements get
//! rejected (foreign payloads on a shared address prefix, truncated frames).
//! [`MeterTracker`] keeps the last successfully decoded reading per address
//! so a rejected advertisement never replaces good data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use elehant_types::{MacAddress, MeterReading};

use crate::advertisement::{Advertisement, Outcome, OutcomeKind, decode_advertisement};

/// A decoded reading together with where and when it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Advertising device address.
    pub address: MacAddress,
    /// The decoded reading.
    pub reading: MeterReading,
    /// Host receive time.
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

impl Observation {
    /// Create an observation received at the given time.
    #[must_use]
    pub fn new(address: MacAddress, reading: MeterReading, received_at: OffsetDateTime) -> Self {
        Self {
            address,
            reading,
            received_at,
        }
    }
}

/// Last decoded observation per meter, plus outcome counters.
#[derive(Debug, Clone, Default)]
pub struct MeterTracker {
    latest: BTreeMap<MacAddress, Observation>,
    counts: BTreeMap<OutcomeKind, u64>,
}

impl MeterTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an advertisement and record its outcome.
    pub fn process(
        &mut self,
        advertisement: &Advertisement,
        received_at: OffsetDateTime,
    ) -> Outcome {
        let outcome = decode_advertisement(advertisement);
        self.record(advertisement.address, outcome.clone(), received_at);
        outcome
    }

    /// Record an outcome for `address`.
    ///
    /// Returns the stored observation when the outcome was decoded. Any other
    /// outcome only bumps its counter and leaves the stored reading alone.
    pub fn record(
        &mut self,
        address: MacAddress,
        outcome: Outcome,
        received_at: OffsetDateTime,
    ) -> Option<&Observation> {
        *self.counts.entry(outcome.kind()).or_default() += 1;

        let Outcome::Decoded(reading) = outcome else {
            debug!(%address, kind = %outcome.kind(), "Keeping previous reading");
            return None;
        };

        let observation = Observation::new(address, reading, received_at);
        self.latest.insert(address, observation);
        self.latest.get(&address)
    }

    /// The last decoded observation for `address`.
    #[must_use]
    pub fn latest(&self, address: &MacAddress) -> Option<&Observation> {
        self.latest.get(address)
    }

    /// All tracked observations, ordered by address.
    pub fn observations(&self) -> impl Iterator<Item = &Observation> {
        self.latest.values()
    }

    /// Number of meters with a decoded reading.
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    /// Whether no meter has been decoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    /// How many outcomes of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: OutcomeKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of recorded outcomes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Outcome counters for every kind, including zeroes.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<OutcomeKind, u64> {
        OutcomeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .collect()
    }

    /// Forget all observations and counters.
    pub fn clear(&mut self) {
        self.latest.clear();
        self.counts.clear();
    }
}
