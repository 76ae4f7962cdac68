/// Value that stops being readable after an expiration instant.
use chrono::{DateTime, TimeDelta, Utc};

/// Optional value paired with the instant it expires.
///
/// A value is valid while its expiration is at or after "now". Values set
/// through [`set`](Self::set) expire `duration` after the call; the
/// `_at` variants take an explicit clock reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Expirable<T> {
    duration: TimeDelta,
    storage: Option<(T, DateTime<Utc>)>,
}

impl<T> Expirable<T> {
    /// Creates an empty wrapper whose values live for `duration`.
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            storage: None,
        }
    }

    /// Creates a wrapper holding `value` until `expires_at`.
    pub fn with_expiration(value: T, expires_at: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            duration,
            storage: Some((value, expires_at)),
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Returns the value if it has not expired.
    pub fn get(&self) -> Option<&T> {
        self.get_at(Utc::now())
    }

    pub fn get_at(&self, now: DateTime<Utc>) -> Option<&T> {
        match &self.storage {
            Some((value, expires_at)) if *expires_at >= now => Some(value),
            _ => None,
        }
    }

    /// Stores `value` expiring `duration` from now; `None` clears it.
    /// Expirations past the representable range never expire.
    pub fn set(&mut self, value: Option<T>) {
        self.set_at(value, Utc::now());
    }

    pub fn set_at(&mut self, value: Option<T>, now: DateTime<Utc>) {
        let expires_at = now.checked_add_signed(self.duration).unwrap_or(
            if self.duration < TimeDelta::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            },
        );
        self.storage = value.map(|v| (v, expires_at));
    }

    /// Stores `value` with an explicit expiration instant.
    pub fn set_with_expiration(&mut self, value: T, expires_at: DateTime<Utc>) {
        self.storage = Some((value, expires_at));
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.get_at(now).is_some()
    }

    /// Expiration instant of the stored value, expired or not.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.storage.as_ref().map(|(_, at)| *at)
    }
}
