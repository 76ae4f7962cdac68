/// Value kept inside a closed range.
use std::ops::RangeInclusive;

/// Value that is clamped into `range` on construction and on every set.
#[derive(Debug, Clone, PartialEq)]
pub struct Clamping<T> {
    value: T,
    range: RangeInclusive<T>,
}

impl<T: PartialOrd + Clone> Clamping<T> {
    /// # Panics
    ///
    /// Panics if the range is empty (`start > end`).
    pub fn new(value: T, range: RangeInclusive<T>) -> Self {
        assert!(
            range.start() <= range.end(),
            "clamping range must not be empty"
        );
        let value = clamp(value, &range);
        Self { value, range }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = clamp(value, &self.range);
    }

    pub fn range(&self) -> &RangeInclusive<T> {
        &self.range
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// `PartialOrd` clamp: values that compare below/above a bound snap to it,
/// anything else (including incomparable values such as NaN) is kept.
fn clamp<T: PartialOrd + Clone>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        range.start().clone()
    } else if value > *range.end() {
        range.end().clone()
    } else {
        value
    }
}
