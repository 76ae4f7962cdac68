/// Setters that transform values on the way in.
use std::fmt;

/// Value passed through `mapper` on construction and every assignment.
pub struct MappingSetter<T, F = fn(T) -> T> {
    value: T,
    mapper: F,
}

impl<T: fmt::Debug, F> fmt::Debug for MappingSetter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingSetter")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn(T) -> T> MappingSetter<T, F> {
    pub fn new(value: T, mapper: F) -> Self {
        let value = mapper(value);
        Self { value, mapper }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = (self.mapper)(value);
    }

    /// Computes a new value from the current one and assigns it through
    /// the mapper.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Which characters [`Trimmed`] strips from both ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrimSet {
    /// Unicode whitespace, newlines included.
    #[default]
    Whitespace,
    /// Exactly these characters.
    Chars(Vec<char>),
}

impl TrimSet {
    fn contains(&self, c: char) -> bool {
        match self {
            Self::Whitespace => c.is_whitespace(),
            Self::Chars(chars) => chars.contains(&c),
        }
    }
}

/// String trimmed on construction and every assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    value: String,
    trim: TrimSet,
}

impl Trimmed {
    /// Trims whitespace and newlines.
    pub fn new(value: &str) -> Self {
        Self::with_trim_set(value, TrimSet::Whitespace)
    }

    /// Trims any of `chars`.
    pub fn with_chars(value: &str, chars: &str) -> Self {
        Self::with_trim_set(value, TrimSet::Chars(chars.chars().collect()))
    }

    pub fn with_trim_set(value: &str, trim: TrimSet) -> Self {
        let value = value.trim_matches(|c: char| trim.contains(c)).to_string();
        Self { value, trim }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.trim_matches(|c: char| self.trim.contains(c)).to_string();
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for Trimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
