use crate::error::Error;

/// A value that is always usable, but may be a stand-in chosen after a failure.
#[derive(Debug)]
pub enum Outcome<T> {
    Resolved(T),
    Fallback { value: T, reason: Error },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: Error) -> Self {
        Outcome::Fallback { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Resolved(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Resolved(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&Error> {
        match self {
            Outcome::Resolved(_) => None,
            Outcome::Fallback { reason, .. } => Some(reason),
        }
    }
}
