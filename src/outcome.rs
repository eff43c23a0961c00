// Outcome: a value that was either computed or substituted with a default.
//
// Enrichment steps never abort the batch. Instead of swallowing failures,
// they return Outcome::Defaulted with the reason, so tests and logs can see
// exactly where the pipeline degraded.

use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The collaborator produced this value.
    Computed(T),
    /// The collaborator failed or produced nothing usable; `value` is the fallback.
    Defaulted { value: T, reason: String },
}

impl<T> Outcome<T> {
    /// Build a defaulted outcome and log the diagnostic.
    pub fn defaulted(value: T, stage: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(stage = stage, reason = %reason, "Falling back to default value");
        Outcome::Defaulted { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Computed(value) => value,
            Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Computed(value) => value,
            Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Outcome::Defaulted { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Computed(value) => Outcome::Computed(f(value)),
            Outcome::Defaulted { value, reason } => Outcome::Defaulted {
                value: f(value),
                reason,
            },
        }
    }
}
