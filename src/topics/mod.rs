// Topic extraction: keyword model, placeholder fallback and set overlap.

pub mod extract;
pub mod overlap;
pub mod traits;
pub mod yake;
