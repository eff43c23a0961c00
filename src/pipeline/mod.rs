// Analysis pipeline: per-article enrichment, then cross-article aggregation.

pub mod comparative;
pub mod report;
