// News retrieval: search API client and fixed-size batching.

pub mod fetcher;
pub mod gnews;
pub mod traits;
