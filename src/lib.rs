// newscast: company news sentiment digest with spoken summaries
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline or one of its surfaces.

pub mod client;
pub mod config;
pub mod models;
pub mod news;
pub mod outcome;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod speech;
pub mod summary;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
