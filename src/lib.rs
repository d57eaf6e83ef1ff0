//! Compliance table extraction for AWS documentation pages
//!
//! Reads the per-standard tables of an AWS "services in scope" page and
//! produces normalized (standard, sdk, service) facts:
//! - Document index: labelled tab tables in document order
//! - Classifier: tab label to table format
//! - Extractors: Standard, FedRAMP, DoD CC SRG and GSMA column layouts
//! - Emitter: one fact per SDK, or one SDK-less fact, per present status cell
//!
//! Fetching the page and storing the facts are left to the caller.

pub mod classify;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod request;
pub mod scrape;

pub use config::ScrapeConfig;
pub use emit::{Fact, FactSet, FactSink};
pub use error::{Result, ScrapeError};
pub use extractors::TableFormat;
pub use request::{scrape_json, ScrapeRequest, ScrapeResponse};
pub use scrape::{ignore_events, scrape_document, scrape_with_format, ScrapeEvent, ScrapeReport};
