pub mod cache;
pub mod catalog;
pub mod config;
pub mod coverage;
pub mod derive;
pub mod error;
pub mod fetch;
pub mod geography;
pub mod normalize;
pub mod report;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{CachedFetcher, DiskCache};
pub use config::Config;
pub use error::{AcsError, Result};
pub use fetch::{api::ApiDownloader, Downloader, FetchRequest};
pub use geography::{GeographyReference, Scope};
pub use report::{ReportBuilder, StateReport, TribalReport};
pub use table::{GeoKey, Table};
