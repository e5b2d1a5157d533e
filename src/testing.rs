//! In-process stand-in for the statistical service, shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::catalog::GroupId;
use crate::error::{AcsError, Result};
use crate::fetch::{Downloader, FetchRequest, GeoDescriptor, RawRow, RawTable};
use crate::geography::Scope;

pub(crate) fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,acsreport=debug")),
        )
        .with_test_writer()
        .finish();
    // already set by another test
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Answers any catalogued code with a deterministic value: the row's size for
/// a `_001E` total, `size * n / 1000` for the `_nnnE` sub-categories.
/// Uncatalogued codes are left out of the response.
pub(crate) struct FakeService {
    calls: AtomicUsize,
    fail_first: usize,
}

impl FakeService {
    pub(crate) fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_first: 0,
        }
    }

    /// Fail the first `n` calls with an external-call error.
    pub(crate) fn failing(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn geographies(scope: Scope) -> Vec<(GeoDescriptor, f64)> {
        let geo = |name: &str, params: &[(&str, &str)]| {
            GeoDescriptor::new(
                name,
                params
                    .iter()
                    .map(|(l, c)| (l.to_string(), c.to_string()))
                    .collect(),
            )
        };
        match scope {
            Scope::State => vec![
                (geo("Alabama", &[("state", "01")]), 5000.0),
                (geo("Alaska", &[("state", "02")]), 700.0),
            ],
            // deliberately interleaved across states
            Scope::County => vec![
                (
                    geo("Anchorage Municipality, Alaska", &[("state", "02"), ("county", "020")]),
                    300.0,
                ),
                (geo("CountyTwo, Alabama", &[("state", "01"), ("county", "003")]), 50.0),
                (geo("Emptyville, Alaska", &[("state", "02"), ("county", "999")]), 0.0),
                (geo("CountyOne, Alabama", &[("state", "01"), ("county", "001")]), 100.0),
            ],
            Scope::TribalArea => {
                let level = Scope::TribalArea.level();
                vec![
                    (
                        geo("Zuni Reservation and Off-Reservation Trust Land, NM--AZ", &[(level, "4590")]),
                        10000.0,
                    ),
                    (geo("Akhiok ANVSA, AK", &[(level, "0010")]), 80.0),
                ]
            }
        }
    }

    pub(crate) fn value(code: &str, size: f64) -> f64 {
        match sub_category(code) {
            Some(1) | None => size,
            Some(n) => size * n as f64 / 1000.0,
        }
    }
}

fn sub_category(code: &str) -> Option<u32> {
    code.split_once('_')?.1.strip_suffix('E')?.parse().ok()
}

fn is_catalogued(code: &str) -> bool {
    GroupId::ALL
        .iter()
        .any(|id| id.group().label_of(code).is_some())
}

impl Downloader for FakeService {
    fn download(&self, request: &FetchRequest) -> Result<RawTable> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            return Err(AcsError::ExternalCall {
                request: request.to_string(),
                message: "connection reset".into(),
            });
        }
        let variables: Vec<String> = request
            .variables
            .iter()
            .filter(|c| is_catalogued(c))
            .cloned()
            .collect();
        let rows = Self::geographies(request.scope)
            .into_iter()
            .map(|(geo, size)| RawRow {
                geo,
                values: variables
                    .iter()
                    .map(|c| Some(Self::value(c, size)))
                    .collect(),
            })
            .collect();
        Ok(RawTable { variables, rows })
    }
}
