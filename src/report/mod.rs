//! Assembled per-state and per-tribal-area reports.

use arrow::record_batch::RecordBatch;
use tracing::{info, instrument};

use crate::cache::CachedFetcher;
use crate::catalog::GroupId;
use crate::coverage::{CoverageRow, CoverageTable};
use crate::derive::{aggregate_threshold, combine, percentages, DivisionPolicy, BELOW_185_PERCENT};
use crate::error::{AcsError, Result};
use crate::fetch::{Downloader, FetchRequest};
use crate::geography::{GeographyReference, Scope};
use crate::normalize::{normalize, RowOrder};
use crate::table::{breakdown_to_record_batch, Table};

/// Groups joined into the county table, population first.
const COUNTY_GROUPS: [GroupId; 4] = [
    GroupId::TotalPopulation,
    GroupId::PublicAssistance,
    GroupId::PovertyLevel,
    GroupId::Language,
];

/// Builds report tables on top of a shared `CachedFetcher`. Every table is
/// all-or-nothing: any fetch or schema error aborts it.
pub struct ReportBuilder<'a, D> {
    fetcher: &'a CachedFetcher<D>,
    geography: &'a GeographyReference,
    coverage: Option<&'a CoverageTable>,
    dataset: String,
    year: u16,
    division: DivisionPolicy,
}

impl<'a, D: Downloader> ReportBuilder<'a, D> {
    pub fn new(fetcher: &'a CachedFetcher<D>, dataset: impl Into<String>, year: u16) -> Self {
        Self {
            fetcher,
            geography: GeographyReference::standard(),
            coverage: None,
            dataset: dataset.into(),
            year,
            division: DivisionPolicy::default(),
        }
    }

    pub fn with_geography(mut self, geography: &'a GeographyReference) -> Self {
        self.geography = geography;
        self
    }

    pub fn with_coverage(mut self, coverage: &'a CoverageTable) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }

    /// Total population plus public assistance, poverty below 185% and
    /// language shares for every state and county. State rows lead their
    /// region's block.
    #[instrument(level = "info", skip(self))]
    pub fn county_table(&self) -> Result<Table> {
        let groups: Vec<_> = COUNTY_GROUPS.iter().map(|id| id.group()).collect();
        let combined = self.fetcher.fetch_combined(
            &self.dataset,
            self.year,
            &[Scope::State, Scope::County],
            &groups,
        )?;
        let raw = combined.table();
        let order = RowOrder::ValueWithinRegion;

        let population = normalize(raw, &GroupId::TotalPopulation.group(), order)?;
        let assistance = percentages(
            &normalize(raw, &GroupId::PublicAssistance.group(), order)?,
            self.division,
        )?;

        let poverty_group = GroupId::PovertyLevel.group();
        let buckets: Vec<&str> = poverty_group.labels().into_iter().skip(1).collect();
        let poverty = percentages(
            &aggregate_threshold(
                &normalize(raw, &poverty_group, order)?,
                &buckets,
                BELOW_185_PERCENT,
            )?,
            self.division,
        )?;

        let language = percentages(&normalize(raw, &GroupId::Language.group(), order)?, self.division)?;

        let table = combine(&population, &[&assistance, &poverty, &language])?;
        info!(rows = table.num_rows(), columns = table.num_columns(), "county table ready");
        Ok(table)
    }

    /// Raw counts of `group` for every state, alphabetical.
    pub fn state_table(&self, group: GroupId) -> Result<Table> {
        self.scope_table(Scope::State, group)
    }

    /// Raw counts of `group` for every tribal area, in service order.
    pub fn tribal_table(&self, group: GroupId) -> Result<Table> {
        self.scope_table(Scope::TribalArea, group)
    }

    fn scope_table(&self, scope: Scope, group: GroupId) -> Result<Table> {
        let group = group.group();
        let request = FetchRequest::new(self.dataset.as_str(), self.year, scope, group.codes())?;
        let raw = self.fetcher.fetch(&request)?;
        normalize(&raw, &group, RowOrder::for_scope(scope))
    }

    /// Coverage, detailed language shares and the county block for one state,
    /// given by display name (any case) or two-digit FIPS code.
    #[instrument(level = "info", skip(self))]
    pub fn state_report(&self, name_or_fips: &str) -> Result<StateReport> {
        let (code, name) = self
            .geography
            .resolve_state(name_or_fips)
            .ok_or_else(|| AcsError::NoMatchingGeography(name_or_fips.to_string()))?;

        let state_row = self
            .state_table(GroupId::DetailedLanguage)?
            .filter_region(code);
        let key = match state_row.index() {
            [key] => key.clone(),
            _ => return Err(AcsError::NoMatchingGeography(name.to_string())),
        };
        let detailed_languages = percentages(&state_row, self.division)?
            .row(&key)
            .unwrap_or_default();

        let counties = self.county_table()?.filter_region(code);
        let coverage = self.coverage.and_then(|c| c.lookup(name)).cloned();

        info!(state = name, counties = counties.num_rows(), coverage = coverage.is_some(), "state report ready");
        Ok(StateReport {
            code: code.to_string(),
            name: name.to_string(),
            coverage,
            detailed_languages,
            counties,
        })
    }

    /// Total population and language shares for one tribal area.
    #[instrument(level = "info", skip(self))]
    pub fn tribal_report(&self, identifier: &str) -> Result<TribalReport> {
        let name = self
            .geography
            .tribal_area(identifier)
            .ok_or_else(|| AcsError::NoMatchingGeography(identifier.to_string()))?;

        let groups = [GroupId::TotalPopulation.group(), GroupId::Language.group()];
        let combined =
            self.fetcher
                .fetch_combined(&self.dataset, self.year, &[Scope::TribalArea], &groups)?;
        let order = RowOrder::for_scope(Scope::TribalArea);
        let population = normalize(combined.table(), &groups[0], order)?;
        let language = percentages(&normalize(combined.table(), &groups[1], order)?, self.division)?;

        let table = combine(&population, &[&language])?.filter_place(name);
        if table.is_empty() {
            return Err(AcsError::NoMatchingGeography(name.to_string()));
        }
        Ok(TribalReport {
            name: name.to_string(),
            table,
        })
    }
}

#[derive(Debug, Clone)]
pub struct StateReport {
    /// Two-digit FIPS code.
    pub code: String,
    pub name: String,
    /// `None` without a coverage table or when the state is not in it.
    pub coverage: Option<CoverageRow>,
    /// (label, share of speakers) in catalog order.
    pub detailed_languages: Vec<(String, Option<f64>)>,
    /// County block of the county table, state row first.
    pub counties: Table,
}

impl StateReport {
    /// Named batches for printing or writing out.
    pub fn batches(&self) -> Result<Vec<(String, RecordBatch)>> {
        let mut out = Vec::with_capacity(3);
        if let Some(coverage) = &self.coverage {
            let entries: Vec<_> = coverage
                .values
                .iter()
                .map(|v| (v.column.clone(), v.value))
                .collect();
            out.push((
                format!("coverage_{}", self.code),
                breakdown_to_record_batch(&entries, "measure", "value")?,
            ));
        }
        out.push((
            format!("languages_{}", self.code),
            breakdown_to_record_batch(&self.detailed_languages, "language", "percentage of speakers")?,
        ));
        out.push((format!("counties_{}", self.code), self.counties.to_record_batch()?));
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct TribalReport {
    pub name: String,
    pub table: Table,
}

impl TribalReport {
    pub fn batches(&self) -> Result<Vec<(String, RecordBatch)>> {
        Ok(vec![("tribal".to_string(), self.table.to_record_batch()?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::with_retry;
    use crate::table::GeoKey;
    use crate::testing::{init_test_logging, FakeService};
    use std::time::Duration;

    fn approx(a: Option<f64>, b: f64) -> bool {
        matches!(a, Some(a) if (a - b).abs() < 1e-12)
    }

    fn names(table: &Table) -> Vec<&str> {
        table.index().iter().map(|k| k.place_name.as_str()).collect()
    }

    #[test]
    fn county_table_joins_every_indicator() {
        init_test_logging();
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019);

        let table = builder.county_table().unwrap();
        assert_eq!(service.calls(), 2);

        let labels = table.labels();
        assert_eq!(labels[0], "total population");
        assert_eq!(labels[1], "received public assistance");
        assert_eq!(labels[2], BELOW_185_PERCENT);
        assert_eq!(labels.len(), 3 + GroupId::Language.group().len() - 1);
        assert!(!labels.contains(&"total speakers"));

        assert_eq!(
            names(&table),
            vec![
                "Alabama",
                "CountyOne, Alabama",
                "CountyTwo, Alabama",
                "Alaska",
                "Anchorage Municipality, Alaska",
                "Emptyville, Alaska",
            ]
        );

        let one = GeoKey::new("01", "CountyOne, Alabama");
        assert_eq!(table.value(&one, "total population"), Some(100.0));
        assert!(approx(table.value(&one, "received public assistance"), 0.002));
        assert!(approx(table.value(&one, BELOW_185_PERCENT), 0.035));
        assert_eq!(table.value(&one, "spanish speakers"), Some(0.005));

        let empty = GeoKey::new("02", "Emptyville, Alaska");
        assert!(table.value(&empty, "spanish speakers").unwrap().is_nan());

        builder.county_table().unwrap();
        assert_eq!(service.calls(), 2);
    }

    #[test]
    fn zero_population_fails_under_strict_division() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019).with_division(DivisionPolicy::Fail);
        let err = builder.county_table().unwrap_err();
        assert!(matches!(err, AcsError::UndefinedRatio { row, .. } if row.contains("Emptyville")));
    }

    #[test]
    fn state_table_is_alphabetical() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let table = ReportBuilder::new(&fetcher, "acs5", 2019)
            .state_table(GroupId::TotalPopulation)
            .unwrap();
        assert_eq!(names(&table), vec!["Alabama", "Alaska"]);
        assert_eq!(table.labels(), vec!["total population"]);
    }

    #[test]
    fn state_report_by_name_or_code() {
        init_test_logging();
        let coverage = CoverageTable::from_reader(
            "State,Number Eligible,Coverage Rate\nAlabama,\"150,000\",60%\n".as_bytes(),
        )
        .unwrap();
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019).with_coverage(&coverage);

        let report = builder.state_report("alabama").unwrap();
        assert_eq!(report.code, "01");
        assert_eq!(report.name, "Alabama");
        assert_eq!(
            report.coverage.as_ref().and_then(|c| c.get("Coverage Rate")).and_then(|v| v.value),
            Some(0.6)
        );
        assert_eq!(
            report.detailed_languages.len(),
            GroupId::DetailedLanguage.group().len() - 1
        );
        assert_eq!(
            report.detailed_languages[0],
            ("spanish speakers".to_string(), Some(0.005))
        );
        assert_eq!(
            names(&report.counties),
            vec!["Alabama", "CountyOne, Alabama", "CountyTwo, Alabama"]
        );
        // detailed languages for states, then states + counties
        assert_eq!(service.calls(), 3);

        let by_code = builder.state_report("01").unwrap();
        assert_eq!(by_code.name, "Alabama");
        assert_eq!(service.calls(), 3);

        let batches = report.batches().unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].1.num_rows(), 3);

        let alaska = builder.state_report("Alaska").unwrap();
        assert!(alaska.coverage.is_none());
    }

    #[test]
    fn unknown_state_is_no_matching_geography() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019);

        let err = builder.state_report("Atlantis").unwrap_err();
        assert!(matches!(err, AcsError::NoMatchingGeography(s) if s == "Atlantis"));
        assert_eq!(service.calls(), 0);

        // in the reference, but the service has no row for it
        let err = builder.state_report("Puerto Rico").unwrap_err();
        assert!(matches!(err, AcsError::NoMatchingGeography(_)));
    }

    #[test]
    fn tribal_report_selects_one_area() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019);

        let report = builder.tribal_report("akhiok anvsa, ak").unwrap();
        assert_eq!(report.name, "Akhiok ANVSA, AK");
        assert_eq!(report.table.num_rows(), 1);
        let key = &report.table.index()[0];
        assert_eq!(key.region_code, "0010");
        assert_eq!(report.table.value(key, "total population"), Some(80.0));
        assert!(approx(report.table.value(key, "spanish speakers"), 0.005));
        assert_eq!(report.batches().unwrap()[0].1.num_rows(), 1);
        assert_eq!(service.calls(), 1);

        let err = builder.tribal_report("Nowhere Reservation").unwrap_err();
        assert!(matches!(err, AcsError::NoMatchingGeography(_)));
        let err = builder
            .tribal_report("Navajo Nation Reservation and Off-Reservation Trust Land, AZ--NM--UT")
            .unwrap_err();
        assert!(matches!(err, AcsError::NoMatchingGeography(_)));
    }

    #[test]
    fn transient_failures_are_retried() {
        let service = FakeService::new().failing(1);
        let fetcher = CachedFetcher::new(&service);
        let builder = ReportBuilder::new(&fetcher, "acs5", 2019);

        assert!(builder.county_table().is_err());
        let table = with_retry(2, Duration::from_millis(1), || builder.county_table()).unwrap();
        assert_eq!(table.num_rows(), 6);
        assert_eq!(service.calls(), 3);
    }
}
