//! In-memory timeseries table in IAMC layout
//!
//! Rows carry the five identifying columns (`model`, `scenario`, `region`,
//! `variable`, `unit`) plus any number of value columns that are kept but
//! never inspected by the checks.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DatasetError;

pub const KEY_COLUMNS: [&str; 5] = ["model", "scenario", "region", "variable", "unit"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeseriesRecord {
    pub model: String,
    pub scenario: String,
    pub region: String,
    pub variable: String,
    pub unit: String,
    /// Remaining `(column, value)` pairs in file order.
    pub extra: Vec<(String, String)>,
}

impl TimeseriesRecord {
    pub fn new(
        model: impl Into<String>,
        scenario: impl Into<String>,
        region: impl Into<String>,
        variable: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            scenario: scenario.into(),
            region: region.into(),
            variable: variable.into(),
            unit: unit.into(),
            extra: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeseriesFrame {
    records: Vec<TimeseriesRecord>,
}

impl TimeseriesFrame {
    pub fn new(records: Vec<TimeseriesRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Read comma-separated data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut positions = [0usize; 5];
        for (slot, column) in positions.iter_mut().zip(KEY_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == column)
                .ok_or(DatasetError::MissingColumn { column })?;
        }
        let [model, scenario, region, variable, unit] = positions;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
            let extra = headers
                .iter()
                .enumerate()
                .filter(|(idx, _)| !positions.contains(idx))
                .map(|(idx, name)| (name.to_string(), field(idx)))
                .collect();

            records.push(TimeseriesRecord {
                model: field(model),
                scenario: field(scenario),
                region: field(region),
                variable: field(variable),
                unit: field(unit),
                extra,
            });
        }

        tracing::debug!("Loaded {} timeseries rows", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TimeseriesRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeseriesRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn models(&self) -> BTreeSet<&str> {
        self.distinct(|r| &r.model)
    }

    pub fn scenarios(&self) -> BTreeSet<&str> {
        self.distinct(|r| &r.scenario)
    }

    pub fn variables(&self) -> BTreeSet<&str> {
        self.distinct(|r| &r.variable)
    }

    /// Distinct values of one column.
    pub fn distinct<F>(&self, column: F) -> BTreeSet<&str>
    where
        F: Fn(&TimeseriesRecord) -> &String,
    {
        self.records.iter().map(|r| column(r).as_str()).collect()
    }

    /// Copy of the rows belonging to `scenario`.
    pub fn filter_scenario(&self, scenario: &str) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.scenario == scenario)
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<TimeseriesRecord> for TimeseriesFrame {
    fn from_iter<I: IntoIterator<Item = TimeseriesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
