// src/cache/disk.rs

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, Utc};
use glob::glob;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use sha2::{Digest, Sha256};
use std::{
    collections::HashMap,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, warn};

use crate::error::{AcsError, Result};
use crate::fetch::{GeoDescriptor, RawRow, RawTable};

const KEY_META: &str = "acsreport.cache_key";
const FETCHED_AT_META: &str = "acsreport.fetched_at";
const NAME_FIELD: &str = "NAME";
const GEO_FIELD: &str = "geo";

/// Summary of one persisted fetch result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub path: PathBuf,
    pub key: String,
    pub fetched_at: Option<DateTime<Utc>>,
    pub rows: i64,
}

/// Fetch results persisted as one parquet file per cache key.
///
/// Files are named by the SHA-256 of the key; the key itself and the fetch
/// time travel in the schema metadata.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.parquet", hex::encode(digest)))
    }

    /// `Ok(None)` when nothing is stored for `key`.
    pub fn load(&self, key: &str) -> Result<Option<RawTable>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(&path)?)?;
        let schema = builder.schema().clone();
        if schema.metadata().get(KEY_META).map(String::as_str) != Some(key) {
            warn!(path = %path.display(), "cache file does not belong to this key; ignoring");
            return Ok(None);
        }
        let variables: Vec<String> = schema
            .fields()
            .iter()
            .skip(2)
            .map(|f| f.name().clone())
            .collect();

        let mut rows = Vec::new();
        for batch in builder.build()? {
            rows.extend(decode_rows(&batch?, variables.len())?);
        }
        debug!(path = %path.display(), rows = rows.len(), "loaded cached fetch");
        Ok(Some(RawTable { variables, rows }))
    }

    /// Persist `table` under `key`, replacing any previous entry.
    pub fn store(&self, key: &str, table: &RawTable) -> Result<PathBuf> {
        let path = self.path_for(key);
        let tmp = path.with_extension("parquet.tmp");

        let mut fields = vec![
            Field::new(NAME_FIELD, DataType::Utf8, false),
            Field::new(GEO_FIELD, DataType::Utf8, false),
        ];
        fields.extend(
            table
                .variables
                .iter()
                .map(|v| Field::new(v, DataType::Float64, true)),
        );
        let metadata = HashMap::from([
            (KEY_META.to_string(), key.to_string()),
            (FETCHED_AT_META.to_string(), Utc::now().to_rfc3339()),
        ]);
        let schema = Arc::new(Schema::new(fields).with_metadata(metadata));

        let geo = table
            .rows
            .iter()
            .map(|r| serde_json::to_string(&r.geo.params))
            .collect::<Result<Vec<_>, _>>()?;
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(
                table.rows.iter().map(|r| r.geo.name.as_str()),
            )),
            Arc::new(StringArray::from(geo)),
        ];
        for i in 0..table.variables.len() {
            let values: Float64Array = table.rows.iter().map(|r| r.values[i]).collect();
            columns.push(Arc::new(values));
        }
        let batch = RecordBatch::try_new(schema.clone(), columns)?;

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let file = File::create(&tmp)?;
        let mut writer = ArrowWriter::try_new(BufWriter::new(file), schema, Some(props))?;
        writer.write(&batch)?;
        writer.close()?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Every readable entry in the cache directory. Unreadable files are
    /// skipped with a warning.
    pub fn entries(&self) -> Result<Vec<CacheEntry>> {
        let pattern = format!("{}/*.parquet", self.dir.display());
        let paths = glob(&pattern)
            .map_err(|e| AcsError::Config(format!("cache dir pattern {}: {}", pattern, e)))?;

        let mut out = Vec::new();
        for path in paths.filter_map(|p| p.ok()) {
            match read_entry(&path) {
                Ok(entry) => out.push(entry),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable cache file"),
            }
        }
        out.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(out)
    }
}

fn read_entry(path: &Path) -> Result<CacheEntry> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(path)?)?;
    let meta = builder.schema().metadata();
    Ok(CacheEntry {
        path: path.to_path_buf(),
        key: meta.get(KEY_META).cloned().unwrap_or_default(),
        fetched_at: meta
            .get(FETCHED_AT_META)
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc)),
        rows: builder.metadata().file_metadata().num_rows(),
    })
}

fn decode_rows(batch: &RecordBatch, variables: usize) -> Result<Vec<RawRow>> {
    let malformed = |what: &str| AcsError::SchemaViolation(format!("cache file: {}", what));
    if batch.num_columns() != variables + 2 {
        return Err(malformed("unexpected column count"));
    }
    let names = batch
        .column(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| malformed("NAME is not text"))?;
    let geos = batch
        .column(1)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| malformed("geo is not text"))?;
    let values = (0..variables)
        .map(|i| {
            batch
                .column(i + 2)
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| malformed("value column is not float"))
        })
        .collect::<Result<Vec<_>>>()?;

    (0..batch.num_rows())
        .map(|row| {
            let params: Vec<(String, String)> = serde_json::from_str(geos.value(row))?;
            Ok(RawRow {
                geo: GeoDescriptor::new(names.value(row), params),
                values: values
                    .iter()
                    .map(|col| (!col.is_null(row)).then(|| col.value(row)))
                    .collect(),
            })
        })
        .collect()
}
