// src/table/arrow.rs

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
    sync::Arc,
};

use super::Table;
use crate::error::Result;

pub const REGION_CODE_COLUMN: &str = "region code";
pub const PLACE_NAME_COLUMN: &str = "place name";

impl Table {
    /// Index as two Utf8 columns, then one nullable Float64 per column.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let mut fields = vec![
            Field::new(REGION_CODE_COLUMN, DataType::Utf8, false),
            Field::new(PLACE_NAME_COLUMN, DataType::Utf8, false),
        ];
        fields.extend(
            self.columns()
                .iter()
                .map(|c| Field::new(&c.label, DataType::Float64, true)),
        );

        let mut arrays: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(
                self.index().iter().map(|k| k.region_code.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                self.index().iter().map(|k| k.place_name.as_str()),
            )),
        ];
        arrays.extend(
            self.columns()
                .iter()
                .map(|c| Arc::new(Float64Array::from(c.values.clone())) as ArrayRef),
        );

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }
}

/// A transposed row (label, value) as a two-column batch.
pub fn breakdown_to_record_batch(
    entries: &[(String, Option<f64>)],
    label_column: &str,
    value_column: &str,
) -> Result<RecordBatch> {
    let schema = Schema::new(vec![
        Field::new(label_column, DataType::Utf8, false),
        Field::new(value_column, DataType::Float64, true),
    ]);
    let labels = StringArray::from_iter_values(entries.iter().map(|(l, _)| l.as_str()));
    let values: Float64Array = entries.iter().map(|(_, v)| *v).collect();
    Ok(RecordBatch::try_new(
        Arc::new(schema),
        vec![Arc::new(labels), Arc::new(values)],
    )?)
}

/// Write `batch` to `path` as a single snappy-compressed parquet file.
/// The file appears atomically.
pub fn write_parquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("parquet.tmp");

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let file = File::create(&tmp)?;
    let mut writer = ArrowWriter::try_new(BufWriter::new(file), batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Render `batch` as an ASCII table.
pub fn pretty(batch: &RecordBatch) -> Result<String> {
    Ok(pretty_format_batches(std::slice::from_ref(batch))?.to_string())
}
