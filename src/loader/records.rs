use crate::domain::Record;
use crate::loader::{LoaderError, read_csv};
use serde_json::{Map, Number, Value};
use std::path::Path;
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// Cell contents that are read as a missing value.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA",
    "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[instrument]
pub async fn load_records(path: &Path) -> Result<Vec<Record>, LoaderError> {
    info!("📁 Loading records...");
    let records = read_csv(path, parse_records).await?;

    let located = records.iter().filter(|record| record.point().is_some()).count();
    info!("📁 Loading records... OK, {} loaded, {} without coordinates", records.len(), records.len() - located);
    Ok(records)
}

fn parse_records(content: &str) -> Result<Vec<Record>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(content.as_bytes());
    let headers = unique_headers(reader.headers()?);

    reader
        .records()
        .map(|row| {
            let row = row?;
            let fields = headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).map_or(Value::Null, cell_value)))
                .collect::<Map<String, Value>>();
            Ok(Record::new(fields))
        })
        .collect()
}

/// Repeated headers get a `.1`, `.2`, ... suffix so no column is lost.
fn unique_headers(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .map(|header| {
            let mut name = header.to_string();
            let mut suffix = 0;
            while !seen.insert(name.clone()) {
                suffix += 1;
                name = format!("{}.{}", header, suffix);
            }
            if suffix > 0 {
                warn!("⚠️ Duplicate column '{}' renamed to '{}'", header, name);
            }
            name
        })
        .collect()
}

fn cell_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if NA_MARKERS.contains(&trimmed) {
        return Value::Null;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }

    // Infinite values have no JSON number, they stay text
    match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(cell.to_string()),
    }
}
