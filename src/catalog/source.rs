use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::rows::Row;
use crate::error::{PlannerError, Result};

/// Where meal, product and week definitions come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All rows of a named range within a dataset.
    async fn fetch_range(&self, dataset: &str, range: &str) -> Result<Vec<Row>>;
}

/// Catalog exported as CSV files, one per range: `<root>/<dataset>/<range>.csv`.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    root: PathBuf,
}

impl CsvCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn range_path(&self, dataset: &str, range: &str) -> PathBuf {
        self.root.join(dataset).join(format!("{}.csv", range))
    }
}

#[async_trait]
impl CatalogSource for CsvCatalog {
    async fn fetch_range(&self, dataset: &str, range: &str) -> Result<Vec<Row>> {
        let path = self.range_path(dataset, range);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| PlannerError::Acquisition(format!("reading {}: {}", path.display(), e)))?;

        let rows = parse_csv_rows(&bytes).map_err(|e| {
            PlannerError::Acquisition(format!("parsing {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded catalog range");
        Ok(rows)
    }
}

/// Parse CSV with a header line into rows, skipping blank lines.
pub fn parse_csv_rows(bytes: &[u8]) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_csv_rows_skips_blank_lines() {
        let csv = "Slug,Name\nsoup,Soup\n,\nstew,Stew\n";
        let rows = parse_csv_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Name").map(String::as_str), Some("Stew"));
    }

    #[tokio::test]
    async fn test_csv_catalog_reads_range() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("week12")).unwrap();
        fs::write(
            dir.path().join("week12").join("Meals.csv"),
            "Slug,Name\n  soup , Soup \n",
        )
        .unwrap();

        let catalog = CsvCatalog::new(dir.path());
        let rows = catalog.fetch_range("week12", "Meals").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Slug").map(String::as_str), Some("soup"));
    }

    #[tokio::test]
    async fn test_unreadable_csv_is_acquisition_failure() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("week12")).unwrap();
        fs::write(
            dir.path().join("week12").join("Meals.csv"),
            b"Slug,Name\nsoup,\xff\xfe\n",
        )
        .unwrap();

        let catalog = CsvCatalog::new(dir.path());
        let err = catalog.fetch_range("week12", "Meals").await.unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(ref msg) if msg.contains("Meals.csv")));
    }

    #[tokio::test]
    async fn test_missing_range_is_acquisition_failure() {
        let dir = tempdir().unwrap();
        let catalog = CsvCatalog::new(dir.path());
        let err = catalog.fetch_range("nope", "Meals").await.unwrap_err();
        assert!(matches!(err, PlannerError::Acquisition(_)));
    }
}
