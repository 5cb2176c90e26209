use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};

/// An ordered set of rows sharing one column schema, parsed from or headed
/// for one delimited-text file. Values stay strings end to end; nothing here
/// coerces types, so a write-then-read round trip reproduces the table
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Parse raw delimited text. The header row becomes the column schema;
    /// short or long rows are tolerated (grapher exports occasionally carry
    /// footer annotations).
    pub fn parse(text: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { columns, rows })
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Serialize as header + one line per row, creating parent directories
    /// as needed and overwriting any existing file. The write is not atomic;
    /// the pipelines are rerunnable so a truncated file just means run it
    /// again.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::SchemaMismatch {
            column: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Entity,Code,Year,\"Unemployment rate, ages 15-24\"
France,FRA,2000,18.6
United Kingdom,GBR,2000,12.1
";

    #[test]
    fn parse_keeps_header_order_and_values() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        assert_eq!(
            ds.columns(),
            &["Entity", "Code", "Year", "Unemployment rate, ages 15-24"]
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0][0], "France");
        assert_eq!(ds.rows()[1][3], "12.1");
    }

    #[test]
    fn write_then_read_round_trips() {
        let ds = Dataset::new(
            vec![
                "Entity".into(),
                "Code".into(),
                "Year".into(),
                "Minimum wage (USD)".into(),
            ],
            vec![
                vec!["France".into(), "FRA".into(), "2000".into(), "6.41".into()],
                vec![
                    "United Kingdom".into(),
                    "GBR".into(),
                    "2000".into(),
                    "4.70".into(),
                ],
            ],
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("wages.csv");
        ds.write_to(&path).unwrap();

        let back = Dataset::read_from(&path).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("out.csv");
        let ds = Dataset::new(vec!["Entity".into()], vec![vec!["France".into()]]);
        ds.write_to(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn write_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let big = Dataset::new(
            vec!["Entity".into()],
            vec![vec!["France".into()], vec!["Germany".into()]],
        );
        big.write_to(&path).unwrap();

        let small = Dataset::new(vec!["Entity".into()], vec![vec!["France".into()]]);
        small.write_to(&path).unwrap();

        let back = Dataset::read_from(&path).unwrap();
        assert_eq!(back, small);
    }

    #[test]
    fn missing_file_is_its_own_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match Dataset::read_from(&path) {
            Err(Error::MissingInput { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn require_column_reports_the_missing_name() {
        let ds = Dataset::parse("Entity,Year\nFrance,2000\n").unwrap();
        assert_eq!(ds.require_column("Year").unwrap(), 1);
        match ds.require_column("Minimum wage (USD)") {
            Err(Error::SchemaMismatch { column }) => {
                assert_eq!(column, "Minimum wage (USD)")
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}
