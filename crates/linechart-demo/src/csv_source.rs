// File: crates/linechart-demo/src/csv_source.rs
// Summary: CSV-backed data provider; reads x/y columns into points.

use anyhow::{Context, Result};
use linechart_core::{DataProvider, Point};
use std::path::Path;

pub struct CsvDataProvider {
    points: Vec<Point>,
}

impl CsvDataProvider {
    /// Load `x`/`y` columns (by header name, else the first two columns).
    /// Rows that fail to parse are skipped.
    pub fn open(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        log::debug!("headers: {:?}", headers);

        let idx = |name: &str| headers.iter().position(|h| h == name);
        let (i_x, i_y) = match (idx("x"), idx("y")) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                log::warn!("no x/y headers in {}; using the first two columns", path.display());
                (0, 1)
            }
        };

        let mut points = Vec::new();
        let mut skipped = 0usize;
        for rec in rdr.records() {
            let rec = rec?;
            let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
            match (parse(i_x), parse(i_y)) {
                (Some(x), Some(y)) => points.push(Point::new(x, y)),
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("skipped {} unparsable rows in {}", skipped, path.display());
        }
        Ok(Self { points })
    }
}

impl DataProvider for CsvDataProvider {
    fn points(&mut self) -> Vec<Point> {
        self.points.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let p = dir.path().join(name);
        std::fs::write(&p, body).expect("write csv");
        p
    }

    #[test]
    fn reads_named_columns_in_any_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let p = write(&dir, "a.csv", "label,Y,X\na, 1 ,0\nb,10,1\n");
        let mut src = CsvDataProvider::open(&p).expect("open");
        assert_eq!(src.points(), vec![Point::new(0.0, 1.0), Point::new(1.0, 10.0)]);
    }

    #[test]
    fn falls_back_to_first_two_columns_and_skips_bad_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let p = write(&dir, "b.csv", "time,value\n0,5\n1,oops\n2,7\n");
        let mut src = CsvDataProvider::open(&p).expect("open");
        assert_eq!(src.points(), vec![Point::new(0.0, 5.0), Point::new(2.0, 7.0)]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(CsvDataProvider::open(Path::new("/no/such/points.csv")).is_err());
    }
}
