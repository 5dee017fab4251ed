//! Load valuation cases from CSV
//!
//! Columns use the same camelCase names as the JSON form payload, plus a
//! leading `caseId`. Ownership ratios may be left blank (full ownership).

use super::{parse_date, InputCase};
use crate::error::ValuationError;
use csv::Reader;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Failure while reading a case file
#[derive(Debug, Error)]
pub enum CaseLoadError {
    #[error("cannot read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed as CSV but holds an invalid value
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: ValuationError,
    },
}

/// A case together with the identifier it was filed under
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub case_id: String,
    pub case: InputCase,
}

/// Raw CSV row; dates and gender stay text until validated
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    case_id: String,
    inheritance_date: String,
    division_date: String,
    construction_date: String,
    structure: String,
    building_value: f64,
    building_area: f64,
    rental_area: f64,
    rental_ratio: f64,
    land_area: f64,
    road_price: f64,
    land_correction: f64,
    lease_ratio: f64,
    spouse_birthday: String,
    spouse_gender: String,
    #[serde(default)]
    building_ownership_ratio: Option<f64>,
    #[serde(default)]
    land_ownership_ratio: Option<f64>,
}

impl CsvRow {
    fn to_record(self) -> Result<CaseRecord, ValuationError> {
        let case = InputCase {
            inheritance_date: parse_date("inheritanceDate", &self.inheritance_date)?,
            division_date: parse_date("divisionDate", &self.division_date)?,
            construction_date: parse_date("constructionDate", &self.construction_date)?,
            structure: self.structure.trim().to_string(),
            building_value: self.building_value,
            building_area: self.building_area,
            rental_area: self.rental_area,
            rental_ratio: self.rental_ratio,
            land_area: self.land_area,
            road_price: self.road_price,
            land_correction: self.land_correction,
            lease_ratio: self.lease_ratio,
            spouse_birthday: parse_date("spouseBirthday", &self.spouse_birthday)?,
            spouse_gender: self.spouse_gender.parse()?,
            building_ownership_ratio: self.building_ownership_ratio.unwrap_or(100.0),
            land_ownership_ratio: self.land_ownership_ratio.unwrap_or(100.0),
        };

        Ok(CaseRecord { case_id: self.case_id, case })
    }
}

/// Parse every row, keeping per-row failures instead of stopping
fn read_rows<R: Read>(reader: R) -> Vec<Result<CaseRecord, CaseLoadError>> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = match csv_reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return vec![Err(e.into())],
    };

    csv_reader
        .records()
        .map(|result| {
            let record = result?;
            // Line the record starts on; quoted fields may span several lines
            let line = record.position().map_or(0, |pos| pos.line());
            let row: CsvRow = record.deserialize(Some(&headers))?;
            row.to_record().map_err(|source| CaseLoadError::Row { line, source })
        })
        .collect()
}

/// Load all cases from a reader, failing on the first bad row
pub fn load_cases_from_reader<R: Read>(reader: R) -> Result<Vec<CaseRecord>, CaseLoadError> {
    read_rows(reader).into_iter().collect()
}

/// Load all cases from a CSV file, failing on the first bad row
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<CaseRecord>, CaseLoadError> {
    let file = std::fs::File::open(path)?;
    load_cases_from_reader(file)
}

/// Load cases from a reader, splitting good rows from rejected ones
pub fn load_cases_lenient<R: Read>(reader: R) -> (Vec<CaseRecord>, Vec<CaseLoadError>) {
    let mut cases = Vec::new();
    let mut rejected = Vec::new();

    for row in read_rows(reader) {
        match row {
            Ok(record) => cases.push(record),
            Err(e) => rejected.push(e),
        }
    }

    (cases, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Gender;

    const HEADER: &str = "caseId,inheritanceDate,divisionDate,constructionDate,structure,buildingValue,buildingArea,rentalArea,rentalRatio,landArea,roadPrice,landCorrection,leaseRatio,spouseBirthday,spouseGender,buildingOwnershipRatio,landOwnershipRatio";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_load_cases() {
        let text = csv_with(&[
            "A-1,2024-01-01,2024-04-01,2000-01-01,鉄骨鉄筋コンクリート造又は鉄筋コンクリート造,30000000,100,20,80,120,200000,100,90,1960-01-01,female,100,100",
            "A-2,2023-05-10,2023-09-30,1995-03-15,木造又は合成樹脂造,8000000,95.5,0,0,165.2,150000,95,70,1948-11-03,male,,50",
        ]);

        let cases = load_cases_from_reader(text.as_bytes()).expect("Failed to load cases");
        assert_eq!(cases.len(), 2);

        let a1 = &cases[0];
        assert_eq!(a1.case_id, "A-1");
        assert_eq!(a1.case.spouse_gender, Gender::Female);
        assert_eq!(a1.case.rental_area, 20.0);

        let a2 = &cases[1];
        assert_eq!(a2.case.spouse_gender, Gender::Male);
        assert_eq!(a2.case.building_ownership_ratio, 100.0);
        assert_eq!(a2.case.land_ownership_ratio, 50.0);
        assert_eq!(a2.case.building_area, 95.5);
    }

    #[test]
    fn test_bad_date_reports_line() {
        let text = csv_with(&[
            "A-1,2024-01-01,2024-04-01,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-01-01,female,100,100",
            "A-2,2024-01-01,not-a-date,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-01-01,female,100,100",
        ]);

        let err = load_cases_from_reader(text.as_bytes()).unwrap_err();
        match err {
            CaseLoadError::Row { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, ValuationError::InvalidDate { field: "divisionDate", .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_line_counts_multiline_fields() {
        // The quoted structure of A-1 covers lines 2 and 3
        let text = csv_with(&[
            "A-1,2024-01-01,2024-04-01,2000-01-01,\"木造\n(増築部分あり)\",1,1,0,0,1,1,100,90,1960-01-01,female,100,100",
            "A-2,2024-01-01,2024-04-01,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-13-01,female,100,100",
        ]);

        let (cases, rejected) = load_cases_lenient(text.as_bytes());
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case.structure, "木造\n(増築部分あり)");
        match &rejected[..] {
            [CaseLoadError::Row { line, source }] => {
                assert_eq!(*line, 4);
                assert!(matches!(source, ValuationError::InvalidDate { field: "spouseBirthday", .. }));
            }
            other => panic!("unexpected rejections: {other:?}"),
        }
    }

    #[test]
    fn test_load_cases_from_file() {
        let path = std::env::temp_dir().join(format!("residence_right_cases_{}.csv", std::process::id()));
        std::fs::write(
            &path,
            csv_with(&["A-1,2024-01-01,2024-04-01,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-01-01,male,100,100"]),
        )
        .unwrap();

        let cases = load_cases(&path).expect("Failed to load cases");
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case.spouse_gender, Gender::Male);

        assert!(matches!(load_cases(&path), Err(CaseLoadError::Io(_))));
    }

    #[test]
    fn test_lenient_load_keeps_good_rows() {
        let text = csv_with(&[
            "A-1,2024-01-01,2024-04-01,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-01-01,female,100,100",
            "A-2,2024-01-01,2024-04-01,2000-01-01,木造,1,1,0,0,1,1,100,90,1960-01-01,other,100,100",
            "A-3,2024-01-01,2024-04-01,2000-01-01,木造,abc,1,0,0,1,1,100,90,1960-01-01,male,100,100",
        ]);

        let (cases, rejected) = load_cases_lenient(text.as_bytes());
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case_id, "A-1");
        assert_eq!(rejected.len(), 2);
        assert!(matches!(
            rejected[0],
            CaseLoadError::Row { source: ValuationError::UnknownGender(_), .. }
        ));
        assert!(matches!(rejected[1], CaseLoadError::Csv(_)));
    }
}
