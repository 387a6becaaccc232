//! Tests for bank file inspection.

use rstest::rstest;

use super::*;

#[rstest]
#[case("mutaties.csv", Some(FileFormat::Csv))]
#[case("MUTATIES.CSV", Some(FileFormat::Csv))]
#[case("export.xlsx", Some(FileFormat::Spreadsheet))]
#[case("oud.xls", Some(FileFormat::Spreadsheet))]
#[case("open.ods", Some(FileFormat::Spreadsheet))]
#[case("afschrift.pdf", None)]
#[case("zonder_extensie", None)]
fn test_format_from_filename(#[case] filename: &str, #[case] expected: Option<FileFormat>) {
    assert_eq!(FileFormat::from_filename(filename), expected);
}

#[test]
fn test_inspect_csv() {
    let csv = b"datum,omschrijving,bedrag\n2024-01-02,Huur,-1200.00\n2024-01-05,Factuur 17,2500.00\n";

    let summary = BankFileIngestor::new().inspect("mutaties.csv", csv).unwrap();

    assert_eq!(summary.format, FileFormat::Csv);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns, 3);
    assert_eq!(summary.column_names, vec!["datum", "omschrijving", "bedrag"]);
    assert_eq!(summary.filename, "mutaties.csv");
}

#[test]
fn test_inspect_semicolon_csv() {
    let csv = b"Datum;Naam / Omschrijving;Rekening;Bedrag (EUR)\n20240102;Huur;NL00BANK0123456789;1200,00\n";

    let summary = BankFileIngestor::new().inspect("ing.csv", csv).unwrap();

    assert_eq!(summary.columns, 4);
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.column_names[3], "Bedrag (EUR)");
}

#[test]
fn test_inspect_header_only_csv() {
    let summary = BankFileIngestor::new()
        .inspect("leeg.csv", b"datum,bedrag\n")
        .unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(summary.columns, 2);
}

#[test]
fn test_inspect_empty_csv() {
    let err = BankFileIngestor::new().inspect("leeg.csv", b"").unwrap_err();
    assert!(matches!(err, IngestError::Empty));
}

#[test]
fn test_inspect_unsupported_format() {
    let err = BankFileIngestor::new()
        .inspect("afschrift.pdf", b"%PDF-1.4")
        .unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat(name) if name == "afschrift.pdf"));
}

const WORKBOOK: &[u8] = include_bytes!("fixtures/mutaties.xlsx");

#[test]
fn test_inspect_xlsx_first_worksheet() {
    let summary = BankFileIngestor::new()
        .inspect("mutaties.xlsx", WORKBOOK)
        .unwrap();

    assert_eq!(summary.format, FileFormat::Spreadsheet);
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 3);
    assert_eq!(summary.column_names, vec!["datum", "omschrijving", "bedrag"]);
}

#[test]
fn test_inspect_corrupt_spreadsheet() {
    let err = BankFileIngestor::new()
        .inspect("kapot.xlsx", b"not a zip archive")
        .unwrap_err();
    assert!(matches!(err, IngestError::Spreadsheet(_)));
}

#[test]
fn test_error_mapping() {
    use jaarrekening_shared::AppError;

    let unsupported: AppError = IngestError::UnsupportedFormat("a.pdf".into()).into();
    assert_eq!(unsupported.status_code(), 415);

    let empty: AppError = IngestError::Empty.into();
    assert_eq!(empty.status_code(), 400);
    assert_eq!(empty.to_string(), "Validation error: File contains no data");
}
