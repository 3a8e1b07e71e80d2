//! End-to-end extraction behaviour on card-shaped OCR text.

use aadhaar_core::extract::rules::{extract_date_of_birth, extract_id_number};
use aadhaar_core::{AadhaarParser, DocumentVerifier, ExtractedRecord, Gender, RecordParser};
use pretty_assertions::assert_eq;

fn parse(text: &str) -> ExtractedRecord {
    AadhaarParser::new().parse(text).record
}

#[test]
fn id_number_separators_removed() {
    for text in [
        "2345 6789 0123",
        "23456789 0123",
        "2345 67890123",
        "234567890123",
        "Aadhaar No: 2345 6789 0123 issued",
    ] {
        let id = parse(text).id_number.unwrap();
        assert_eq!(id, "234567890123");
        assert_eq!(id.len(), 12);
        assert!(id.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn postal_code_absent_without_six_digit_run() {
    let text = "Government of India\nRavi Kumar\n2345 6789 0123\n15/08/1990\n1800 300 1947";
    assert_eq!(parse(text).postal_code, None);
}

#[test]
fn date_of_birth_kept_verbatim() {
    assert_eq!(
        parse("Year 2001\nDOB: 07-03-2001\nAlt 08/03/2001").date_of_birth,
        Some("07-03-2001".to_string())
    );
    assert_eq!(extract_date_of_birth("DOB 31/12/1999"), Some("31/12/1999".to_string()));
}

#[test]
fn gender_is_canonical() {
    for (input, expected) in [
        ("MALE", Gender::Male),
        ("male", Gender::Male),
        ("FeMaLe", Gender::Female),
        ("OTHER", Gender::Other),
    ] {
        let record = parse(input);
        assert_eq!(record.gender, Some(expected));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gender"], expected.as_str());
    }
    assert_eq!(parse("Mail\nFemail").gender, None);
}

#[test]
fn name_from_hindi_then_latin_pair() {
    assert_eq!(
        parse("भारत सरकार\nRavi Kumar Sharma").name,
        Some("Ravi Kumar Sharma".to_string())
    );
}

#[test]
fn address_block_and_postal_code() {
    let text = "Unique Identification Authority of India\n\
        Address:\n\
        W/O Suresh Patil,\n\
        Plot 21 Shanti Nagar,\n\
        Pune Maharashtra\n\
        411001\n\
        www.uidai.gov.in";

    let record = parse(text);
    assert_eq!(
        record.address,
        Some("W/O Suresh Patil, Plot 21 Shanti Nagar, Pune Maharashtra".to_string())
    );
    assert_eq!(record.postal_code, Some("411001".to_string()));
}

#[test]
fn name_falls_back_to_shape_match() {
    let text = "Government of India\nPriya Nair\nDOB: 02/02/1992\nFEMALE";
    assert_eq!(parse(text).name, Some("Priya Nair".to_string()));
}

#[test]
fn extraction_is_idempotent() {
    let text = "भारत सरकार\nGovernment of India\nरवि कुमार\nRavi Kumar\nDOB: 15/08/1990\nMale\n\
        2345 6789 0123\nAddress:\nHouse 12 MG Road\nBengaluru 560001";
    let parser = AadhaarParser::new();
    let first = parser.parse(text).record;
    let second = parser.parse(text).record;
    assert_eq!(first, second);
    assert_eq!(first, parse(text));
}

#[test]
fn noise_lines_never_selected() {
    let text = "भारत सरकार\nGovernment Of India\nMera Aadhaar Meri\nAddress:\n\
        Government of India\nUnique Identification Authority of India\n1947";
    let record = parse(text);
    assert_eq!(record.name, None);
    assert_eq!(record.address, None);
}

#[test]
fn concurrent_parsing_shares_one_parser() {
    let parser = AadhaarParser::new();
    let parser = &parser;
    let texts = [
        "भारत सरकार\nRavi Kumar Sharma\n2345 6789 0123",
        "Anita Desai\nFemale\n01-12-1985",
    ];

    let records: Vec<ExtractedRecord> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| scope.spawn(move || parser.parse(text).record))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(records[0].name.as_deref(), Some("Ravi Kumar Sharma"));
    assert_eq!(records[1].name.as_deref(), Some("Anita Desai"));
    assert_eq!(records[1].id_number, None);
    assert_eq!(extract_id_number(texts[0]), records[0].id_number);
}

#[test]
fn verifier_end_to_end() {
    let front = "भारत सरकार\nGovernment of India\nरवि कुमार शर्मा\nRavi Kumar Sharma\n\
        DOB: 15/08/1990\nपुरुष / MALE\n2345 6789 0124";
    let back = "Unique Identification Authority of India\nAddress:\nS/O Ramesh Sharma,\n\
        12 MG Road,\nBengaluru Karnataka 560001\n1947\nhelp@uidai.gov.in";

    let result = DocumentVerifier::default().verify(front, back).unwrap();
    assert_eq!(result.record.populated_fields(), 6);
    assert_eq!(
        result.record.address.as_deref(),
        Some("S/O Ramesh Sharma, 12 MG Road, Bengaluru Karnataka 560001")
    );
    assert_eq!(result.record.postal_code.as_deref(), Some("560001"));
}
