//! End-to-end tests for A1 reference parsing and formatting

use pretty_assertions::assert_eq;
use xlgrid::prelude::*;
use xlgrid::{column_to_letters, letters_to_column, MAX_COLS, MAX_ROWS};

#[test]
fn test_address_examples() {
    let a1 = CellAddress::parse("A1").unwrap();
    assert_eq!((a1.row(), a1.col()), (0, 0));
    assert!(!a1.is_row_anchored());
    assert!(!a1.is_col_anchored());
    assert_eq!(a1.address_type(), AddressType::Default);

    let b5 = CellAddress::parse("$B$5").unwrap();
    assert_eq!((b5.row(), b5.col()), (4, 1));
    assert!(b5.is_row_anchored());
    assert!(b5.is_col_anchored());

    assert_eq!(
        CellAddress::parse("C$3").unwrap().address_type(),
        AddressType::FixedRow
    );
    assert_eq!(
        CellAddress::parse("$C3").unwrap().address_type(),
        AddressType::FixedColumn
    );
}

#[test]
fn test_address_limits() {
    let last = CellAddress::parse("XFD1048576").unwrap();
    assert_eq!(last.row(), MAX_ROWS - 1);
    assert_eq!(last.col(), MAX_COLS - 1);

    for text in ["A1048577", "XFE1", "AAAA1", "A0"] {
        let err = CellAddress::parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range, "{text}");
    }

    for text in ["", "A", "1", "1A", "A1B", "a 1", " A1", "A1 ", "$$A1", "A$$1", "A-1", "A1$"] {
        let err = CellAddress::parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "{text:?}");
    }
}

#[test]
fn test_address_formatting_preserves_anchors() {
    for text in ["A1", "$A1", "A$1", "$A$1", "XFD1048576", "$AA$100"] {
        assert_eq!(CellAddress::parse(text).unwrap().to_a1_string(), text);
    }

    // Lowercase input formats canonically
    assert_eq!(CellAddress::parse("ab12").unwrap().to_a1_string(), "AB12");
}

#[test]
fn test_range_examples() {
    let range = CellRange::parse("B1:A5").unwrap();
    assert_eq!(range.to_a1_string(), "A1:B5");
    assert_eq!(range.row_count(), 5);
    assert_eq!(range.col_count(), 2);

    let err = CellRange::parse("A1:B2:C3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    // Corner failures are format errors, whatever the corner's own error was
    assert_eq!(CellRange::parse("A1").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(
        CellRange::parse("A1:A1048577").unwrap_err().kind(),
        ErrorKind::Format
    );
}

#[test]
fn test_range_anchors_follow_their_values() {
    let range = CellRange::parse("$B1:A$5").unwrap();
    assert_eq!(range.to_a1_string(), "A1:$B$5");

    // Ties keep each side's own flags
    let range = CellRange::parse("$A1:A$5").unwrap();
    assert_eq!(range.to_a1_string(), "$A1:A$5");
    let range = CellRange::parse("A$5:$A1").unwrap();
    assert_eq!(range.to_a1_string(), "A1:$A$5");
}

#[test]
fn test_range_predicates() {
    let a = CellRange::parse("B2:D4").unwrap();
    let b = CellRange::parse("D4:F6").unwrap();
    let c = CellRange::parse("E1:F3").unwrap();

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));
    assert_eq!(
        a.intersection(&b).map(|r| r.to_a1_string()),
        Some("D4:D4".to_string())
    );

    // Containment ignores anchoring
    assert!(a.contains(&CellAddress::parse("$C$3").unwrap()));
    assert!(!a.contains(&CellAddress::parse("A1").unwrap()));

    let cells: Vec<String> = CellRange::parse("A1:B2")
        .unwrap()
        .cells()
        .map(|addr| addr.to_a1_string())
        .collect();
    assert_eq!(cells, vec!["A1", "B1", "A2", "B2"]);
}

#[test]
fn test_column_codec() {
    assert_eq!(column_to_letters(0).unwrap(), "A");
    assert_eq!(column_to_letters(25).unwrap(), "Z");
    assert_eq!(column_to_letters(26).unwrap(), "AA");
    assert_eq!(column_to_letters(701).unwrap(), "ZZ");
    assert_eq!(column_to_letters(702).unwrap(), "AAA");
    assert_eq!(column_to_letters(MAX_COLS - 1).unwrap(), "XFD");
    assert_eq!(
        column_to_letters(MAX_COLS).unwrap_err().kind(),
        ErrorKind::Range
    );

    assert_eq!(letters_to_column("xfd").unwrap(), MAX_COLS - 1);
    assert_eq!(letters_to_column("").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(letters_to_column("A1").unwrap_err().kind(), ErrorKind::Format);
}
