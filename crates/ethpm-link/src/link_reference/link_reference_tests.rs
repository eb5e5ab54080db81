#![allow(non_snake_case)]

use super::*;
use ethpm_core::ManifestError;

#[test]
fn LinkReference___from_compiler_entries___takes_first_length() {
    let entries = [
        CompilerLinkOffset {
            start: 10,
            length: 20,
        },
        CompilerLinkOffset {
            start: 80,
            length: 20,
        },
    ];

    let reference = LinkReference::from_compiler_entries("SafeMathLib", &entries);

    assert_eq!(reference.name.as_deref(), Some("SafeMathLib"));
    assert_eq!(reference.length, 20);
    assert_eq!(reference.offsets, vec![10, 80]);
}

#[test]
fn LinkReference___from_compiler_entries___empty_name_is_none() {
    let reference = LinkReference::from_compiler_entries("", &[]);

    assert_eq!(reference.name, None);
    assert_eq!(reference.length, 0);
    assert!(reference.offsets.is_empty());
}

#[test]
fn LinkReference___validate___valid___ok() {
    let reference = LinkReference::new(Some("SafeMathLib".into()), 20, vec![0, 40]);

    assert!(reference.validate().is_ok());
}

#[test]
fn LinkReference___validate___overlap_checked_before_name() {
    let reference = LinkReference::new(Some("2bad".into()), 20, vec![0, 10]);

    let err = reference.validate().unwrap_err();

    assert!(matches!(err, ManifestError::Overlap { .. }));
}

#[test]
fn LinkReference___validate___bad_name___prefixed() {
    let reference = LinkReference::new(Some(" SafeMathLib".into()), 20, vec![0]);

    let err = reference.validate().unwrap_err();

    assert!(err.to_string().starts_with("LinkReference:name error 'Name ' SafeMathLib'"));
}

#[test]
fn LinkReference___validate___no_name___skips_name_check() {
    let reference = LinkReference::new(None, 20, vec![0]);

    assert!(reference.validate().is_ok());
}

#[test]
fn LinkReference___ranges___spans_length() {
    let reference = LinkReference::new(None, 4, vec![0, 10]);

    let ranges: Vec<_> = reference.ranges().collect();

    assert_eq!(ranges, vec![(0, 4), (10, 14)]);
}

#[test]
fn LinkReference___deserialize___name_optional() {
    let reference: LinkReference = serde_json::from_str(r#"{"length":20,"offsets":[1]}"#).unwrap();

    assert_eq!(reference, LinkReference::new(None, 20, vec![1]));
}

#[test]
fn LinkReference___serialize___fields_sorted() {
    let reference = LinkReference::new(Some("Lib".into()), 20, vec![1]);

    let json = serde_json::to_string(&reference).unwrap();

    assert_eq!(json, r#"{"length":20,"name":"Lib","offsets":[1]}"#);
}
