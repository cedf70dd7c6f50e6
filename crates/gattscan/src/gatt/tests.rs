//! Unit tests for GATT property decoding and name resolution

use crate::gatt::properties::{decode_properties, Capability};
use crate::gatt::types::{Characteristic, CharacteristicProperties as Props, Service};
use crate::report::CellStyle;
use crate::uuid::Uuid;

#[test]
fn test_writable_matches_write_or_signed_for_every_mask() {
    for mask in 0..=u8::MAX {
        let props = Props::from_bits_truncate(mask);
        let summary = decode_properties(props);
        let expected =
            props.contains(Props::WRITE) || props.contains(Props::AUTHENTICATED_SIGNED_WRITES);
        assert_eq!(summary.writable, expected, "mask {:#04x}", mask);
        assert_eq!(summary.readable, props.contains(Props::READ), "mask {:#04x}", mask);
    }
}

#[test]
fn test_with_response_for_every_mask() {
    for mask in 0..=u8::MAX {
        let props = Props::from_bits_truncate(mask);
        let summary = decode_properties(props);

        if props.contains(Props::AUTHENTICATED_SIGNED_WRITES) {
            assert!(summary.with_response, "mask {:#04x}", mask);
        }

        let sole_write_nr = props.contains(Props::WRITE_WITHOUT_RESPONSE)
            && !props.contains(Props::WRITE)
            && !props.contains(Props::AUTHENTICATED_SIGNED_WRITES);
        assert_eq!(summary.with_response, !sole_write_nr, "mask {:#04x}", mask);
    }
}

#[test]
fn test_capability_order() {
    let summary = decode_properties(Props::all());
    assert_eq!(
        summary.capabilities,
        vec![
            Capability::Broadcast,
            Capability::Read,
            Capability::Write,
            Capability::Notify,
            Capability::Indicate,
            Capability::SignedWrite,
            Capability::Extended,
        ]
    );
    assert_eq!(summary.joined(), "bcast, read, write, notify, indicate, *write, x");
}

#[test]
fn test_write_without_response_only() {
    let summary = decode_properties(Props::WRITE_WITHOUT_RESPONSE | Props::NOTIFY);
    assert_eq!(summary.capabilities, vec![Capability::Write, Capability::Notify]);
    assert!(!summary.writable);
    assert!(!summary.with_response);
}

#[test]
fn test_write_and_write_without_response() {
    let summary = decode_properties(Props::WRITE | Props::WRITE_WITHOUT_RESPONSE);
    assert_eq!(summary.capabilities, vec![Capability::Write]);
    assert!(summary.writable);
    assert!(summary.with_response);
}

#[test]
fn test_empty_mask() {
    let summary = decode_properties(Props::empty());
    assert!(summary.capabilities.is_empty());
    assert_eq!(summary.joined(), "");
    assert!(!summary.readable);
    assert!(!summary.writable);
}

#[test]
fn test_write_tags_are_emphasised() {
    assert_eq!(Capability::Write.style(), CellStyle::Bold);
    assert_eq!(Capability::SignedWrite.style(), CellStyle::Yellow);
    assert_eq!(Capability::Read.style(), CellStyle::Plain);
}

#[test]
fn test_from_mask_drops_high_bits() {
    assert_eq!(Props::from_mask(0x1_02), Props::READ);
}

#[test]
fn test_resolved_names() {
    let appearance = Characteristic::new(0x2A01u16, 0x0003, Props::READ);
    assert_eq!(appearance.resolved_name(), Some("Appearance"));

    let renamed = appearance.clone().with_name("Looks");
    assert_eq!(renamed.resolved_name(), Some("Looks"));

    let blank = appearance.with_name("");
    assert_eq!(blank.resolved_name(), Some("Appearance"));

    let vendor: Uuid = "6e40fff0-b5a3-f393-e0a9-e50e24dcca9e".parse().unwrap();
    assert_eq!(Service::new(vendor, 0x10, 0x20).resolved_name(), None);
    assert_eq!(
        Service::new(0x1800u16, 0x01, 0x07).resolved_name(),
        Some("Generic Access")
    );
}
