//! Integration tests for entities_srt_options crate
//!
//! These tests drive the encoder through the descriptor table the same way
//! the configuration use cases do.

use entities_srt_options::*;

#[test]
fn test_every_descriptor_accepts_a_well_formed_value() {
    for descriptor in options() {
        let raw = match descriptor.option_type {
            OptionType::String => "text",
            OptionType::Int32 | OptionType::Int64 => "42",
            OptionType::Bool => "yes",
            OptionType::Enum => "live",
        };
        let value = OptionValue::encode_str(descriptor.option_type, raw, descriptor.symbols);
        assert!(value.is_ok(), "{} rejected {:?}", descriptor.name, raw);
    }
}

#[test]
fn test_transtype_through_table() {
    let transtype = lookup("transtype").unwrap();
    assert_eq!(transtype.id, SocketOptionId::TRANSTYPE);

    let live = OptionValue::encode_str(transtype.option_type, "live", transtype.symbols).unwrap();
    let file = OptionValue::encode_str(transtype.option_type, "file", transtype.symbols).unwrap();
    let numeric = OptionValue::encode_str(transtype.option_type, "5", transtype.symbols).unwrap();

    assert_eq!(live, OptionValue::Enum(0));
    assert_eq!(file, OptionValue::Enum(1));
    assert_eq!(numeric, OptionValue::Enum(5));
}

#[test]
fn test_round_trip_through_bytes_for_table_types() {
    let cases = [
        ("maxbw", "1000000000000", OptionValue::Int64(1_000_000_000_000)),
        ("latency", "200", OptionValue::Int32(200)),
        ("tlpktdrop", "false", OptionValue::Bool(false)),
        ("streamid", "#!::r=live", OptionValue::Str("#!::r=live".to_string())),
    ];

    for (name, raw, expected) in cases {
        let descriptor = lookup(name).unwrap();
        let value = OptionValue::encode_str(descriptor.option_type, raw, descriptor.symbols).unwrap();
        let echoed = OptionValue::decode(descriptor.option_type, &value.to_bytes());
        assert_eq!(echoed, Some(expected), "{}", name);
    }
}

#[test]
fn test_connection_mode_variants() {
    let modes = vec![
        ConnectionMode::Failure,
        ConnectionMode::Listener,
        ConnectionMode::Caller,
        ConnectionMode::Rendezvous,
    ];

    for mode in modes {
        let _ = format!("{:?} {}", mode, mode);
    }
}

#[test]
fn test_binding_partition_covers_table() {
    let pre = options_with_binding(OptionBinding::Pre).count();
    let post = options_with_binding(OptionBinding::Post).count();
    assert_eq!(pre + post, SRT_OPTIONS.len());
}
