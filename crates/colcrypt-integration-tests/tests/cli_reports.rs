//! CLI handlers against the same fixtures the library is pinned to.

use colcrypt_cli::codec::{run_check, run_decode, run_encode, CheckArgs, DecodeArgs, EncodeArgs};
use colcrypt_cli::output::{render, OutputFormat};

#[test]
fn encode_then_decode_through_cli() {
    let encoded = run_encode(&EncodeArgs {
        value: "2020-07-10 12:12:12".to_string(),
    })
    .unwrap();
    let hex = encoded.hex.clone().unwrap();
    assert_eq!(hex, "f4abdc02");

    let decoded = run_decode(&DecodeArgs { hex }).unwrap();
    assert_eq!(decoded.value.as_deref(), Some("2020-07-10 12:12:00"));
}

#[test]
fn json_report_shape() {
    let report = run_encode(&EncodeArgs {
        value: "1900-01-01".to_string(),
    })
    .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["hex"], "00000000");
    assert_eq!(json["days"], 0);
    assert_eq!(json["minutes"], 0);
}

#[test]
fn null_renders_as_null() {
    let report = run_decode(&DecodeArgs {
        hex: "null".to_string(),
    })
    .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
    assert!(json["value"].is_null());
    assert!(render(&report, OutputFormat::Text).unwrap().ends_with("null"));
}

#[test]
fn check_rejects_upper_bound() {
    let err = run_check(&CheckArgs {
        value: "2079-06-06 23:59:30".to_string(),
    })
    .unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
