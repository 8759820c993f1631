use lambda_core::{Atom, Decoder, LambdaCodec, PilotMessage, Vocabulary, FORMAT_VERSION};
use serde_json::json;

fn vocab() -> Vocabulary {
    Vocabulary::from_atoms(vec![Atom::new("co", "consciousness")])
}

#[test]
fn gloss_is_computed_at_construction() {
    let vocab = vocab();
    let decoder = Decoder::new(&vocab);

    let msg = PilotMessage::for_transport("?Uk/co", &decoder);
    assert_eq!(msg.kind(), "lambda");
    assert_eq!(msg.version(), FORMAT_VERSION);
    assert_eq!(msg.lambda(), "?Uk/co");
    assert_eq!(msg.english(), "(query) you know consciousness");
}

#[test]
fn json_round_trip_preserves_every_field() {
    let vocab = vocab();
    let codec = LambdaCodec::new(&vocab);

    for notation in ["?Uk/co", "", "[hello world]", "v:aw", "λ>\"quoted\""] {
        let msg = codec.for_transport(notation);

        let text = msg.to_json().unwrap();
        assert_eq!(PilotMessage::from_json(&text).unwrap(), msg);

        let bytes = msg.to_json_bytes().unwrap();
        assert_eq!(PilotMessage::from_json_slice(&bytes).unwrap(), msg);
    }
}

#[test]
fn deserialization_does_not_check_field_content() {
    let value = json!({
        "type": "other",
        "version": "0.0.1",
        "lambda": "!Ik",
        "english": "not what the decoder says"
    });

    let msg = PilotMessage::from_json(&value.to_string()).unwrap();
    assert_eq!(msg.kind(), "other");
    assert_eq!(msg.english(), "not what the decoder says");
}

#[test]
fn missing_field_is_a_format_error() {
    let value = json!({"type": "lambda", "version": "1.8.0", "lambda": "!Ik"});
    let err = PilotMessage::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("english"), "unexpected error: {err}");
}

#[test]
fn unknown_field_is_a_format_error() {
    let value = json!({
        "type": "lambda",
        "version": "1.8.0",
        "lambda": "!Ik",
        "english": "(assertion) I know",
        "priority": "high"
    });
    assert!(PilotMessage::from_json(&value.to_string()).is_err());
}

#[test]
fn non_string_values_are_a_format_error() {
    let value = json!({"type": "lambda", "version": 1.8, "lambda": "!Ik", "english": ""});
    assert!(PilotMessage::from_json(&value.to_string()).is_err());

    let nested = json!({"type": "lambda", "version": "1.8.0", "lambda": {"v": "!Ik"}, "english": ""});
    assert!(PilotMessage::from_json(&nested.to_string()).is_err());
}

#[test]
fn truncated_payload_is_a_format_error() {
    let err = PilotMessage::from_json_slice(br#"{"type":"lambda","#).unwrap_err();
    assert!(std::error::Error::source(&err).is_some());
}
