use super::*;
use crate::kernel::services::ports::config::HintDirection;

#[test]
fn settings_serde_roundtrip_preserves_options_and_mappings() {
    let mut original = Settings::default();
    original.jump.direction = Some(HintDirection::BeforeCursor);
    original.jump.distance_weight = 3;
    original.mappings.insert('a', CompactString::new("аä"));

    let json = serde_json::to_string(&original).expect("serialize Settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize Settings");

    assert_eq!(decoded.jump, original.jump);
    assert_eq!(decoded.mappings.get(&'a').map(|s| s.as_str()), Some("аä"));
}

#[test]
fn empty_object_yields_defaults() {
    let decoded: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(decoded.jump, JumpOptions::default());
    assert!(decoded.mappings.is_empty());
}
