use super::*;

#[test]
fn defaults() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.history_depth, 50);
    assert_eq!(cfg.background, "#1e1e1e");
    assert_eq!(cfg.fill, "#D9D9D9");
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: EditorConfig = serde_json::from_str(r#"{"history_depth": 5}"#).unwrap();
    assert_eq!(cfg.history_depth, 5);
    assert_eq!(cfg.fill, "#D9D9D9");
}
