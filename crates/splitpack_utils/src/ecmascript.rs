use oxc::syntax::identifier;

use crate::concat_string;

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Renders a JS string literal, escaping like JSON does.
pub fn quote(value: &str) -> String {
  serde_json::to_string(value).expect("Serializing a str should not fail")
}

/// `obj.prop` when `prop` is a valid identifier, `obj["prop"]` otherwise.
pub fn property_access_str(obj: &str, prop: &str) -> String {
  if is_validate_identifier_name(prop) {
    concat_string!(obj, ".", prop)
  } else {
    concat_string!(obj, "[", quote(prop), "]")
  }
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_property_access_str() {
  assert_eq!(property_access_str("exports", "default"), "exports.default");
  assert_eq!(property_access_str("exports", "a-b"), "exports[\"a-b\"]");
  assert_eq!(quote("/src/\"x\".js"), r#""/src/\"x\".js""#);
}
