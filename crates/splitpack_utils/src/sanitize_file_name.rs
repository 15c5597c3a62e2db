/// Replaces every character that is not safe in an emitted file name with `_`.
pub fn sanitize_file_name(name: &str) -> String {
  name
    .chars()
    .map(|char| if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') { char } else { '_' })
    .collect()
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name("lazy.page"), "lazy_page");
}
