/// Concatenates string-like expressions into a `String` that is allocated exactly once.
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let name = String::from("exports");
  assert_eq!(concat_string!(name, ".", "default"), "exports.default");
  assert_eq!(concat_string!(), "");
}
