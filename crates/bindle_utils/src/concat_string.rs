/// Allocation-friendly string concatenation. Every argument only needs to
/// deref to `str`, so `&str`, `String` and formatted buffers mix freely.
#[macro_export]
macro_rules! concat_string {
  () => { String::new() };
  ($($item:expr),+ $(,)?) => {{
    let mut concatenated = String::new();
    $(
      concatenated.push_str($item.as_ref());
    )+
    concatenated
  }};
}

#[test]
fn test_concat_string() {
  assert_eq!(concat_string!(), "");
  assert_eq!(concat_string!("a", String::from("b"), "c"), "abc");
}
