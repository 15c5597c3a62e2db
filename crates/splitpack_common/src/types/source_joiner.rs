use super::source::Source;

/// Joins rendered pieces with `\n`.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let separators = self.inner.len().saturating_sub(1);
    let size_hint = self.inner.iter().map(|source| source.content().len()).sum::<usize>() + separators;

    let mut ret_source = String::with_capacity(size_hint);
    for (index, source) in self.inner.iter().enumerate() {
      if index > 0 {
        ret_source.push('\n');
      }
      ret_source.push_str(source.content());
    }
    ret_source
  }
}

#[test]
fn test_join() {
  let mut joiner = SourceJoiner::default();
  assert_eq!(joiner.join(), "");
  joiner.append_source("a");
  joiner.append_source("b");
  joiner.append_source(String::from("c"));
  assert_eq!(joiner.join(), "a\nb\nc");
}
