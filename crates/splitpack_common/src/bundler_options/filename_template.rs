/// A file name pattern such as `[name]-[hash].js`.
///
/// Supported placeholders: `[name]`, `[id]`, `[hash]` and `[extname]` (with the leading dot).
#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

#[derive(Debug, Default)]
pub struct FilenameTemplateArgs<'a> {
  pub name: Option<&'a str>,
  pub id: Option<u32>,
  pub hash: Option<&'a str>,
  pub extname: Option<&'a str>,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn has_hash_pattern(&self) -> bool {
    self.template.contains("[hash]")
  }

  pub fn render(&self, args: &FilenameTemplateArgs<'_>) -> String {
    let mut rendered = self.template.clone();
    if let Some(name) = args.name {
      rendered = rendered.replace("[name]", name);
    }
    if let Some(id) = args.id {
      rendered = rendered.replace("[id]", &id.to_string());
    }
    if let Some(hash) = args.hash {
      rendered = rendered.replace("[hash]", hash);
    }
    if let Some(extname) = args.extname {
      rendered = rendered.replace("[extname]", extname);
    }
    rendered
  }
}

#[test]
fn test_render() {
  let template = FilenameTemplate::new("[name]-[id].[hash].js");
  assert!(template.has_hash_pattern());
  let rendered = template.render(&FilenameTemplateArgs {
    name: Some("lazy"),
    id: Some(2),
    hash: Some("0badc0de"),
    extname: None,
  });
  assert_eq!(rendered, "lazy-2.0badc0de.js");

  let template = FilenameTemplate::new("assets/[name][extname]");
  assert!(!template.has_hash_pattern());
  let rendered =
    template.render(&FilenameTemplateArgs { name: Some("logo"), extname: Some(".svg"), ..Default::default() });
  assert_eq!(rendered, "assets/logo.svg");
}
