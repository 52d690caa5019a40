use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ItemSource {
  Demo,
  File(PathBuf),
}

impl From<Option<PathBuf>> for ItemSource {
  fn from(path: Option<PathBuf>) -> Self {
    path.map_or(Self::Demo, Self::File)
  }
}

impl ItemSource {
  pub(crate) fn describe(&self) -> String {
    match self {
      Self::Demo => "demo".into(),
      Self::File(path) => path.display().to_string(),
    }
  }

  pub(crate) fn load(&self) -> Result<Rc<[Item]>> {
    match self {
      Self::Demo => Ok(Item::demo()),
      Self::File(path) => Self::load_file(path),
    }
  }

  fn load_file(path: &Path) -> Result<Rc<[Item]>> {
    let data = fs::read(path)
      .with_context(|| format!("could not read `{}`", path.display()))?;

    let items = serde_json::from_slice::<Vec<Item>>(&data).with_context(|| {
      format!("`{}` is not a JSON array of {{\"text\": ...}}", path.display())
    })?;

    debug!(path = %path.display(), count = items.len(), "read items file");

    Ok(items.into())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::io::Write, tempfile::NamedTempFile};

  fn items_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
  }

  #[test]
  fn missing_path_means_demo() {
    assert_eq!(ItemSource::from(None), ItemSource::Demo);
    assert_eq!(ItemSource::Demo.load().expect("demo loads").len(), 5);
  }

  #[test]
  fn file_items_keep_their_order() {
    let file = items_file(r#"[{"text": "b"}, {"text": "a"}, {"text": "c"}]"#);

    let source = ItemSource::from(Some(file.path().to_path_buf()));

    let items = source.load().expect("file loads");

    assert_eq!(&*items, [Item::new("b"), Item::new("a"), Item::new("c")]);
  }

  #[test]
  fn empty_array_is_an_empty_sequence() {
    let file = items_file("[]");

    let items = ItemSource::File(file.path().to_path_buf())
      .load()
      .expect("file loads");

    assert!(items.is_empty());
  }

  #[test]
  fn every_load_is_a_new_sequence() {
    let file = items_file(r#"[{"text": "a"}]"#);

    let source = ItemSource::File(file.path().to_path_buf());

    let (first, second) = (
      source.load().expect("first load"),
      source.load().expect("second load"),
    );

    assert_eq!(first, second);
    assert!(!Rc::ptr_eq(&first, &second));
  }

  #[test]
  fn malformed_items_are_rejected_with_path_context() {
    let file = items_file(r#"[{"label": "a"}]"#);

    let error = ItemSource::File(file.path().to_path_buf())
      .load()
      .expect_err("missing text is rejected");

    assert!(
      error
        .to_string()
        .contains(&file.path().display().to_string())
    );
  }

  #[test]
  fn non_array_is_rejected() {
    let file = items_file(r#"{"text": "a"}"#);

    assert!(ItemSource::File(file.path().to_path_buf()).load().is_err());
  }

  #[test]
  fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let error = ItemSource::File(dir.path().join("missing.json"))
      .load()
      .expect_err("missing file is an error");

    assert!(error.to_string().starts_with("could not read"));
  }
}
