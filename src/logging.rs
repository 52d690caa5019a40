use super::*;

pub(crate) fn init(path: Option<&Path>, filter: &str) -> Result {
  let Some(path) = path else {
    return Ok(());
  };

  let filter = EnvFilter::try_new(filter)
    .with_context(|| format!("invalid log filter `{filter}`"))?;

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file `{}`", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_log_file_is_a_no_op() {
    assert!(init(None, "not a [valid filter").is_ok());
  }

  #[test]
  fn invalid_filter_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let error = init(Some(&dir.path().join("log")), "select_list=loud")
      .expect_err("filter is rejected");

    assert!(error.to_string().starts_with("invalid log filter"));
  }
}
