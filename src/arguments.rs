use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "select-list",
  version,
  about = "Pick an item from a list in the terminal"
)]
pub(crate) struct Arguments {
  /// JSON file holding an array of `{"text": ...}` items; defaults to a
  /// built-in demo list
  #[arg(long, env = "SELECT_LIST_ITEMS", value_name = "PATH")]
  pub(crate) items: Option<PathBuf>,
  /// Append logs to this file
  #[arg(long, env = "SELECT_LIST_LOG_FILE", value_name = "PATH")]
  pub(crate) log_file: Option<PathBuf>,
  /// Log filter, e.g. `debug` or `select_list=trace`
  #[arg(
    long,
    env = "SELECT_LIST_LOG",
    value_name = "FILTER",
    default_value = "info"
  )]
  pub(crate) log_level: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn items_path_is_optional() {
    let arguments =
      Arguments::try_parse_from(["select-list"]).expect("parse arguments");

    assert!(arguments.items.is_none());
    assert!(arguments.log_file.is_none());
  }

  #[test]
  fn flags_are_parsed() {
    let arguments = Arguments::try_parse_from([
      "select-list",
      "--items",
      "items.json",
      "--log-file",
      "select-list.log",
      "--log-level",
      "debug",
    ])
    .expect("parse arguments");

    assert_eq!(arguments.items, Some(PathBuf::from("items.json")));
    assert_eq!(arguments.log_file, Some(PathBuf::from("select-list.log")));
    assert_eq!(arguments.log_level, "debug");
  }

  #[test]
  fn unknown_flags_are_rejected() {
    assert!(
      Arguments::try_parse_from(["select-list", "--selected", "1"]).is_err()
    );
  }
}
