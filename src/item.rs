use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Item {
  pub(crate) text: String,
}

impl AsRef<str> for Item {
  fn as_ref(&self) -> &str {
    &self.text
  }
}

impl Item {
  pub(crate) fn demo() -> Rc<[Item]> {
    (1..=DEMO_ITEM_COUNT)
      .map(|n| Item::new(format!("Item {n}")))
      .collect()
  }

  pub(crate) fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}
