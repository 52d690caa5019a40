use super::*;

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub(crate) struct StatusLine {
  flash: Option<(String, Instant)>,
}

impl StatusLine {
  pub(crate) fn expire(&mut self, now: Instant) {
    if self
      .flash
      .as_ref()
      .is_some_and(|(_, expires_at)| now >= *expires_at)
    {
      self.flash = None;
    }
  }

  pub(crate) fn flash(&mut self, text: String) {
    self.flash = Some((text, Instant::now() + FLASH_DURATION));
  }

  pub(crate) fn text(&self, help_visible: bool) -> &str {
    if help_visible {
      return HELP_STATUS;
    }

    self
      .flash
      .as_ref()
      .map_or(LIST_STATUS, |(text, _)| text.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn idle_status_shows_key_hints() {
    assert_eq!(StatusLine::default().text(false), LIST_STATUS);
  }

  #[test]
  fn flash_shows_until_it_expires() {
    let mut status = StatusLine::default();

    status.flash("Reloaded 1 item".into());

    status.expire(Instant::now());
    assert_eq!(status.text(false), "Reloaded 1 item");

    status.expire(Instant::now() + FLASH_DURATION);
    assert_eq!(status.text(false), LIST_STATUS);
  }

  #[test]
  fn newer_flash_replaces_older_one() {
    let mut status = StatusLine::default();

    status.flash("first".into());
    status.flash("second".into());

    assert_eq!(status.text(false), "second");
  }

  #[test]
  fn help_hint_wins_over_flash_without_consuming_it() {
    let mut status = StatusLine::default();

    status.flash("error: boom".into());

    assert_eq!(status.text(true), HELP_STATUS);
    assert_eq!(status.text(false), "error: boom");
  }
}
