use super::*;

pub(crate) struct HelpView {
  text: String,
  visible: bool,
}

impl HelpView {
  fn area(&self, screen: Rect) -> Rect {
    let to_u16 = |value: usize| u16::try_from(value).unwrap_or(u16::MAX);

    let widest = self
      .text
      .lines()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0);

    let width = to_u16(widest.saturating_add(4)).min(screen.width);
    let height = to_u16(self.text.lines().count().saturating_add(2))
      .min(screen.height);

    Rect::new(
      screen.x + (screen.width - width) / 2,
      screen.y + (screen.height - height) / 2,
      width,
      height,
    )
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = self.area(frame.area());

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(self.text.as_str())
        .block(Block::bordered().title(HELP_TITLE)),
      area,
    );
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Action {
    KeyBinding::action_for(HELP_BINDINGS, key)
  }

  pub(crate) fn hide(&mut self) {
    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      text: KeyBinding::help_text(),
      visible: false,
    }
  }

  pub(crate) fn show(&mut self) {
    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  fn screen(help: &HelpView, width: u16, height: u16) -> String {
    let mut terminal =
      Terminal::new(TestBackend::new(width, height)).expect("create terminal");

    terminal.draw(|frame| help.draw(frame)).expect("draw help");

    let buffer = terminal.backend().buffer();

    (0..height)
      .map(|y| {
        (0..width)
          .map(|x| buffer[(x, y)].symbol())
          .collect::<String>()
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  #[test]
  fn hidden_help_draws_nothing() {
    let help = HelpView::new();

    assert!(screen(&help, 60, 20).trim().is_empty());
  }

  #[test]
  fn visible_help_draws_the_key_table() {
    let mut help = HelpView::new();

    help.show();

    let screen = screen(&help, 60, 20);

    assert!(screen.contains(HELP_TITLE));
    assert!(screen.contains("select the item under the cursor"));

    help.hide();
    assert!(!help.is_visible());
  }

  #[test]
  fn area_fits_inside_small_screens() {
    let help = HelpView::new();

    let area = help.area(Rect::new(2, 1, 10, 5));

    assert_eq!((area.width, area.height), (10, 5));
    assert_eq!((area.x, area.y), (2, 1));
  }

  #[test]
  fn area_is_centered() {
    let help = HelpView::new();

    let area = help.area(Rect::new(0, 0, 100, 40));

    assert_eq!(area.x, (100 - area.width) / 2);
    assert_eq!(area.y, (40 - area.height) / 2);
  }
}
