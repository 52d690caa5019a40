use super::*;

pub(crate) struct State {
  help: HelpView,
  list: ListView<Item>,
  list_area: Rect,
  source: ItemSource,
  status: StatusLine,
}

impl State {
  pub(crate) fn dispatch(&mut self, action: Action) -> Result<bool> {
    let mut should_exit = false;

    match action {
      Action::Quit => {
        should_exit = true;
      }
      Action::ShowHelp => self.help.show(),
      Action::HideHelp => self.help.hide(),
      Action::Activate(index) => {
        self.list.activate(index);
      }
      Action::ActivateCursor => {
        self.list.activate_cursor();
      }
      Action::SelectNext => self.list.select_next(),
      Action::SelectPrevious => self.list.select_previous(),
      Action::SelectFirst => self.list.select_first(),
      Action::SelectLast => self.list.select_last(),
      Action::Reload => self.reload()?,
      Action::None => {}
    }

    Ok(should_exit)
  }

  pub(crate) fn expire_status(&mut self, now: Instant) {
    self.status.expire(now);
  }

  pub(crate) fn flash(&mut self, text: String) {
    self.status.flash(text);
  }

  pub(crate) fn handle_key(&self, key: KeyEvent) -> Action {
    if self.help.is_visible() {
      HelpView::handle_key(key)
    } else {
      KeyBinding::action_for(LIST_BINDINGS, key)
    }
  }

  pub(crate) fn handle_mouse(&self, mouse: MouseEvent) -> Action {
    if self.help.is_visible() {
      return Action::None;
    }

    match mouse.kind {
      MouseEventKind::ScrollDown => Action::SelectNext,
      MouseEventKind::ScrollUp => Action::SelectPrevious,
      MouseEventKind::Down(MouseButton::Left) => {
        let area = self.list_area;

        let inside = mouse.column >= area.x
          && mouse.column < area.right()
          && mouse.row >= area.y
          && mouse.row < area.bottom();

        if !inside {
          return Action::None;
        }

        let Some(index) = self.list.row_at(usize::from(mouse.row - area.y))
        else {
          return Action::None;
        };

        self
          .list
          .rows()
          .find(|row| row.index == index)
          .map_or(Action::None, |row| row.activate())
      }
      _ => Action::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn list(&self) -> &ListView<Item> {
    &self.list
  }

  pub(crate) fn list_mut(&mut self) -> &mut ListView<Item> {
    &mut self.list
  }

  pub(crate) fn new(source: ItemSource, items: Rc<[Item]>) -> Self {
    Self {
      help: HelpView::new(),
      list: ListView::new(items),
      list_area: Rect::default(),
      source,
      status: StatusLine::default(),
    }
  }

  fn reload(&mut self) -> Result {
    let items = self.source.load().with_context(|| {
      format!("could not reload items from {}", self.source.describe())
    })?;

    let count = items.len();

    self.list.replace_items(items);

    self.flash(format!(
      "Reloaded {count} item{}",
      if count == 1 { "" } else { "s" }
    ));

    Ok(())
  }

  pub(crate) fn set_list_area(&mut self, area: Rect) {
    self.list_area = area;
  }

  pub(crate) fn source(&self) -> &ItemSource {
    &self.source
  }

  pub(crate) fn status(&self) -> &str {
    self.status.text(self.help.is_visible())
  }
}
