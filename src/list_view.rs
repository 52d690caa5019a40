use super::*;

pub(crate) struct ListView<T> {
  cursor: usize,
  items: Rc<[T]>,
  offset: usize,
  selected: Option<usize>,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self::new(Rc::from(Vec::new()))
  }
}

impl<T> ListView<T> {
  pub(crate) fn activate(&mut self, index: usize) -> bool {
    if index >= self.items.len() {
      debug!(index, len = self.items.len(), "ignoring activation");
      return false;
    }

    if self.selected != Some(index) {
      info!(index, previous = ?self.selected, "row selected");
    }

    self.selected = Some(index);
    self.cursor = index;

    true
  }

  pub(crate) fn activate_cursor(&mut self) -> bool {
    match self.cursor_index() {
      Some(index) => self.activate(index),
      None => false,
    }
  }

  pub(crate) fn cursor_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.cursor.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn is_selected(&self, index: usize) -> bool {
    self.selected == Some(index)
  }

  #[cfg(test)]
  pub(crate) fn items(&self) -> &Rc<[T]> {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Rc<[T]>) -> Self {
    Self {
      cursor: 0,
      items,
      offset: 0,
      selected: None,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    if self.items.is_empty() {
      0
    } else {
      self.offset.min(self.items.len().saturating_sub(1))
    }
  }

  pub(crate) fn replace_items(&mut self, items: Rc<[T]>) -> bool {
    if Rc::ptr_eq(&self.items, &items) {
      return false;
    }

    info!(
      previous_len = self.items.len(),
      len = items.len(),
      cleared = ?self.selected,
      "items replaced"
    );

    *self = Self::new(items);

    true
  }

  pub(crate) fn row_at(&self, line: usize) -> Option<usize> {
    let index = self.offset().saturating_add(line);
    (index < self.items.len()).then_some(index)
  }

  pub(crate) fn select_first(&mut self) {
    self.cursor = 0;
  }

  pub(crate) fn select_last(&mut self) {
    self.cursor = self.items.len().saturating_sub(1);
  }

  pub(crate) fn select_next(&mut self) {
    if let Some(cursor) = self.cursor_index() {
      self.cursor = (cursor + 1).min(self.items.len().saturating_sub(1));
    }
  }

  pub(crate) fn select_previous(&mut self) {
    if let Some(cursor) = self.cursor_index() {
      self.cursor = cursor.saturating_sub(1);
    }
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    self.selected
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self.selected.and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      self.offset = offset.min(self.items.len().saturating_sub(1));
    }
  }
}

impl<T: AsRef<str>> ListView<T> {
  pub(crate) fn draw(&mut self, frame: &mut Frame, area: Rect) {
    let list_items = self
      .rows()
      .map(|row| row.to_list_item())
      .collect::<Vec<ListItem>>();

    let mut list_state = ListState::default()
      .with_selected(self.cursor_index())
      .with_offset(self.offset());

    let list = List::new(list_items).highlight_symbol(CURSOR_SYMBOL);

    frame.render_stateful_widget(list, area, &mut list_state);

    self.set_offset(list_state.offset());
  }

  pub(crate) fn rows(&self) -> impl Iterator<Item = ListRow<'_, Action>> {
    self.items.iter().enumerate().map(move |(index, item)| ListRow {
      index,
      is_selected: self.is_selected(index),
      on_activate: Action::Activate(index),
      text: item.as_ref(),
    })
  }
}
