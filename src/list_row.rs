use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListRow<'a, A> {
  pub(crate) index: usize,
  pub(crate) is_selected: bool,
  pub(crate) on_activate: A,
  pub(crate) text: &'a str,
}

impl<'a, A: Clone> ListRow<'a, A> {
  pub(crate) fn activate(&self) -> A {
    self.on_activate.clone()
  }

  pub(crate) fn style(&self) -> Style {
    if self.is_selected {
      Style::default()
        .fg(Color::Black)
        .bg(SELECTED_COLOR)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::White).bg(UNSELECTED_COLOR)
    }
  }

  pub(crate) fn to_list_item(&self) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::raw(self.text),
    ]))
    .style(self.style())
  }
}
