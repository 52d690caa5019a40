use super::*;

pub(crate) struct App {
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let title = Paragraph::new(self.title())
      .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(title, layout[0]);

    self.state.set_list_area(layout[1]);
    self.state.list_mut().draw(frame, layout[1]);

    let status = Paragraph::new(self.state.status())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  pub(crate) fn new(state: State) -> Self {
    Self { state }
  }

  fn next_action(&self, event: CrosstermEvent) -> Action {
    match event {
      CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
        self.state.handle_key(key)
      }
      CrosstermEvent::Mouse(mouse) => self.state.handle_mouse(mouse),
      _ => Action::None,
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.state.expire_status(Instant::now());

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let action = self.next_action(crossterm_event::read()?);

      match self.state.dispatch(action) {
        Ok(true) => break,
        Ok(false) => {}
        Err(error) => {
          warn!(?action, "{error:#}");
          self.state.flash(format!("error: {error:#}"));
        }
      }
    }

    Ok(())
  }

  fn title(&self) -> String {
    let list = self.state.list();

    let count = if list.is_empty() {
      "no items".to_string()
    } else if list.len() == 1 {
      "1 item".to_string()
    } else {
      format!("{} items", list.len())
    };

    let selection = list.selected_item().map_or_else(
      || "nothing selected".to_string(),
      |item| format!("selected: {}", item.text),
    );

    format!(
      "{BASE_INDENT}{} • {count} • {selection}",
      self.state.source().describe()
    )
  }
}
