use super::*;

#[derive(Clone, Copy, Debug)]
pub(crate) struct KeyBinding {
  pub(crate) action: Action,
  pub(crate) codes: &'static [KeyCode],
  pub(crate) description: &'static str,
  pub(crate) label: &'static str,
}

pub(crate) const LIST_BINDINGS: &[KeyBinding] = &[
  KeyBinding {
    action: Action::SelectPrevious,
    codes: &[KeyCode::Up, KeyCode::Char('k')],
    description: "move cursor up",
    label: "↑ / k",
  },
  KeyBinding {
    action: Action::SelectNext,
    codes: &[KeyCode::Down, KeyCode::Char('j')],
    description: "move cursor down",
    label: "↓ / j",
  },
  KeyBinding {
    action: Action::SelectFirst,
    codes: &[KeyCode::Home, KeyCode::Char('g')],
    description: "jump to first item",
    label: "home / g",
  },
  KeyBinding {
    action: Action::SelectLast,
    codes: &[KeyCode::End, KeyCode::Char('G')],
    description: "jump to last item",
    label: "end / G",
  },
  KeyBinding {
    action: Action::ActivateCursor,
    codes: &[KeyCode::Enter, KeyCode::Char(' ')],
    description: "select the item under the cursor",
    label: "enter / space",
  },
  KeyBinding {
    action: Action::Reload,
    codes: &[KeyCode::Char('r'), KeyCode::Char('R')],
    description: "reload items (clears the selection)",
    label: "r",
  },
  KeyBinding {
    action: Action::ShowHelp,
    codes: &[KeyCode::Char('?')],
    description: "show this help",
    label: "?",
  },
  KeyBinding {
    action: Action::Quit,
    codes: &[KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc],
    description: "quit",
    label: "q / esc",
  },
];

pub(crate) const HELP_BINDINGS: &[KeyBinding] = &[
  KeyBinding {
    action: Action::HideHelp,
    codes: &[KeyCode::Char('?'), KeyCode::Esc],
    description: "close help",
    label: "? / esc",
  },
  KeyBinding {
    action: Action::Quit,
    codes: &[KeyCode::Char('q'), KeyCode::Char('Q')],
    description: "quit",
    label: "q",
  },
];

const MOUSE_HINTS: &[(&str, &str)] = &[
  ("click", "select the clicked item"),
  ("scroll", "move the cursor"),
];

impl KeyBinding {
  pub(crate) fn action_for(bindings: &[KeyBinding], key: KeyEvent) -> Action {
    bindings
      .iter()
      .find(|binding| binding.codes.contains(&key.code))
      .map_or(Action::None, |binding| binding.action)
  }

  pub(crate) fn help_text() -> String {
    let keys = LIST_BINDINGS
      .iter()
      .map(|binding| (binding.label, binding.description))
      .collect::<Vec<_>>();

    let width = keys
      .iter()
      .chain(MOUSE_HINTS)
      .map(|(label, _)| label.chars().count())
      .max()
      .unwrap_or(0);

    let section = |title: &str, rows: &[(&str, &str)]| {
      let mut lines = vec![format!("{title}:")];

      lines.extend(
        rows.iter().map(|(label, description)| {
          format!("  {label:width$}  {description}")
        }),
      );

      lines.join("\n")
    };

    format!(
      "{}\n\n{}",
      section("Keys", &keys),
      section("Mouse", MOUSE_HINTS)
    )
  }
}
