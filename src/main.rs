use {
  action::Action,
  anyhow::{Context, anyhow},
  app::App,
  arguments::Arguments,
  clap::Parser,
  crossterm::{
    event as crossterm_event,
    event::{
      DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
      KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
      MouseEventKind,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  help_view::HelpView,
  item::Item,
  item_source::ItemSource,
  key_binding::{HELP_BINDINGS, KeyBinding, LIST_BINDINGS},
  list_row::ListRow,
  list_view::ListView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph},
  },
  serde::Deserialize,
  state::State,
  status_line::StatusLine,
  std::{
    backtrace::BacktraceStatus,
    fs::{self, OpenOptions},
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    rc::Rc,
    sync::Mutex,
    time::{Duration, Instant},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
};

mod action;
mod app;
mod arguments;
mod help_view;
mod item;
mod item_source;
mod key_binding;
mod list_row;
mod list_view;
mod logging;
mod state;
mod status_line;

const DEMO_ITEM_COUNT: usize = 5;

const LIST_STATUS: &str =
  "click or enter select • ↑/k up • ↓/j down • r reload • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";
const CURSOR_SYMBOL: &str = "▶";

const SELECTED_COLOR: Color = Color::Green;
const UNSELECTED_COLOR: Color = Color::Red;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(
    terminal.backend_mut(),
    DisableMouseCapture,
    LeaveAlternateScreen
  )?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let arguments = Arguments::parse();

  logging::init(arguments.log_file.as_deref(), &arguments.log_level)
    .context("could not initialize logging")?;

  let source = ItemSource::from(arguments.items);

  let items = source.load().context("could not load items")?;

  info!(source = %source.describe(), count = items.len(), "items loaded");

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(State::new(source, items));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let heading = |text: &'static str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", heading("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    eprintln!();
    eprintln!("{}", heading("because:"));

    for cause in causes {
      eprintln!("{} {cause}", heading("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", heading("backtrace:"));
    eprintln!("{backtrace}");
  }
}

fn main() {
  if let Err(error) = run() {
    report(&error);
    process::exit(1);
  }
}
