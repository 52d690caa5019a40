#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  Activate(usize),
  ActivateCursor,
  HideHelp,
  None,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}
