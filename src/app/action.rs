/// Side effects the event loop performs after the state has been updated.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Ring the terminal bell
    Bell,
    Quit,
}
