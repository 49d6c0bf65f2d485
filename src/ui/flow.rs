use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Opaque renderable root returned by `Coordinator::start`.
pub trait FlowView {
    fn title(&self) -> String;

    /// Reconcile every navigation stack owned by this view.
    fn sync(&mut self);

    /// Hidden views keep syncing but do not tell their screens they appeared.
    fn set_visible(&mut self, _visible: bool) {}

    /// Advance host animations and poll screen view-models, then sync.
    fn tick(&mut self);

    /// Returns true when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    fn render(&self, frame: &mut Frame<'_>, area: Rect);

    /// Titles of the visible stack, root first.
    fn breadcrumb(&self) -> Vec<String>;

    /// Key hints for the footer.
    fn hints(&self) -> String;
}
