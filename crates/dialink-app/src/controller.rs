//! View controller abstraction.

use chrono::NaiveDate;

use crate::{ViewAction, ViewEvent};

/// A sans-IO view state machine.
///
/// Exactly two implementations exist: [`crate::DialogView`] for the open
/// conversation and [`crate::DialogListView`] for the conversation list.
/// Both share one transport primitive and one integrity-check idiom through
/// the generic [`crate::Runtime`].
pub trait ViewController {
    /// Process one event and return the actions it produced.
    fn handle(&mut self, event: ViewEvent) -> Vec<ViewAction>;

    /// Read-only display projection of the current state, one line per item.
    fn render_lines(&self, today: NaiveDate) -> Vec<String>;
}
