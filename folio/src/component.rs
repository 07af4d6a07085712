//! Component trait: a page behavior mounted on a [`Runtime`](crate::Runtime).

use pagedom::Event;

use crate::context::Context;

/// Identifies a mounted component. Timers and frame requests are owned by
/// the component that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A reactive page behavior.
///
/// Every hook receives a [`Context`] giving access to the document and the
/// scheduler. All hooks run to completion on the runtime's single thread.
///
/// # Example
///
/// ```ignore
/// struct Blink { visible: bool }
///
/// impl Component for Blink {
///     fn name(&self) -> &'static str { "blink" }
///
///     fn on_start(&mut self, cx: &mut Context<'_>) {
///         cx.set_timeout(Duration::from_millis(500), 0);
///     }
///
///     fn on_timer(&mut self, _tag: u32, cx: &mut Context<'_>) {
///         self.visible = !self.visible;
///         cx.set_timeout(Duration::from_millis(500), 0);
///     }
/// }
/// ```
pub trait Component {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Called once when the component is mounted.
    fn on_start(&mut self, _cx: &mut Context<'_>) {}

    /// Called for every dispatched event, after the document's default action.
    fn on_event(&mut self, _event: &Event, _cx: &mut Context<'_>) {}

    /// Called when a timer scheduled by this component fires. `tag` is the
    /// value passed to [`Context::set_timeout`].
    fn on_timer(&mut self, _tag: u32, _cx: &mut Context<'_>) {}

    /// Called once per frame request made through [`Context::request_frame`].
    fn on_frame(&mut self, _cx: &mut Context<'_>) {}

    /// Called when the component is unmounted or the runtime stops.
    /// Pending timers and frames are cancelled right after this returns.
    fn on_stop(&mut self, _cx: &mut Context<'_>) {}
}
