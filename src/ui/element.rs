//! Element tree: a parent owns its children and dispatches input and
//! drawing to them depth-first.

use super::context::AppContext;
use super::input::InputEvents;
use super::render::{Rect, Renderer};

/// Geometry and visibility shared by every element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub hidden: bool,
}

impl Frame {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

pub trait Element {
    fn frame(&self) -> &Frame;
    fn frame_mut(&mut self) -> &mut Frame;

    /// Handle one input event. Returns true if the event was consumed.
    fn process(&mut self, _event: &mut InputEvents, _ctx: &mut AppContext) -> bool {
        false
    }

    /// Draw at `origin` (the parent's top-left corner in layout space)
    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32));

    fn position(&mut self, x: i32, y: i32) {
        let frame = self.frame_mut();
        frame.x = x;
        frame.y = y;
    }

    fn resize(&mut self, width: i32, height: i32) {
        let frame = self.frame_mut();
        frame.width = width;
        frame.height = height;
    }

    fn is_hidden(&self) -> bool {
        self.frame().hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.frame_mut().hidden = hidden;
    }
}

/// Default dispatch: every visible child sees the event, in order
pub fn process_children(
    children: &mut [Box<dyn Element>],
    event: &mut InputEvents,
    ctx: &mut AppContext,
) -> bool {
    let mut consumed = false;
    for child in children.iter_mut().filter(|c| !c.is_hidden()) {
        consumed |= child.process(event, ctx);
    }
    consumed
}

pub fn render_children(children: &[Box<dyn Element>], r: &mut dyn Renderer, origin: (i32, i32)) {
    for child in children.iter().filter(|c| !c.is_hidden()) {
        child.render(r, origin);
    }
}
