//! Clickable line lists.
//!
//! [`ActionList`] keeps rendered lines together with the action each one
//! triggers, so click rows never drift from what is drawn. Disabled actions
//! are drawn but not clickable, like a greyed-out button.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

pub struct ActionList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` for every enabled action.
    actions: Vec<(u16, u16)>,
}

impl<'a> ActionList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// A line with no action.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// A line bound to `action_id`. Only registered as a target when `enabled`.
    pub fn push_action(&mut self, line: Line<'a>, action_id: u16, enabled: bool) {
        if enabled {
            self.actions.push((self.lines.len() as u16, action_id));
        }
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for the enabled actions.
    ///
    /// `top_offset`/`bottom_offset` are the rows taken by borders. Lines are
    /// assumed not to wrap.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16, bottom_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row < content_end {
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}
