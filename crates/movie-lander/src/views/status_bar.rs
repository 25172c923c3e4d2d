//! Status Bar Widget
//!
//! Format: ` key desc  key desc ...            summary `

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let summary_width = vm.summary.chars().count() as u16 + 1;
        let hints_end = right.saturating_sub(summary_width + 1);

        let mut x = area.x + 1; // 1 char padding
        for (key, description) in &vm.hints {
            let needed = (key.chars().count() + description.chars().count() + 3) as u16;
            if x + needed > hints_end {
                break;
            }
            let (next_x, _) = buf.set_stringn(x, area.y, key, usize::MAX, vm.key_style);
            let (next_x, _) = buf.set_stringn(
                next_x + 1,
                area.y,
                description,
                usize::MAX,
                vm.description_style,
            );
            x = next_x + 2;
        }

        if summary_width < area.width {
            buf.set_string(right - summary_width, area.y, &vm.summary, vm.summary_style);
        }
    }
}
