use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::TabsViewModel;

/// Widget wrapper for rendering the tab line from view model
pub struct TabsWidget<'a>(pub &'a TabsViewModel);

impl Widget for TabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let vm = self.0;

        // Fill the entire row with the line background color first
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg);
        }

        for ((_, tab_area), tab) in vm.tab_areas(area).into_iter().zip(&vm.tabs) {
            buf.set_stringn(
                tab_area.x,
                tab_area.y,
                &tab.display_text,
                tab_area.width as usize,
                tab.style,
            );
        }
    }
}
