use ratatui::layout::Rect;

pub mod app_view;
pub mod movie_card_view;
pub mod navbar_view;
pub mod status_bar;
pub mod tabs_view;

pub use app_view::AppView;
pub use movie_card_view::MovieCard;
pub use navbar_view::NavbarView;

/// What a view did with an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for this view, let the global keymap have it
    Ignored,
    /// Consumed; anything visible changes through dispatched actions
    Handled,
    /// Consumed and local UI state changed
    NeedsRedraw,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self != EventOutcome::Ignored
    }

    pub fn needs_redraw(self) -> bool {
        self == EventOutcome::NeedsRedraw
    }
}

/// A rect `percent_x` wide and `height` tall, centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 10, area), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_clamps_height() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(100, 10, area);
        assert_eq!(rect, area);
    }
}
