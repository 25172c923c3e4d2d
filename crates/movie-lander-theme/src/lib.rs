//! Theme for movie-lander
//!
//! Semantic colours and prebuilt styles shared by all views.

use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status
    pub status_error: Color,

    // Tab line
    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_fg: Color,
    pub tab_line_bg: Color,

    // Movie cards
    pub card_border: Color,
    pub card_border_selected: Color,
    pub card_title: Color,
    pub favourite_fg: Color,
    pub favourite_button_bg: Color,
    pub unfavourite_button_bg: Color,

    // Navbar
    pub navbar_bg: Color,
    pub navbar_input_fg: Color,
    pub navbar_input_focused_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_error: tailwind::RED.c400,

            tab_active_fg: tailwind::SLATE.c950,
            tab_active_bg: tailwind::CYAN.c400,
            tab_inactive_fg: tailwind::SLATE.c300,
            tab_line_bg: tailwind::SLATE.c800,

            card_border: tailwind::SLATE.c600,
            card_border_selected: tailwind::CYAN.c400,
            card_title: tailwind::SLATE.c100,
            favourite_fg: tailwind::AMBER.c400,
            favourite_button_bg: tailwind::GREEN.c700,
            unfavourite_button_bg: tailwind::RED.c700,

            navbar_bg: tailwind::SLATE.c900,
            navbar_input_fg: tailwind::SLATE.c400,
            navbar_input_focused_fg: tailwind::SLATE.c100,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the active tab
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.tab_active_fg)
            .bg(self.tab_active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive tabs
    pub fn tab_inactive(&self) -> Style {
        Style::default()
            .fg(self.tab_inactive_fg)
            .bg(self.tab_line_bg)
    }

    /// Border style for a movie card
    pub fn card_border(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.card_border_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.card_border)
        }
    }

    /// Style for movie titles inside cards
    pub fn card_title(&self) -> Style {
        Style::default()
            .fg(self.card_title)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the favourite toggle button
    pub fn favourite_button(&self, is_favourite: bool) -> Style {
        let bg = if is_favourite {
            self.unfavourite_button_bg
        } else {
            self.favourite_button_bg
        };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the favourite star marker
    pub fn favourite_marker(&self) -> Style {
        Style::default()
            .fg(self.favourite_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Tab" in "Tab switch")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the search input
    pub fn navbar_input(&self, focused: bool) -> Style {
        let fg = if focused {
            self.navbar_input_focused_fg
        } else {
            self.navbar_input_fg
        };
        Style::default().fg(fg).bg(self.navbar_bg)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
