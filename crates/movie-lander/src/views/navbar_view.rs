//! Navbar
//!
//! Search input plus the result popup. The query being typed is local UI
//! state; the search result comes from the `search` slice passed in.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::state::SearchState;
use crate::view_models::{NavbarViewModel, SearchResultViewModel};
use crate::views::{centered_rect, EventOutcome};
use movie_lander_theme::Theme;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct NavbarView {
    query: String,
    focused: bool,
}

impl NavbarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Keys while the input is focused; every key is swallowed
    pub fn handle_key(&mut self, key: &KeyEvent, dispatcher: &Dispatcher) -> EventOutcome {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Search(SearchAction::Submit(self.query.clone())));
                self.focused = false;
            }
            KeyCode::Esc => {
                self.focused = false;
            }
            _ => return EventOutcome::Handled,
        }
        EventOutcome::NeedsRedraw
    }

    /// Render the search input line
    pub fn render(&self, search: &SearchState, theme: &Theme, area: Rect, f: &mut Frame) {
        let vm = NavbarViewModel::new(search, &self.query, self.focused, theme);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(vm.border_style)
            .title(" Search ");
        let input = Paragraph::new(vm.input_text.as_str())
            .style(vm.input_style)
            .block(block);
        f.render_widget(input, area);
    }

    /// Render the result popup over `area`, if results are shown
    pub fn render_results(&self, search: &SearchState, theme: &Theme, area: Rect, f: &mut Frame) {
        let vm = NavbarViewModel::new(search, &self.query, self.focused, theme);
        if let Some(result) = vm.result {
            render_result_popup(&result, theme, area, f);
        }
    }
}

fn render_result_popup(vm: &SearchResultViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let popup = centered_rect(60, 10, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(vm.title.as_str(), vm.title_style))];
    lines.extend(
        vm.lines
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), vm.text_style))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(vm.hint.as_str(), vm.hint_style)));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.key_hint())
        .title(" Search result ")
        .style(theme.text().bg(theme.bg_panel));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
