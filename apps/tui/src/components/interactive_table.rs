//! Interactive table component for the Utils screen.
//!
//! Provides a row-selectable table that takes keyboard focus while its menu
//! entry is switched on.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

/// Interactive table component for displaying selectable rows
#[derive(Debug, Clone)]
pub struct InteractiveTable {
    /// Table state for selection tracking
    state: TableState,
    /// Table items (rows)
    items: Vec<Vec<String>>,
    /// Column headers
    headers: Vec<String>,
    /// Column widths (constraints)
    widths: Vec<Constraint>,
    /// Whether the table receives key input
    focused: bool,
}

impl InteractiveTable {
    /// Creates a new interactive table
    pub fn new(headers: Vec<String>, widths: Vec<Constraint>) -> Self {
        Self {
            state: TableState::default(),
            items: Vec::new(),
            headers,
            widths,
            focused: false,
        }
    }

    /// Table of world cities used as demo destinations.
    pub fn destinations() -> Self {
        let mut table = Self::new(
            vec!["Rank".into(), "City".into(), "Country".into(), "Population".into()],
            vec![
                Constraint::Length(4),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        );
        let rows = [
            ["1", "Tokyo", "Japan", "37,274,000"],
            ["2", "Delhi", "India", "32,065,760"],
            ["3", "Shanghai", "China", "28,516,904"],
            ["4", "Dhaka", "Bangladesh", "22,478,116"],
            ["5", "São Paulo", "Brazil", "22,429,800"],
            ["6", "Mexico City", "Mexico", "22,085,140"],
            ["7", "Cairo", "Egypt", "21,750,020"],
            ["8", "Beijing", "China", "21,333,332"],
            ["9", "Mumbai", "India", "20,961,472"],
            ["10", "Osaka", "Japan", "19,059,856"],
        ];
        table.set_items(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        );
        table
    }

    /// Sets the table items
    pub fn set_items(&mut self, items: Vec<Vec<String>>) {
        self.items = items;
        // Reset selection if out of bounds
        if let Some(selected) = self.state.selected() {
            if selected >= self.items.len() {
                self.state.select(if self.items.is_empty() { None } else { Some(0) });
            }
        } else if !self.items.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Moves selection up, stopping at the first row
    pub fn previous(&mut self) {
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    /// Moves selection down, stopping at the last row
    pub fn next(&mut self) {
        let last = self.items.len().saturating_sub(1);
        let i = self.state.selected().map_or(0, |i| (i + 1).min(last));
        self.state.select(Some(i));
    }

    /// Gets the currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Gets the currently selected row
    pub fn selected_row(&self) -> Option<&[String]> {
        self.state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(Vec::as_slice)
    }

    /// Renders the table
    pub fn render(&mut self, frame: &mut Frame, area: Rect, title: Option<&str>) {
        let theme = crate::theme::get_theme();
        let border_color = if self.focused { theme.active } else { theme.border };

        if self.items.is_empty() {
            let empty_widget = Paragraph::new("No items to display")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color))
                        .title(title.unwrap_or("")),
                );
            frame.render_widget(empty_widget, area);
            return;
        }

        let header_row = Row::new(self.headers.iter().map(|h| {
            Cell::from(h.as_str()).style(Style::default().fg(theme.logo).add_modifier(Modifier::BOLD))
        }))
        .height(1);

        let rows: Vec<Row> = self
            .items
            .iter()
            .map(|item| {
                Row::new(item.iter().map(|cell| Cell::from(cell.as_str())))
                    .style(Style::default().fg(theme.text))
                    .height(1)
            })
            .collect();

        // Only a focused table shows its selection.
        let highlight = if self.focused {
            Style::default()
                .fg(theme.bg_element)
                .bg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let table = Table::new(rows, &self.widths)
            .header(header_row)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title.unwrap_or("")),
            )
            .row_highlight_style(highlight)
            .highlight_symbol(if self.focused { "▶ " } else { "  " });

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}
