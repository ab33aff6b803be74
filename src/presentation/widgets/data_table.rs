//! Shared table rendering for the list panels
//!
//! Every list panel is the same shape: an optional alert box above a
//! bordered table with a highlighted selection. Panels only supply the
//! columns and rows.

use ratatui::{prelude::*, widgets::*};

/// One table column: header text plus its width constraint.
pub struct Column {
    pub title: &'static str,
    pub constraint: Constraint,
}

impl Column {
    pub fn new(title: &'static str, constraint: Constraint) -> Self {
        Self { title, constraint }
    }
}

/// A fully described panel page, ready to render.
pub struct TablePage<'a> {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row<'a>>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub alert: Option<&'a str>,
}

impl<'a> TablePage<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let body = match self.alert {
            Some(alert) => {
                let layout = Layout::new(
                    Direction::Vertical,
                    [Constraint::Length(3), Constraint::Min(0)],
                )
                .split(area);
                render_alert(alert, frame, layout[0]);
                layout[1]
            }
            None => area,
        };

        let title = if self.loading {
            format!("{} (loading...)", self.title)
        } else {
            self.title
        };

        let header = Row::new(
            self.columns
                .iter()
                .map(|c| Cell::from(c.title))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().bold());

        let widths = self
            .columns
            .iter()
            .map(|c| c.constraint)
            .collect::<Vec<_>>();

        let table = Table::new(self.rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().reversed())
            .highlight_symbol("> ");

        let mut table_state = TableState::default().with_selected(self.selected);
        frame.render_stateful_widget(table, body, &mut table_state);
    }
}

/// Red bordered error box above a panel's table.
fn render_alert(message: &str, frame: &mut Frame, area: Rect) {
    let alert = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title("Error"));
    frame.render_widget(alert, area);
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn rendered_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let chars: Vec<char> = buffer
            .content()
            .iter()
            .flat_map(|cell| cell.symbol().chars())
            .collect();
        chars.chunks(width).map(|line| line.iter().collect()).collect()
    }

    #[test]
    fn test_column_holds_title_and_constraint() {
        let column = Column::new("Name", Constraint::Min(10));
        assert_eq!(column.title, "Name");
        assert_eq!(column.constraint, Constraint::Min(10));
    }

    #[test]
    fn test_renders_one_line_per_row() -> Result<()> {
        let backend = TestBackend::new(30, 9);
        let mut terminal = Terminal::new(backend)?;

        terminal.draw(|frame| {
            TablePage {
                title: "Waiters".to_string(),
                columns: vec![
                    Column::new("ID", Constraint::Length(4)),
                    Column::new("Name", Constraint::Min(10)),
                ],
                rows: vec![
                    Row::new(vec!["1", "Sam"]),
                    Row::new(vec!["2", "Alex"]),
                    Row::new(vec!["3", "Kim"]),
                ],
                selected: Some(0),
                loading: false,
                alert: None,
            }
            .render(frame, frame.area());
        })?;

        let lines = rendered_lines(&terminal);
        let names = ["Sam", "Alex", "Kim"];
        let data_lines = lines
            .iter()
            .filter(|line| names.iter().any(|name| line.contains(name)))
            .count();
        assert_eq!(data_lines, 3);

        // Header above the data, nothing below the last row
        assert!(lines[1].contains("ID"));
        assert!(lines[2].contains("Sam"));
        assert!(!lines[5].contains(|c: char| c.is_ascii_alphanumeric()));

        Ok(())
    }

    #[test]
    fn test_alert_box_sits_above_the_table() -> Result<()> {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend)?;

        terminal.draw(|frame| {
            TablePage {
                title: "Stock".to_string(),
                columns: vec![Column::new("Name", Constraint::Min(10))],
                rows: vec![Row::new(vec!["Flour"])],
                selected: None,
                loading: false,
                alert: Some("Failed to load stock."),
            }
            .render(frame, frame.area());
        })?;

        let lines = rendered_lines(&terminal);
        assert!(lines[0].contains("Error"));
        assert!(lines[1].contains("Failed to load stock."));
        assert!(lines[3].contains("Stock"));
        assert!(lines.iter().any(|line| line.contains("Flour")));

        Ok(())
    }
}
