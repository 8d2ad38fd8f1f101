use crate::tui::inputs::Focus;
use crate::tui::theme::*;
use flashgen_core::Flashcard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub struct CardView<'a> {
    pub card: &'a Flashcard,
    pub flipped: bool,
    pub known: bool,
}

pub struct Screen<'a> {
    pub topic: &'a str,
    pub focus: Focus,
    pub loading: bool,
    pub cards: Vec<CardView<'a>>,
    pub sel: usize,
    pub notice: Option<&'a str>,
}

pub fn draw_ui(f: &mut Frame, area: Rect, screen: &Screen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_topic(f, rows[0], screen);
    draw_cards(f, rows[1], screen);

    if let Some(msg) = screen.notice {
        let notice = Paragraph::new(Line::from(Span::raw(msg))).style(notice_style());
        f.render_widget(notice, rows[2]);
    }

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" Enter generate  "),
        Span::raw(" Tab switch  "),
        Span::raw(" ↑/↓ select  "),
        Span::raw(" space flip  "),
        Span::raw(" k known  "),
        Span::raw(" Esc quit "),
    ]))
    .style(footer_style());
    f.render_widget(foot, rows[3]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused { block.border_style(focus_style()) } else { block }
}

fn draw_topic(f: &mut Frame, area: Rect, screen: &Screen) {
    let focused = screen.focus == Focus::Topic;
    let text = if screen.topic.is_empty() && !focused {
        Line::from(Span::raw("Enter a topic (e.g., World War II)").style(footer_style()))
    } else if focused {
        Line::from(vec![Span::raw(screen.topic), Span::raw("▏").style(focus_style())])
    } else {
        Line::from(screen.topic)
    };
    let p = Paragraph::new(text).block(panel("Topic", focused));
    f.render_widget(p, area);
}

fn draw_cards(f: &mut Frame, area: Rect, screen: &Screen) {
    let focused = screen.focus == Focus::Cards;
    let title = format!("Flashcards ({})", screen.cards.len());

    if screen.loading {
        let p = Paragraph::new("Generating flashcards…")
            .style(title_style())
            .block(panel(&title, focused));
        f.render_widget(p, area);
        return;
    }

    if screen.cards.is_empty() {
        let p = Paragraph::new("No flashcards yet. Type a topic and press Enter.")
            .wrap(Wrap { trim: true })
            .block(panel(&title, focused));
        f.render_widget(p, area);
        return;
    }

    let items: Vec<_> = screen
        .cards
        .iter()
        .enumerate()
        .map(|(i, cv)| {
            let selected = focused && i == screen.sel;
            let mut header = vec![Span::raw(format!("{} #{}", if selected { ">" } else { " " }, i + 1))];
            if cv.known {
                header.push(Span::raw("  ✓ known").style(known_style()));
            }
            let header = if selected {
                Line::from(header).style(selected_style())
            } else {
                Line::from(header)
            };
            let face = if cv.flipped {
                Line::from(vec![
                    Span::raw("   A: ").style(title_style()),
                    Span::raw(cv.card.answer()).style(answer_style()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   Q: ").style(title_style()),
                    Span::raw(cv.card.question()),
                ])
            };
            ListItem::new(vec![header, face, Line::from("")])
        })
        .collect();

    // stateful render keeps the selected card scrolled into view
    let mut state = ListState::default().with_selected(Some(screen.sel));
    let list = List::new(items).block(panel(&title, focused));
    f.render_stateful_widget(list, area, &mut state);
}
