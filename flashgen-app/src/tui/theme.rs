use ratatui::style::{Color, Style};
use ratatui::style::Stylize;

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn answer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn known_style() -> Style { Style::default().fg(Color::Green) }
pub fn focus_style() -> Style { Style::default().fg(Color::Cyan) }
pub fn notice_style() -> Style { Style::default().fg(Color::White).bg(Color::Red) }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
