use crate::tui::{
    inputs::{map_event, Action, Focus},
    views::{self, CardView, Screen},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashgen_core::{RequestController, Session, SubmitOutcome};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct TuiApp {
    pub ctl: RequestController,
    pub rt: Arc<Runtime>,
    focus: Focus,
    topic: String,
    sel: usize,
    flipped: Vec<bool>,
    known: Vec<bool>,
    seen_generation: u64,
    notice: Option<String>,
    outcome_tx: Sender<SubmitOutcome>,
    outcome_rx: Receiver<SubmitOutcome>,
}

impl TuiApp {
    pub fn new(ctl: RequestController, rt: Arc<Runtime>) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            ctl,
            rt,
            focus: Focus::Topic,
            topic: String::new(),
            sel: 0,
            flipped: vec![],
            known: vec![],
            seen_generation: 0,
            notice: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Runs the request on the runtime so the screen keeps drawing while loading.
    fn submit(&mut self) {
        let ctl = self.ctl.clone();
        let tx = self.outcome_tx.clone();
        let topic = self.topic.clone();
        self.rt.spawn(async move {
            let outcome = ctl.submit(&topic).await;
            let _ = tx.send(outcome);
        });
    }

    fn sync_session(&mut self, session: &Session) {
        if session.generation != self.seen_generation {
            self.seen_generation = session.generation;
            self.flipped = vec![false; session.cards.len()];
            self.known = vec![false; session.cards.len()];
            self.sel = 0;
        }

        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.notice = match outcome {
                SubmitOutcome::Failed { notice } => {
                    Some(format!("Failed to generate flashcards. Please try again. ({notice})"))
                }
                SubmitOutcome::Busy => Some("Still generating, please wait.".to_string()),
                SubmitOutcome::Generated { cards } if cards.is_empty() => {
                    Some("The reply contained no Q:/A: pairs.".to_string())
                }
                SubmitOutcome::Generated { .. } => {
                    self.focus = Focus::Cards;
                    None
                }
                SubmitOutcome::Ignored => None,
            };
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            let session = self.ctl.snapshot();
            self.sync_session(&session);

            terminal.draw(|f| {
                let cards = session
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(i, card)| CardView {
                        card,
                        flipped: self.flipped.get(i).copied().unwrap_or(false),
                        known: self.known.get(i).copied().unwrap_or(false),
                    })
                    .collect();
                let screen = Screen {
                    topic: &self.topic,
                    focus: self.focus,
                    loading: session.phase.is_loading(),
                    cards,
                    sel: self.sel,
                    notice: self.notice.as_deref(),
                };
                views::draw_ui(f, f.size(), &screen);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?, self.focus);
                if action == Action::None {
                    continue;
                }
                self.notice = None;
                let count = session.cards.len();
                match action {
                    Action::Quit => break,
                    Action::Type(c) => {
                        self.topic.push(c);
                        self.ctl.set_topic(self.topic.as_str());
                    }
                    Action::Backspace => {
                        self.topic.pop();
                        self.ctl.set_topic(self.topic.as_str());
                    }
                    Action::Submit => self.submit(),
                    Action::SwitchFocus => {
                        self.focus = match self.focus {
                            Focus::Topic if count > 0 => Focus::Cards,
                            _ => Focus::Topic,
                        };
                    }
                    Action::Up => self.sel = self.sel.saturating_sub(1),
                    Action::Down => {
                        if self.sel + 1 < count { self.sel += 1; }
                    }
                    Action::Flip => {
                        if let Some(f) = self.flipped.get_mut(self.sel) { *f = !*f; }
                    }
                    Action::MarkKnown => {
                        if let (Some(k), Some(card)) = (self.known.get_mut(self.sel), session.cards.get(self.sel)) {
                            *k = true;
                            tracing::info!(question = card.question(), "marked as known");
                        }
                    }
                    Action::None => {}
                }
            }
        }
        Ok(())
    }
}
