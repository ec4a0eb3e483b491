use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quill::{CharState, Key, Outcome, TypingSession};
use ratatui::{
    Frame,
    style::{Style, Stylize},
    text::{Line, Span, ToLine},
    widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::config::Config;

/// A block with a rounded border
const ROUNDED_BLOCK: Block = Block::bordered().border_type(BorderType::Rounded);

/// The app itself: one typing session, driven to completion or cancellation
pub struct App {
    session: TypingSession,
    config: Config,
}

impl App {
    /// Creates a new `App` over the given passage text
    pub fn new(text: &str, config: Config) -> Self {
        Self {
            session: TypingSession::new(text),
            config,
        }
    }

    /// Runs the session until it completes or is cancelled
    ///
    /// Draws once before the first keystroke, then processes one key event at
    /// a time, redrawing after each.
    pub fn run(&mut self) -> std::io::Result<Outcome> {
        let mut terminal = ratatui::init();

        let outcome = loop {
            terminal.draw(|frame| self.draw(frame))?;

            if self.session.is_complete() {
                break Outcome::Complete;
            }

            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => Self::map_key(key),
                _ => Key::Other,
            };

            if self.session.apply(key) == Outcome::Cancelled {
                break Outcome::Cancelled;
            }
        };

        ratatui::restore();

        Ok(outcome)
    }

    /// Draws the next frame
    fn draw(&self, frame: &mut Frame) {
        let block = ROUNDED_BLOCK
            .padding(Padding::new(1, 1, 0, 0))
            .title_top("OVERTYPE".to_line().bold().centered())
            .title_top("<CTRL-C> to exit".to_line().right_aligned());

        let theme = &self.config.theme;
        let rendered: Vec<(char, Style)> = self.session.render(|ctx| {
            let style = match ctx.state {
                CharState::Correct => Style::new().fg(theme.correct),
                CharState::Incorrect => Style::new().fg(theme.incorrect),
                CharState::Current => Style::new().fg(theme.current).underlined(),
                CharState::Pending => Style::new().fg(theme.pending),
            };
            (ctx.ch, style)
        });

        // Newlines become styled spaces so the cursor stays visible on them
        let mut lines = Vec::new();
        let mut spans = Vec::new();
        for (ch, style) in rendered {
            if ch == '\n' {
                spans.push(Span::styled(" ", style));
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else {
                spans.push(Span::styled(ch.to_string(), style));
            }
        }
        lines.push(Line::from(spans));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, frame.area());
    }

    /// Decode a terminal key event into a session keystroke
    fn map_key(key: KeyEvent) -> Key {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Cancel,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(character) => Key::Char(character),
            _ => Key::Other,
        }
    }
}
