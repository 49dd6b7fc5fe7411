use crate::ports::hero::{HeadlineFrame, HeadlinePort};
use std::io::{self, Write};
use tracing::debug;

const CURSOR: char = '▌';

/// Redraws the headline in place on one terminal line.
pub struct TerminalHeadline {
    lead: String,
    show_role: bool,
}

impl TerminalHeadline {
    pub fn new(lead: impl Into<String>) -> Self {
        Self {
            lead: lead.into(),
            show_role: true,
        }
    }

    pub fn without_role(mut self) -> Self {
        self.show_role = false;
        self
    }

    pub fn render(&self, frame: &HeadlineFrame) -> String {
        let mut line = format!("{} {}{}", self.lead, frame.text, CURSOR);
        if self.show_role {
            line.push_str(&format!("    [{}]", frame.role));
        }
        line
    }

    /// Moves the cursor off the headline line.
    pub fn finish(&self) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out).and_then(|_| out.flush()) {
            debug!(%err, "terminal headline finish failed");
        }
    }
}

impl HeadlinePort for TerminalHeadline {
    fn publish(&self, frame: &HeadlineFrame) {
        let line = self.render(frame);
        let mut out = io::stdout().lock();
        if let Err(err) = write!(out, "\r\x1b[2K{line}").and_then(|_| out.flush()) {
            debug!(%err, "terminal headline write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hero::TypewriterPhase;

    fn frame(text: &str) -> HeadlineFrame {
        HeadlineFrame {
            text: text.into(),
            role: "MERN Stack Developer".into(),
            role_index: 1,
            phase: TypewriterPhase::Typing,
        }
    }

    #[test]
    fn renders_lead_text_and_role() {
        let headline = TerminalHeadline::new("A");
        assert_eq!(
            headline.render(&frame("MERN")),
            "A MERN▌    [MERN Stack Developer]"
        );
        let headline = TerminalHeadline::new("A").without_role();
        assert_eq!(headline.render(&frame("")), "A ▌");
    }
}
