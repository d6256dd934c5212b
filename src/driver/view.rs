//! View layer contract and the line-oriented terminal view.

use crate::core::Phase;
use crate::session::SessionSnapshot;
use std::io::{self, Write};

/// Passive consumer of session state.
pub trait View {
    /// Called with the latest state after every event that changed it.
    fn render(&mut self, snapshot: &SessionSnapshot) -> io::Result<()>;
}

/// Prints changes to a writer, one line per change.
///
/// The clock is only announced every ten seconds and for the last five, so
/// a running game does not flood the terminal.
pub struct TerminalView<W> {
    out: W,
    last: Option<SessionSnapshot>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
        let last = self.last.as_ref();
        let restarted = last.is_some_and(|l| l.session_id != snapshot.session_id);
        let changed =
            |differs: &dyn Fn(&SessionSnapshot) -> bool| restarted || last.is_none_or(differs);

        if restarted {
            writeln!(self.out, "--- New game ---")?;
        }
        if changed(&|l| l.score != snapshot.score) {
            writeln!(self.out, "Score: {}", snapshot.score)?;
        }
        if !snapshot.hint.is_empty() && changed(&|l| l.hint != snapshot.hint) {
            writeln!(self.out, "{}", snapshot.hint)?;
        }
        if !snapshot.message.is_empty()
            && changed(&|l| l.message != snapshot.message || l.submissions != snapshot.submissions)
        {
            writeln!(self.out, "{}", snapshot.message)?;
        }

        let t = snapshot.time_remaining;
        if snapshot.phase == Phase::Active
            && (t % 10 == 0 || t <= 5)
            && changed(&|l| l.time_remaining != t)
        {
            writeln!(self.out, "Time remaining: {t}s")?;
        }

        if snapshot.phase == Phase::Expired && changed(&|l| l.phase != snapshot.phase) {
            if snapshot.time_remaining == 0 {
                writeln!(self.out, "Time's up! Final score: {}", snapshot.score)?;
            } else {
                writeln!(self.out, "No characters left! Final score: {}", snapshot.score)?;
            }
            writeln!(self.out, "Type :restart to play again or :quit to leave.")?;
        }

        self.out.flush()?;
        self.last = Some(snapshot.clone());
        Ok(())
    }
}
