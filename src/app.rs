use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::state::{SessionState, Transition};
use crate::stats::summarize;
use crate::ui::{HistogramRenderer, Markers};

/// Opens a file picker; `None` when the user cancels.
pub type FilePicker = Box<dyn FnMut() -> Option<PathBuf>>;

/// Keyword at the file prompt that opens the picker.
pub const BROWSE: &str = "browse";

/// Read one line, `None` at end of input. Bytes that are not UTF-8 become
/// U+FFFD, so bad input is reported like any other invalid text.
pub(crate) fn read_console_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    if let std::borrow::Cow::Owned(_) = line {
        log::warn!("Console input was not valid UTF-8");
    }
    Ok(Some(line.into_owned()))
}

// ---------------------------------------------------------------------------
// Console driver for the statistics session
// ---------------------------------------------------------------------------

/// Runs [`SessionState`] against a line-oriented console.
///
/// Generic over the input and output so sessions can be scripted.
pub struct StatsApp<R, W> {
    input: R,
    output: W,
    renderer: Box<dyn HistogramRenderer>,
    picker: Option<FilePicker>,
    bins: usize,
    precision: usize,
    state: SessionState,
}

impl<R: BufRead, W: Write> StatsApp<R, W> {
    pub fn new(input: R, output: W, renderer: Box<dyn HistogramRenderer>) -> Self {
        Self {
            input,
            output,
            renderer,
            picker: None,
            bins: 20,
            precision: 4,
            state: SessionState::default(),
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_picker(mut self, picker: FilePicker) -> Self {
        self.picker = Some(picker);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Statistics ===")?;
        while !self.state.is_terminated() {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the state machine by one event. Only console I/O errors
    /// escape; load and render failures become notices.
    pub fn step(&mut self) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);

        let transition = match state {
            SessionState::Reporting(ref seq) => {
                self.report(seq)?;
                state.on_reported()
            }
            SessionState::Terminated => Transition {
                next: state,
                notice: None,
            },
            _ => match self.read_line(&state)? {
                None => state.on_end_of_input(),
                Some(line) => self.accept(state, &line),
            },
        };

        if let Some(notice) = &transition.notice {
            writeln!(self.output, "{notice}")?;
        }
        self.state = transition.next;
        Ok(())
    }

    fn accept(&mut self, state: SessionState, line: &str) -> Transition {
        if state == SessionState::AwaitingFilePath && line.trim().eq_ignore_ascii_case(BROWSE) {
            if let Some(picker) = self.picker.as_mut() {
                return match picker() {
                    Some(path) => state.on_path(&path),
                    None => state.on_pick_cancelled(),
                };
            }
        }
        state.on_input(line)
    }

    fn read_line(&mut self, state: &SessionState) -> io::Result<Option<String>> {
        if let Some(prompt) = state.prompt() {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        read_console_line(&mut self.input)
    }

    fn report(&mut self, seq: &crate::data::NumericSequence) -> io::Result<()> {
        let summary = summarize(seq);
        writeln!(self.output, "{}", summary.report(self.precision))?;
        self.output.flush()?;

        let markers = Markers {
            mean: summary.mean,
            median: summary.median,
        };
        if let Err(e) = self.renderer.render(seq, self.bins, markers) {
            log::error!("Histogram rendering failed: {e:#}");
            writeln!(self.output, "Error: could not draw histogram: {e:#}")?;
        }
        Ok(())
    }
}
