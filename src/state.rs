use std::fmt;
use std::path::Path;

use crate::data::model::UnrecognizedChoice;
use crate::data::{load_from_file, load_from_manual_text, NumericSequence, SourceChoice};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Where the statistics session currently stands, independent of console I/O.
///
/// ```text
///            "1"                      ok
///   Choice ──────► ManualData ────────────────┐
///     ▲ │  "2"                        ok      ▼
///     │ └────────► FilePath ─────────────► Reporting
///     │                 │ err                 │
///     ├─────────────────┘ (and ManualData)    │
///     └───────────────────────────────────────┘
///   Choice ── "exit" ──► Terminated
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    AwaitingChoice,
    AwaitingManualData,
    AwaitingFilePath,
    Reporting(NumericSequence),
    Terminated,
}

/// One-line message produced by a transition.
#[derive(Debug)]
pub enum Notice {
    InvalidChoice(UnrecognizedChoice),
    LoadFailed(LoadError),
    NoFileSelected,
    Goodbye,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InvalidChoice(c) => write!(f, "Error: {c}"),
            Notice::LoadFailed(e) => write!(f, "Error: {e}"),
            Notice::NoFileSelected => write!(f, "No file selected."),
            Notice::Goodbye => write!(f, "Exiting statistics."),
        }
    }
}

/// Result of feeding one event to the state machine.
#[derive(Debug)]
pub struct Transition {
    pub next: SessionState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn to(next: SessionState) -> Self {
        Self { next, notice: None }
    }

    fn with(next: SessionState, notice: Notice) -> Self {
        Self {
            next,
            notice: Some(notice),
        }
    }

    fn loaded(result: Result<NumericSequence, LoadError>) -> Self {
        match result {
            Ok(seq) => Self::to(SessionState::Reporting(seq)),
            Err(e) => Self::with(SessionState::AwaitingChoice, Notice::LoadFailed(e)),
        }
    }
}

impl SessionState {
    /// Prompt shown while waiting for a line in this state.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            SessionState::AwaitingChoice => {
                Some("Choose a data source: [1] enter numbers, [2] load a file, or 'exit': ")
            }
            SessionState::AwaitingManualData => Some("Enter numbers separated by commas: "),
            SessionState::AwaitingFilePath => Some("Enter the path to a data file: "),
            SessionState::Reporting(_) | SessionState::Terminated => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }

    /// Consume one line of user input.
    ///
    /// Every failure returns to `AwaitingChoice`; nothing is retried inside a
    /// sub-state. States that take no input are returned unchanged.
    pub fn on_input(self, line: &str) -> Transition {
        match self {
            SessionState::AwaitingChoice => match line.parse::<SourceChoice>() {
                Ok(SourceChoice::ManualEntry) => Transition::to(SessionState::AwaitingManualData),
                Ok(SourceChoice::FileEntry) => Transition::to(SessionState::AwaitingFilePath),
                Ok(SourceChoice::Exit) => Transition::with(SessionState::Terminated, Notice::Goodbye),
                Err(e) => Transition::with(SessionState::AwaitingChoice, Notice::InvalidChoice(e)),
            },
            SessionState::AwaitingManualData => Transition::loaded(load_from_manual_text(line)),
            SessionState::AwaitingFilePath => self.on_path(Path::new(line.trim())),
            other => Transition::to(other),
        }
    }

    /// Load a file chosen at `AwaitingFilePath`, typed or picked.
    pub fn on_path(self, path: &Path) -> Transition {
        match self {
            SessionState::AwaitingFilePath => Transition::loaded(load_from_file(path)),
            other => Transition::to(other),
        }
    }

    /// The file picker was dismissed without a choice.
    pub fn on_pick_cancelled(self) -> Transition {
        match self {
            SessionState::AwaitingFilePath => {
                Transition::with(SessionState::AwaitingChoice, Notice::NoFileSelected)
            }
            other => Transition::to(other),
        }
    }

    /// Input ended: behaves like `exit` from any state.
    pub fn on_end_of_input(self) -> Transition {
        match self {
            SessionState::Terminated => Transition::to(SessionState::Terminated),
            _ => Transition::with(SessionState::Terminated, Notice::Goodbye),
        }
    }

    /// The report for the carried sequence has been produced.
    pub fn on_reported(self) -> Transition {
        match self {
            SessionState::Reporting(_) => Transition::to(SessionState::AwaitingChoice),
            other => Transition::to(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_menu_transitions() {
        let t = SessionState::AwaitingChoice.on_input("1");
        assert_eq!(t.next, SessionState::AwaitingManualData);
        assert!(t.notice.is_none());

        let t = SessionState::AwaitingChoice.on_input("2\n");
        assert_eq!(t.next, SessionState::AwaitingFilePath);

        let t = SessionState::AwaitingChoice.on_input("exit");
        assert!(t.next.is_terminated());
        assert!(matches!(t.notice, Some(Notice::Goodbye)));
    }

    #[test]
    fn test_invalid_choice_stays() {
        let t = SessionState::AwaitingChoice.on_input("3");
        assert_eq!(t.next, SessionState::AwaitingChoice);
        assert!(matches!(t.notice, Some(Notice::InvalidChoice(_))));
    }

    #[test]
    fn test_manual_success_reports() {
        let t = SessionState::AwaitingManualData.on_input("1, 2, 3");
        match t.next {
            SessionState::Reporting(seq) => assert_eq!(seq.values(), &[1.0, 2.0, 3.0]),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_manual_failure_returns_to_menu() {
        let t = SessionState::AwaitingManualData.on_input("1, x");
        assert_eq!(t.next, SessionState::AwaitingChoice);
        assert!(matches!(t.notice, Some(Notice::LoadFailed(LoadError::Parse(_)))));

        let t = SessionState::AwaitingManualData.on_input("");
        assert!(matches!(t.notice, Some(Notice::LoadFailed(LoadError::EmptyInput))));
    }

    #[test]
    fn test_file_path_transitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"10 20 30")
            .unwrap();

        let t = SessionState::AwaitingFilePath.on_input(&format!("  {}  ", path.display()));
        assert!(matches!(t.next, SessionState::Reporting(ref s) if s.len() == 3));

        let t = SessionState::AwaitingFilePath.on_input("/definitely/not/here.txt");
        assert_eq!(t.next, SessionState::AwaitingChoice);
        assert!(matches!(t.notice, Some(Notice::LoadFailed(LoadError::NotFound { .. }))));
    }

    #[test]
    fn test_reported_and_absorbing() {
        let seq = crate::data::validate_sequence(vec![1.0]).unwrap();
        let t = SessionState::Reporting(seq).on_reported();
        assert_eq!(t.next, SessionState::AwaitingChoice);

        let t = SessionState::Terminated.on_input("1");
        assert!(t.next.is_terminated());
        let t = SessionState::Terminated.on_end_of_input();
        assert!(t.next.is_terminated() && t.notice.is_none());
    }

    #[test]
    fn test_pick_cancelled() {
        let t = SessionState::AwaitingFilePath.on_pick_cancelled();
        assert_eq!(t.next, SessionState::AwaitingChoice);
        assert!(matches!(t.notice, Some(Notice::NoFileSelected)));
    }

    #[test]
    fn test_prompts() {
        assert!(SessionState::AwaitingChoice.prompt().is_some());
        assert!(SessionState::Terminated.prompt().is_none());
    }
}
