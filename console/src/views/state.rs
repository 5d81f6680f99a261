//! Screen state shared by the list/form views

use shared::FormMode;

/// Everything a collection screen can be showing
///
/// One value replaces separate loading, error and form-visibility flags, so
/// states such as "loading with a stale error" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<R, F> {
    Loading,
    Ready {
        rows: Vec<R>,
    },
    Editing {
        rows: Vec<R>,
        mode: FormMode,
        form: F,
        error: Option<String>,
    },
    Error {
        message: String,
        rows: Vec<R>,
    },
}

impl<R, F> Default for ViewState<R, F> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<R, F> ViewState<R, F> {
    pub fn rows(&self) -> &[R] {
        match self {
            ViewState::Loading => &[],
            ViewState::Ready { rows }
            | ViewState::Editing { rows, .. }
            | ViewState::Error { rows, .. } => rows,
        }
    }

    /// Take the rows out, leaving the state `Loading`
    pub fn take_rows(&mut self) -> Vec<R> {
        match std::mem::take(self) {
            ViewState::Loading => Vec::new(),
            ViewState::Ready { rows }
            | ViewState::Editing { rows, .. }
            | ViewState::Error { rows, .. } => rows,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ViewState::Editing { .. })
    }

    pub fn form(&self) -> Option<(&FormMode, &F)> {
        match self {
            ViewState::Editing { mode, form, .. } => Some((mode, form)),
            _ => None,
        }
    }

    /// Message of the error panel or of the open form
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error { message, .. } => Some(message),
            ViewState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
