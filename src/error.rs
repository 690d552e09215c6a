use thiserror::Error;

/// Errors that can occur while building the toolbar
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolBarError {
    /// The panel geometry leaves no room for the icons
    #[error("Toolbar panel height {height} is not positive for {brushes} brushes")]
    InvalidPanelHeight { brushes: usize, height: i64 },

    /// More brushes than the toolbar can show, with the strict limit enabled
    #[error("Toolbar holds at most {max} brushes, got {supplied}")]
    TooManyBrushes { supplied: usize, max: usize },
}

pub type ToolBarResult<T> = Result<T, ToolBarError>;
