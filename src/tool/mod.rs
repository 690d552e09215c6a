pub mod types;
mod brush;
mod trait_def;

pub use brush::{Brush, BrushParams};
pub use trait_def::Tool;
pub use types::BrushKind;

// Re-export specific brush implementations
pub use types::eraser::EraserTool;
pub use types::lines::LinesTool;
pub use types::pen::PenTool;
pub use types::spray::SprayTool;
