pub mod columns;
pub mod geometry;
pub mod graph;
pub mod session;
mod session_tests;
pub mod threshold;

pub use columns::{
    ColumnSet,
    UnknownCard,
};
pub use graph::{
    ConnectError,
    ConnectionGraph,
};
pub use session::EditorSession;
pub use threshold::ThresholdFilter;
