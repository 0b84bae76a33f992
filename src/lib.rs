// TaskManager - In-memory to-do list with completed and removed views

pub mod config;
pub mod filter;
pub mod id;
pub mod models;
pub mod render;
pub mod screen;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use filter::Filter;
pub use id::{IdGenerator, IdScheme, SequentialIds, TimeOrderedIds};
pub use models::{Snapshot, Task, TaskState};
pub use render::Renderer;
pub use screen::{Navigator, Screen};
pub use shell::{Command, Shell, Step};
pub use store::TaskList;
