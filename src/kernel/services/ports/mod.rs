//! Service ports: traits + data contracts.

pub mod config;
pub mod mapping;
pub mod matcher;
pub mod settings;
pub mod window;

pub use config::{HintDirection, HintPosition, JumpOptions};
pub use mapping::{MappingTable, NoMappings};
pub use matcher::{MatchContext, Matcher, MatcherError, MatcherKind, Result as MatcherResult};
pub use settings::Settings;
pub use window::{
    BufferHandle, LineContext, Position, WindowContext, WindowContextProvider, WindowHandle,
};
