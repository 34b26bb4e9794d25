//! Service adapters: concrete matchers, mapping tables, window providers and
//! on-disk settings.

pub mod mapping;
pub mod matchers;
pub mod paths;
pub mod settings;
pub mod window;

pub use mapping::StaticMappingTable;
pub use matchers::{
    build_matcher, AnywhereMatcher, LineStartMatcher, LineStartSkipWhitespaceMatcher,
    SearchMatcher, TokenStartMatcher, VerticalMatcher, WordStartMatcher,
};
pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from,
    write_default_settings,
};
pub use window::{RopeWindow, RopeWindowProvider, Viewport};
