pub mod components;
pub mod preferences;
pub mod toolbar;

pub use components::*;
pub use preferences::*;
pub use toolbar::*;
