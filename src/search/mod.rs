pub mod controller;
pub mod debounce;
pub mod map;
pub mod page;

pub use controller::{ChatMessage, ChatRole, Phase, SearchController};
pub use map::{MapAdapter, StaticMap};
