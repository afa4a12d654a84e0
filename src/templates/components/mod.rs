pub mod chat;
pub mod listing_card;
pub mod map_panel;

pub use chat::chat_panel;
pub use listing_card::listing_card;
pub use map_panel::map_panel;
