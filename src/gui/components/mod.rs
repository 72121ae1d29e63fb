//! GUI components

pub mod download_item;
pub mod history_item;
pub mod result_card;
pub mod url_input;

// Re-export for convenience
pub use download_item::download_item;
pub use history_item::history_item;
pub use result_card::result_card;
pub use url_input::url_input;
