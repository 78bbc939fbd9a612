pub mod open_permalink;
pub mod open_raw_source;
pub mod toggle_favorite;

pub use open_permalink::open_permalink;
pub use open_raw_source::open_raw_source;
pub use toggle_favorite::toggle_favorite;
