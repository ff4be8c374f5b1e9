mod catalog;
mod playlist;
mod track;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use track::Track;
