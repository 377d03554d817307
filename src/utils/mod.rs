pub mod environment;
pub mod images;
pub mod terminal;

pub use environment::data_dir;
pub use images::{data_uri_to_bytes, file_to_data_uri};
pub use terminal::strip_ansi_codes;
