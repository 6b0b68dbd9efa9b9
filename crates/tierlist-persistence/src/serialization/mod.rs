pub mod json_export;
pub mod share_codec;

pub use json_export::{export_to_file, to_pretty_json, EXPORT_FILE_NAME};
pub use share_codec::{decode, decode_state, encode};
