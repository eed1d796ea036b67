pub mod text;

pub use text::{clip, single_line, truncate};
