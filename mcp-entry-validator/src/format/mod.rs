//! Document format handling for entry files.
//!
//! - `markdown` — locating the `---` front-matter block
//! - `yaml` — parsing the block into a key/value mapping

pub mod markdown;
pub mod yaml;
