//! Input module: where seed addresses come from
//!
//! - The seed file, one address per line
//! - The operator prompt for crawl mode and a single starting address

pub mod prompt;
mod seed_file;

pub use seed_file::{read_seed_file, SeedError};
