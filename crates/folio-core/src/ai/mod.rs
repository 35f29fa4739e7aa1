pub mod textgen;

pub use textgen::{TextGenClient, TextGenError};
