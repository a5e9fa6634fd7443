pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use case::formatters::{camel_case, dot_case, to_kebab_case};
pub use case::tokenizer::split_words;
pub use case::{Case, Conversion, Converter};
pub use config::Config;
pub use error::CaseError;
pub use input::{validate, Input};
