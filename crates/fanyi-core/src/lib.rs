pub mod language;
pub mod preprocess;

pub use language::{LanguageCatalog, LanguageEntry};
pub use preprocess::{contains_cjk, split_args};
