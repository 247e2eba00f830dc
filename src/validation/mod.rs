//! Format, placement, and compatibility validation

mod classifier;
mod formats;
mod validator;

pub use classifier::DirectoryClassifier;
pub use formats::FormatRegistry;
pub use validator::Validator;
