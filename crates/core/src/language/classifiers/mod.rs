// crates/core/src/language/classifiers/mod.rs
//! 言語ごとの行分類器

pub mod c_style;
pub mod ruby_style;

pub use c_style::CFamilyClassifier;
pub use ruby_style::RubyClassifier;
