// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
}

/// ブロックコメント終端行の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum BlockPolicyArg {
    /// 行頭の状態で分類する (既定)
    LineStart,
    /// `*/` の後ろにコードがあればコード行
    TrailingCode,
}
