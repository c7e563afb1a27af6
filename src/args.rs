// src/args.rs
use crate::options::{BlockPolicyArg, OutputFormat};
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linetally",
    version,
    about = "C/C++ と Ruby のコード行・コメント行・空行の集計ツール",
    after_help = "対応言語: c++ (c, cpp, cc, cxx), ruby (rb)\n\
                  C/C++ を集計: -l c++\n\
                  Ruby を集計:  -l ruby"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub language: LanguageOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 対象パス (省略時はカレントディレクトリ)
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// ファイルごとの内訳も出力
    #[arg(long, help_heading = "出力")]
    pub by_file: bool,
}

#[derive(ClapArgs, Debug)]
pub struct LanguageOptions {
    /// 集計する言語 (複数可, 省略時は全対応言語)
    #[arg(short = 'l', long = "language", value_name = "LANG", help_heading = "言語")]
    pub languages: Vec<String>,

    /// ブロックコメント終端行の扱い
    #[arg(long, value_enum, help_heading = "言語")]
    pub block_comment_policy: Option<BlockPolicyArg>,

    /// 拡張子の割り当て (例: inl=c++), 複数可
    #[arg(long, value_name = "EXT=LANG", value_parser = parsers::parse_key_val, help_heading = "言語")]
    pub map_ext: Vec<(String, String)>,

    /// 設定ファイル (YAML)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "言語")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// 並列数
    #[arg(short = 'j', long, value_parser = parsers::parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore などの除外設定を無視する
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// シンボリックリンクをたどる
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    #[arg(long = "max-depth", value_parser = parsers::parse_positive_usize, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// 除外する glob (gitignore 形式), 複数可
    #[arg(long, value_name = "GLOB", help_heading = "走査/入力")]
    pub exclude: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 最初の読み込みエラーで中断する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// デバッグログを出力
    #[arg(short, long, help_heading = "動作")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["linetally"]).unwrap();
        assert!(args.paths.is_empty());
        assert!(args.language.languages.is_empty());
        assert_eq!(args.output.format, OutputFormat::Table);
        assert!(args.language.block_comment_policy.is_none());
        assert!(!args.behavior.strict);
    }

    #[test]
    fn test_repeatable_options() {
        let args = Args::try_parse_from([
            "linetally",
            "-l",
            "c++",
            "--language",
            "ruby",
            "--map-ext",
            "inl=c++",
            "--exclude",
            "vendor/",
            "--exclude",
            "*.gen.c",
            "src",
            "lib",
        ])
        .unwrap();
        assert_eq!(args.language.languages, vec!["c++", "ruby"]);
        assert_eq!(
            args.language.map_ext,
            vec![("inl".to_string(), "c++".to_string())]
        );
        assert_eq!(args.scan.exclude.len(), 2);
        assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("lib")]);
    }

    #[test]
    fn test_policy_and_format_values() {
        let args = Args::try_parse_from([
            "linetally",
            "--block-comment-policy",
            "trailing-code",
            "--format",
            "yaml",
        ])
        .unwrap();
        assert_eq!(
            args.language.block_comment_policy,
            Some(BlockPolicyArg::TrailingCode)
        );
        assert_eq!(args.output.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["linetally", "--map-ext", "inl"]).is_err());
        assert!(Args::try_parse_from(["linetally", "--jobs", "0"]).is_err());
        assert!(Args::try_parse_from(["linetally", "--format", "md"]).is_err());
        assert!(Args::try_parse_from(["linetally", "--bogus"]).is_err());
    }
}
