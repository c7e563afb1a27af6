// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options;
use crate::settings::Settings;
use linetally_core::{BlockCommentPolicy, ClassifierConfig, Language, LanguageRegistry};
pub use linetally_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use linetally_engine::error::EngineError;
use linetally_engine::options as engine_options;
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let settings = match &args.language.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let languages = args
            .language
            .languages
            .iter()
            .map(|name| parse_language(name))
            .collect::<Result<Vec<_>>>()?;

        let registry = registry_from(&args, &settings)?;

        let policy = args
            .language
            .block_comment_policy
            .map(BlockCommentPolicy::from)
            .or(settings.block_comment_policy)
            .unwrap_or_default();

        let filter = FilterConfigBuilder::default()
            .languages(languages)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        ConfigBuilder::default()
            .walk(walk_options_from(&args, &settings)?)
            .filter(filter)
            .registry(registry)
            .classifier(ClassifierConfig::new(policy))
            .format(engine_options::OutputFormat::from(args.output.format))
            .by_file(args.output.by_file)
            .strict(args.behavior.strict)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()).into())
    }
}

fn parse_language(name: &str) -> Result<Language> {
    name.parse::<Language>()
        .map_err(|_| AppError::UnsupportedLanguage(name.to_string()))
}

/// 設定ファイル → コマンドラインの順に登録する (後勝ち)
fn registry_from(args: &Args, settings: &Settings) -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::builtin();

    for (lang, names) in &settings.filenames {
        let lang = parse_language(lang)?;
        for name in names {
            registry.add_filename(name.clone(), lang);
        }
    }

    let mappings = settings
        .map_ext
        .iter()
        .chain(args.language.map_ext.iter().map(|(k, v)| (k, v)));
    for (ext, lang) in mappings {
        if ext.trim().trim_start_matches('.').is_empty() {
            return Err(AppError::Usage(format!("empty extension in mapping to '{lang}'")));
        }
        registry.map_extension(ext, parse_language(lang)?);
    }

    Ok(registry)
}

fn walk_options_from(args: &Args, settings: &Settings) -> Result<WalkOptions> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let exclude: Vec<String> = settings
        .exclude
        .iter()
        .chain(&scan.exclude)
        .cloned()
        .collect();

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(scan.jobs.unwrap_or_else(num_cpus::get))
        .hidden(scan.hidden || settings.hidden.unwrap_or(false))
        .git_ignore(!scan.no_gitignore && settings.git_ignore.unwrap_or(true))
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .exclude(exclude)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()).into())
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml
);
map_enum!(
    options::BlockPolicyArg,
    BlockCommentPolicy,
    LineStart,
    TrailingCode
);
