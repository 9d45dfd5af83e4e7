//! CLI интерфейс для sqlscan
//!
//! Токенизация SQL из файлов, аргумента или stdin, разбиение на выражения
//! и просмотр словаря диалекта.

use crate::common::{TokenizerConfig, DEFAULT_CONFIG_FILE};
use crate::tokenizer::{split_statements, Category, Token, TokenKind, Tokenizer, WordLists};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::PathBuf;

/// sqlscan - токенизатор SQL без потерь
#[derive(Parser)]
#[command(name = "sqlscan")]
#[command(about = "sqlscan - lossless SQL tokenizer")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разбить SQL на токены
    Tokenize {
        #[command(flatten)]
        input: InputArgs,

        /// Формат вывода
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Не выводить пробелы
        #[arg(long)]
        skip_whitespace: bool,
    },

    /// Разбить SQL на отдельные выражения
    Split {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Вывести словарь диалекта в формате TOML
    Vocabulary {
        /// Вывести скомпилированные регулярные выражения вместо списков слов
        #[arg(long)]
        patterns: bool,
    },

    /// Показать информацию о настройках
    Info,
}

/// Источники SQL текста
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Файлы с SQL; без файлов читается stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// SQL текст прямо в командной строке
    #[arg(long, conflicts_with = "files")]
    pub sql: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Токены одного источника для JSON вывода
#[derive(Serialize)]
struct TokenizedSource<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl InputArgs {
    /// Читает все источники: пары (имя, текст)
    pub fn read(&self) -> anyhow::Result<Vec<(String, String)>> {
        if let Some(sql) = &self.sql {
            return Ok(vec![("<sql>".to_string(), sql.clone())]);
        }

        if self.files.is_empty() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            return Ok(vec![("<stdin>".to_string(), text)]);
        }

        self.files
            .iter()
            .map(|path| {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем флаги
    pub fn load_config(&self) -> anyhow::Result<TokenizerConfig> {
        let config = if let Some(config_path) = &self.config {
            TokenizerConfig::from_file(config_path)
                .with_context(|| format!("failed to load {}", config_path.display()))?
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                TokenizerConfig::from_file(&default_path)?
            } else {
                TokenizerConfig::default()
            }
        };

        let mut config = config.with_overrides(std::env::vars())?;
        if let Some(log_level) = &self.log_level {
            config.logging.level = log_level.clone();
            config.validate()?;
        }

        Ok(config)
    }

    /// Выполняет команду, печатая результат в stdout
    pub fn execute(&self, config: TokenizerConfig) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(config, &mut out)
    }

    /// Выполняет команду с выводом в указанный поток
    pub fn run(&self, config: TokenizerConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        match &self.command {
            Commands::Tokenize {
                input,
                format,
                skip_whitespace,
            } => {
                let tokenizer = Tokenizer::with_config(config)?;
                let sources = input.read()?;
                tokenize_sources(&tokenizer, &sources, *format, *skip_whitespace, out)
            }
            Commands::Split { input } => {
                let tokenizer = Tokenizer::with_config(config)?;
                for (source, text) in input.read()? {
                    let tokens = tokenizer
                        .tokenize(&text)
                        .with_context(|| format!("failed to tokenize {}", source))?;
                    for statement in split_statements(&tokens) {
                        writeln!(out, "{}", statement)?;
                    }
                }
                Ok(())
            }
            Commands::Vocabulary { patterns: false } => {
                let lists = match &config.vocabulary_file {
                    Some(path) => WordLists::from_file(path)?,
                    None => WordLists::standard(),
                };
                let content =
                    toml::to_string_pretty(&lists).context("failed to render vocabulary")?;
                write!(out, "{}", content)?;
                Ok(())
            }
            Commands::Vocabulary { patterns: true } => {
                let tokenizer = Tokenizer::with_config(config)?;
                for category in Category::ALL {
                    let source = tokenizer.vocabulary().pattern_source(category);
                    writeln!(out, "{}: {}", category, source.unwrap_or("<empty>"))?;
                }
                Ok(())
            }
            Commands::Info => show_info(config, out),
        }
    }
}

fn tokenize_sources(
    tokenizer: &Tokenizer,
    sources: &[(String, String)],
    format: OutputFormat,
    skip_whitespace: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let texts: Vec<&str> = sources.iter().map(|(_, text)| text.as_str()).collect();
    let results = tokenizer.tokenize_batch(&texts);

    let mut tokenized = Vec::with_capacity(sources.len());
    for ((source, _), result) in sources.iter().zip(results) {
        let mut tokens = result.with_context(|| format!("failed to tokenize {}", source))?;
        if skip_whitespace {
            tokens.retain(|t| t.kind != TokenKind::Whitespace);
        }
        tokenized.push(TokenizedSource {
            source: source.as_str(),
            tokens,
        });
    }

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokenized)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let many = tokenized.len() > 1;
            for entry in &tokenized {
                if many {
                    writeln!(out, "==> {} <==", entry.source)?;
                }
                for token in &entry.tokens {
                    let call = if token.function_call { " (call)" } else { "" };
                    writeln!(
                        out,
                        "{}\t{}\t{:?}{}",
                        token.position, token.kind, token.text, call
                    )?;
                }
            }
        }
    }

    let stats = tokenizer.cache_stats();
    log::info!(
        "Кэш: {} попаданий, {} промахов, {} записей",
        stats.hits,
        stats.misses,
        stats.entries
    );
    Ok(())
}

fn show_info(config: TokenizerConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let tokenizer = Tokenizer::with_config(config)?;
    let config = tokenizer.config();
    let vocabulary = tokenizer.vocabulary();

    writeln!(out, "sqlscan {}", crate::VERSION)?;
    match &config.vocabulary_file {
        Some(path) => writeln!(out, "vocabulary: {}", path.display())?,
        None => writeln!(out, "vocabulary: standard")?,
    }
    writeln!(
        out,
        "words: {} reserved, {} top-level, {} newline, {} functions, {} boundaries",
        vocabulary.reserved().len(),
        vocabulary.reserved_toplevel().len(),
        vocabulary.reserved_newline().len(),
        vocabulary.functions().len(),
        vocabulary.boundaries().len()
    )?;
    writeln!(out, "pipeline: {}", tokenizer.pipeline().matcher_names().join(" > "))?;
    writeln!(
        out,
        "cache: enabled={} prefix={} capacity={} context_aware={}",
        config.cache.enabled,
        config.cache.prefix_size,
        config.cache.capacity,
        config.cache.context_aware
    )?;
    writeln!(out, "log level: {}", config.logging.level)?;

    Ok(())
}
