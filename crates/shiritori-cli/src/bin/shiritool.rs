use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shiritori_cli::commands::query_ops::{FilterArgs, Sources};
use shiritori_cli::commands::{build_ops, config_ops, query_ops};
use shiritori_engine::CompoundFilterMode;

#[derive(Parser)]
#[command(name = "shiritool", about = "Shiritori word catalog tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SourceArgs {
    /// Settings TOML file (default: embedded settings)
    #[arg(long)]
    settings: Option<String>,
    /// Catalog CSV file (overrides resources.catalog)
    #[arg(long)]
    catalog: Option<String>,
    /// NG-word list (overrides resources.blocklist)
    #[arg(long)]
    blocklist: Option<String>,
}

impl From<SourceArgs> for Sources {
    fn from(a: SourceArgs) -> Self {
        Sources {
            settings: a.settings,
            catalog: a.catalog,
            blocklist: a.blocklist,
        }
    }
}

#[derive(Args)]
struct FilterOpts {
    /// Admit proper nouns (default: filter.allow_proper_noun)
    #[arg(long)]
    allow_proper_noun: Option<bool>,
    /// Compound tiers to admit: strict, limited or all (default: filter.compound)
    #[arg(long)]
    compound: Option<CompoundFilterMode>,
}

impl From<FilterOpts> for FilterArgs {
    fn from(o: FilterOpts) -> Self {
        FilterArgs {
            allow_proper_noun: o.allow_proper_noun,
            compound: o.compound,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Build a catalog CSV from raw lexicon files
    Build {
        /// Lexicon source
        #[arg(long, default_value = "sudachi")]
        source: String,
        /// Input directory
        input_dir: String,
        /// Output CSV file
        output_file: String,
    },
    /// Look up a reading and print its surface variants
    Lookup {
        #[command(flatten)]
        sources: SourceArgs,
        /// Reading (hiragana)
        reading: String,
    },
    /// Check whether a word may be played under the filter
    Check {
        #[command(flatten)]
        sources: SourceArgs,
        #[command(flatten)]
        filter: FilterOpts,
        /// Reading (hiragana)
        reading: String,
    },
    /// Draw a random word starting with the given initial
    Random {
        #[command(flatten)]
        sources: SourceArgs,
        #[command(flatten)]
        filter: FilterOpts,
        /// Draw from the head index, ignoring the filter
        #[arg(long)]
        index: bool,
        /// Initial character (one hiragana)
        head: String,
    },
    /// List every word starting with the given initial
    List {
        #[command(flatten)]
        sources: SourceArgs,
        #[command(flatten)]
        filter: FilterOpts,
        /// List the head index bucket, ignoring the filter
        #[arg(long)]
        index: bool,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
        /// Initial character (one hiragana)
        head: String,
    },
    /// Show catalog, NG-word and head index statistics
    Info {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            source,
            input_dir,
            output_file,
        } => build_ops::build(&source, &input_dir, &output_file),
        Command::Lookup { sources, reading } => query_ops::lookup(&sources.into(), &reading),
        Command::Check {
            sources,
            filter,
            reading,
        } => query_ops::check(&sources.into(), &reading, filter.into()),
        Command::Random {
            sources,
            filter,
            index,
            head,
        } => query_ops::random(&sources.into(), &head, filter.into(), index),
        Command::List {
            sources,
            filter,
            index,
            json,
            head,
        } => query_ops::list(&sources.into(), &head, filter.into(), index, json),
        Command::Info { sources } => query_ops::info(&sources.into()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
