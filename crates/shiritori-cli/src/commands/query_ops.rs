use std::fs;
use std::path::PathBuf;
use std::process;

use shiritori_engine::settings::{self, parse_settings_toml, Settings};
use shiritori_engine::{parse_initial, CompoundFilterMode, EntryFilter, ShiritoriEntry, ShiritoriService};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Where the catalog and NG-word list come from.
#[derive(Debug, Default, Clone)]
pub struct Sources {
    /// Settings TOML; the embedded defaults when `None`.
    pub settings: Option<String>,
    /// Overrides `resources.catalog`.
    pub catalog: Option<String>,
    /// Overrides `resources.blocklist`.
    pub blocklist: Option<String>,
}

/// Filter overrides; unset fields fall back to the `[filter]` settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterArgs {
    pub allow_proper_noun: Option<bool>,
    pub compound: Option<CompoundFilterMode>,
}

impl FilterArgs {
    pub fn resolve(&self, defaults: EntryFilter) -> EntryFilter {
        EntryFilter {
            allow_proper_noun: self.allow_proper_noun.unwrap_or(defaults.allow_proper_noun),
            compound: self.compound.unwrap_or(defaults.compound),
        }
    }
}

pub fn load_settings(sources: &Sources) -> Settings {
    let mut s = match &sources.settings {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error: {}")
        }
        None => settings::settings().clone(),
    };
    if let Some(catalog) = &sources.catalog {
        s.resources.catalog = PathBuf::from(catalog);
    }
    if let Some(blocklist) = &sources.blocklist {
        s.resources.blocklist = Some(PathBuf::from(blocklist));
    }
    s
}

pub fn open_service(sources: &Sources) -> ShiritoriService {
    ShiritoriService::open(&load_settings(sources))
}

fn initial_or_die(head: &str) -> char {
    parse_initial(head).unwrap_or_else(|| {
        eprintln!("Error: '{head}' is not a single hiragana character (ぁ..ゖ)");
        process::exit(1);
    })
}

fn print_entry(e: &ShiritoriEntry) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        e.reading, e.surface, e.pos_class, e.pos_subclass, e.compound
    );
}

pub fn lookup(sources: &Sources, reading: &str) {
    let service = open_service(sources);
    match service.surface_variants(reading) {
        Some(variants) => {
            println!("{reading}");
            for v in &variants {
                println!("  {v}");
            }
        }
        None => println!("{reading}: not found"),
    }
}

/// Existence check under a filter, reporting the surface when admitted.
pub fn check(sources: &Sources, reading: &str, filter: FilterArgs) {
    let reading = reading.trim();
    if reading.is_empty() {
        eprintln!("Error: empty reading");
        process::exit(1);
    }

    let service = open_service(sources);
    let filter = filter.resolve(service.default_filter());

    if !service.exists_with_condition(reading, filter) {
        if service.exists(reading) {
            println!("「{reading}」 exists but is excluded by the filter ({})", describe(filter));
        } else {
            println!("「{reading}」 is not in the dictionary");
        }
        return;
    }

    match service.surface_with_condition(reading, filter) {
        Some(surface) => println!("「{reading}」 found: {surface}"),
        None => println!("「{reading}」 found, but its surface could not be read"),
    }
}

pub fn random(sources: &Sources, head: &str, filter: FilterArgs, from_index: bool) {
    let head = initial_or_die(head);
    let service = open_service(sources);

    let picked = if from_index {
        service.engine().random_in_index(head).cloned()
    } else {
        service.random_by_initial(head, filter.resolve(service.default_filter()))
    };

    match picked {
        Some(e) => println!("{}\t{}", e.reading, e.surface),
        None => println!("no word starts with {head}"),
    }
}

pub fn list(sources: &Sources, head: &str, filter: FilterArgs, from_index: bool, json: bool) {
    let head = initial_or_die(head);
    let service = open_service(sources);

    let entries: Vec<ShiritoriEntry> = if from_index {
        service.engine().list_in_index(head).to_vec()
    } else {
        service.list_by_initial(head, filter.resolve(service.default_filter()))
    };

    if json {
        let out = die!(serde_json::to_string_pretty(&entries), "Error: {}");
        println!("{out}");
        return;
    }

    if entries.is_empty() {
        println!("no word starts with {head}");
        return;
    }
    for e in &entries {
        print_entry(e);
    }
    println!("---");
    println!("{} entries", entries.len());
}

pub fn info(sources: &Sources) {
    let settings = load_settings(sources);
    let service = ShiritoriService::open(&settings);
    let engine = service.engine();
    let stats = engine.catalog().stats();
    let index = engine.head_index();

    println!("Catalog: {}", settings.resources.catalog.display());
    println!("  entries:      {}", engine.catalog().len());
    println!("  data rows:    {}", stats.rows);
    println!("  overwritten:  {}", stats.overwritten);
    println!("  malformed:    {}", stats.malformed);
    println!("  empty reading:{}", stats.empty_reading);
    match &settings.resources.blocklist {
        Some(path) => println!("NG words: {} ({})", engine.blocklist().len(), path.display()),
        None => println!("NG words: (none)"),
    }
    println!("Head index:");
    println!("  initials:     {}", index.bucket_count());
    println!("  entries:      {}", index.len());
    println!("Blocklist scope: {:?}", engine.scope());
    println!("Default filter:  {}", describe(service.default_filter()));
}

fn describe(filter: EntryFilter) -> String {
    format!(
        "compound={}, proper nouns {}",
        filter.compound,
        if filter.allow_proper_noun { "allowed" } else { "excluded" }
    )
}
