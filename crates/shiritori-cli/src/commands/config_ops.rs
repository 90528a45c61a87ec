use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", shiritori_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        shiritori_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: resources.catalog={}, filter.compound={}, filter.allow_proper_noun={}",
        s.resources.catalog.display(),
        s.filter.compound,
        s.filter.allow_proper_noun
    );
}
