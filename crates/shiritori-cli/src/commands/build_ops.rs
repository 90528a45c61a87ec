use std::fs;
use std::path::Path;
use std::process;

use crate::catalog_source;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn build(source_name: &str, input_dir: &str, output_file: &str) {
    let source = catalog_source::from_name(source_name).unwrap_or_else(|| {
        eprintln!("Error: unknown source '{source_name}' (available: sudachi)");
        process::exit(1);
    });

    let input_path = Path::new(input_dir);
    if !input_path.is_dir() {
        eprintln!("Error: {input_dir} is not a directory");
        process::exit(1);
    }

    eprintln!("Source: {source_name}");
    let builder = die!(source.parse_dir(input_path), "Error parsing lexicon: {}");

    let csv = builder.to_csv();
    die!(fs::write(output_file, &csv), "Error writing {output_file}: {}");
    eprintln!("Wrote {output_file} ({} readings)", builder.len());
}
