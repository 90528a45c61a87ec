use std::fs;
use std::sync::Arc;
use std::thread;

use super::*;
use crate::settings::parse_settings_toml;

const CATALOG: &str = "reading,surface,pos2,pos3,compound
ねこ,猫,普通名詞,一般,A
ねずみ,鼠,普通名詞,一般,B
かみ,紙/神,普通名詞,一般,A
";

fn settings_for(catalog: &str, blocklist: Option<&str>, extra: &str) -> Settings {
    let blocklist_line = blocklist
        .map(|p| format!("blocklist = {p:?}\n"))
        .unwrap_or_default();
    let toml = format!(
        "[resources]\ncatalog = {catalog:?}\n{blocklist_line}\n\
         [filter]\nallow_proper_noun = false\ncompound = \"strict\"\n{extra}"
    );
    parse_settings_toml(&toml).unwrap()
}

fn default_settings() -> Settings {
    parse_settings_toml(settings::DEFAULT_SETTINGS_TOML).unwrap()
}

#[test]
fn from_sources_serves_queries() {
    let service = ShiritoriService::from_sources(Some(CATALOG), Some("ねずみ\n"), &default_settings());
    assert!(service.exists("ねずみ"));
    assert_eq!(service.surface("ねこ").as_deref(), Some("猫"));
    assert_eq!(
        service.surface_variants("かみ"),
        Some(vec!["紙".to_string(), "神".to_string()])
    );
    let strict = EntryFilter::new(false, CompoundFilterMode::Strict);
    assert!(!service.exists_with_condition("ねずみ", strict));
    assert_eq!(service.surface_with_condition("ねこ", strict).as_deref(), Some("猫"));
    assert_eq!(service.list_by_initial('ね', strict).len(), 1);
    assert!(service.engine().list_in_index('ね').iter().all(|e| e.reading != "ねずみ"));
}

#[test]
fn missing_sources_are_not_fatal() {
    let service = ShiritoriService::from_sources(None, None, &default_settings());
    assert!(!service.exists("ねこ"));
    assert_eq!(service.random_by_initial('ね', EntryFilter::default()), None);
    assert!(service.engine().catalog().is_empty());
}

#[test]
fn open_reads_resource_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("words.csv");
    let blocklist = dir.path().join("ng.txt");
    fs::write(&catalog, CATALOG).unwrap();
    fs::write(&blocklist, "ねこ\r\n").unwrap();

    let settings = settings_for(
        catalog.to_str().unwrap(),
        Some(blocklist.to_str().unwrap()),
        "",
    );
    let service = ShiritoriService::open(&settings);
    assert!(service.exists("ねこ"));
    assert_eq!(service.engine().blocklist().len(), 1);
    assert_eq!(
        service.default_filter(),
        EntryFilter::new(false, CompoundFilterMode::Strict)
    );
}

#[test]
fn ng_file_with_bom_blocks_first_word() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("words.csv");
    let blocklist = dir.path().join("ng.txt");
    fs::write(&catalog, CATALOG).unwrap();
    fs::write(&blocklist, "\u{FEFF}ねこ\r\nねずみ\r\n").unwrap();

    let settings = settings_for(
        catalog.to_str().unwrap(),
        Some(blocklist.to_str().unwrap()),
        "",
    );
    let service = ShiritoriService::open(&settings);
    assert!(service.engine().list_in_index('ね').is_empty());
    assert!(service.engine().blocklist().contains("ねこ"));
}

#[test]
fn open_with_missing_files_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(
        dir.path().join("absent.csv").to_str().unwrap(),
        Some(dir.path().join("absent.txt").to_str().unwrap()),
        "",
    );
    let service = ShiritoriService::open(&settings);
    assert!(service.engine().catalog().is_empty());
    assert!(service.engine().blocklist().is_empty());
}

#[test]
fn from_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("words.csv");
    fs::write(&catalog, CATALOG).unwrap();
    let settings_path = dir.path().join("settings.toml");
    fs::write(
        &settings_path,
        format!(
            "[resources]\ncatalog = {:?}\n\n[filter]\nallow_proper_noun = true\ncompound = \"all\"\n",
            catalog.to_str().unwrap()
        ),
    )
    .unwrap();

    let service = ShiritoriService::from_settings_file(&settings_path).unwrap();
    assert!(service.exists("かみ"));

    let err = ShiritoriService::from_settings_file(&dir.path().join("nope.toml")).err().unwrap();
    assert!(matches!(err, ServiceError::Io { .. }));

    fs::write(&settings_path, "[resources]\n").unwrap();
    let err = ShiritoriService::from_settings_file(&settings_path).err().unwrap();
    assert!(matches!(err, ServiceError::Settings(_)));
}

#[test]
fn reload_swaps_engine_and_keeps_old_snapshots() {
    let service = ShiritoriService::from_sources(Some(CATALOG), None, &default_settings());
    let before = service.engine();

    service.reload_from_sources(Some("h\nいぬ,犬,普通名詞,一般,A\n"), None);

    assert!(before.exists("ねこ"));
    assert!(!before.exists("いぬ"));
    assert!(service.exists("いぬ"));
    assert!(!service.exists("ねこ"));
}

#[test]
fn reload_rereads_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("words.csv");
    fs::write(&catalog, CATALOG).unwrap();
    let service = ShiritoriService::open(&settings_for(catalog.to_str().unwrap(), None, ""));
    assert!(!service.exists("いぬ"));

    fs::write(&catalog, "h\nいぬ,犬,普通名詞,一般,A\n").unwrap();
    service.reload();
    assert!(service.exists("いぬ"));
}

#[test]
fn scope_and_seed_come_from_settings() {
    let extra = "\n[blocklist]\nscope = \"all_initial_queries\"\n\n[random]\nseed = 9\n";
    let settings = settings_for("unused.csv", None, extra);
    let a = ShiritoriService::from_sources(Some(CATALOG), Some("ねこ"), &settings);
    let b = ShiritoriService::from_sources(Some(CATALOG), Some("ねこ"), &settings);

    assert_eq!(a.engine().scope(), BlocklistScope::AllInitialQueries);
    let all = EntryFilter::default();
    assert!(a.list_by_initial('ね', all).iter().all(|e| e.reading != "ねこ"));

    let draws = |s: &ShiritoriService| {
        (0..10)
            .map(|_| s.random_by_initial('か', all).map(|e| e.reading))
            .collect::<Vec<_>>()
    };
    assert_eq!(draws(&a), draws(&b));
}

#[test]
fn concurrent_queries_during_reload() {
    let service = Arc::new(ShiritoriService::from_sources(
        Some(CATALOG),
        None,
        &default_settings(),
    ));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..200 {
                    let engine = service.engine();
                    // Each snapshot is internally consistent.
                    let listed = engine.list_by_initial('ね', EntryFilter::default()).len();
                    assert_eq!(listed, engine.head_index().bucket('ね').len());
                    let _ = engine.random_by_initial('ね', EntryFilter::default());
                }
            })
        })
        .collect();

    for i in 0..20 {
        if i % 2 == 0 {
            service.reload_from_sources(Some("h\nねぎ,葱,普通名詞,一般,A\n"), None);
        } else {
            service.reload_from_sources(Some(CATALOG), None);
        }
    }

    for r in readers {
        r.join().unwrap();
    }
}
