use std::collections::HashSet;

/// NG-word readings excluded from initial-character browsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    readings: HashSet<String>,
}

impl Blocklist {
    /// One reading per line. Accepts `\n`, `\r\n` and bare `\r` line endings;
    /// tokens are trimmed and blank lines dropped. A leading UTF-8 BOM is ignored.
    pub fn parse(text: &str) -> Self {
        let readings = text
            .trim_start_matches('\u{FEFF}')
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { readings }
    }

    pub fn contains(&self, reading: &str) -> bool {
        self.readings.contains(reading)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_endings() {
        for text in [
            "ねこ\nいぬ\n",
            "ねこ\r\nいぬ\r\n",
            "ねこ\rいぬ\r",
            "ねこ\r\nいぬ",
        ] {
            let list = Blocklist::parse(text);
            assert_eq!(list.len(), 2, "{text:?}");
            assert!(list.contains("ねこ"));
            assert!(list.contains("いぬ"));
        }
    }

    #[test]
    fn test_parse_trims_and_skips_blank() {
        let list = Blocklist::parse("  ねこ \n\n\t\n いぬ\nねこ\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("ねこ"));
        assert!(!list.contains(" ねこ "));
        assert!(!list.contains(""));
    }

    #[test]
    fn test_parse_strips_bom() {
        let list = Blocklist::parse("\u{FEFF}ねこ\r\nねずみ\r\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("ねこ"));
        assert!(list.contains("ねずみ"));
        assert!(Blocklist::parse("\u{FEFF}").is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(Blocklist::parse("").is_empty());
        assert!(Blocklist::parse("\r\n\r\n").is_empty());
    }
}
