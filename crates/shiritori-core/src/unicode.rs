//! Character-level kana helpers.

use std::ops::RangeInclusive;

/// Characters accepted as the initial of a generated word (ぁ..ゖ).
pub const INITIAL_RANGE: RangeInclusive<char> = '\u{3041}'..='\u{3096}';

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn is_initial_char(c: char) -> bool {
    INITIAL_RANGE.contains(&c)
}

/// Accept `s` as a generation initial: exactly one character inside [`INITIAL_RANGE`].
pub fn parse_initial(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !is_initial_char(c) {
        return None;
    }
    Some(c)
}

/// Hiragana reading (ぁ..ゖ) with the prolonged sound mark ー allowed.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_initial_char(c) || c == 'ー')
}

/// Convert katakana ァ..ヶ to hiragana. Everything else, including ー, passes through.
pub fn kata_to_hira(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
