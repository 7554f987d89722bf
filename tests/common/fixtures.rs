//! Static catalogs and a miniature romaji dictionary used across harnesses.

use migemo_core::Candidate;

/// The three-application catalog from the reference scenario.
pub const CATALOG_BASIC: &[(&str, &str)] = &[("1", "Files"), ("2", "Firefox"), ("3", "Settings")];

/// Applications with Japanese display names next to their romaji readings.
pub const CATALOG_JAPANESE: &[(&str, &str)] = &[
    ("org.gnome.Nautilus.desktop", "ファイル"),
    ("firefox.desktop", "Firefox"),
    ("org.gnome.Settings.desktop", "設定"),
    ("org.gnome.Terminal.desktop", "端末"),
    ("org.gnome.TextEditor.desktop", "テキストエディター"),
    ("fairy.desktop", "Fairy Tale Reader"),
    ("kakeibo.desktop", "家計簿"),
    ("memo.desktop", "メモ帳"),
    ("files-legacy.desktop", "Files"),
];

/// Romaji reading → native spelling, as the engine's dictionary would know it.
pub const ROMAJI: &[(&str, &str)] = &[
    ("fairu", "ファイル"),
    ("settei", "設定"),
    ("tanmatsu", "端末"),
    ("tekisutoedita", "テキストエディター"),
    ("kakeibo", "家計簿"),
    ("memochou", "メモ帳"),
];

pub fn candidates(table: &[(&str, &str)]) -> Vec<Candidate> {
    table
        .iter()
        .map(|(id, name)| Candidate::new(*id, *name))
        .collect()
}

/// Answer a query the way cmigemo does, at toy scale: a case-insensitive
/// literal alternated with every dictionary word whose reading starts with
/// the query.
pub fn romaji_pattern(query: &str) -> String {
    let lower = query.to_lowercase();
    let mut alternatives = vec![format!("(?i:{})", escape(query))];
    alternatives.extend(
        ROMAJI
            .iter()
            .filter(|(reading, _)| reading.starts_with(lower.as_str()))
            .map(|(_, native)| escape(native)),
    );
    alternatives.join("|")
}

/// Regex-escape the meta characters in `s`.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// The `Fi.*` engine from the reference scenario: echoes the query as a
/// prefix pattern.
pub fn prefix_pattern(query: &str) -> String {
    format!("{}.*", escape(query))
}
