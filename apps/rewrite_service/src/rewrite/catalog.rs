use serde::Serialize;

pub const DEFAULT_LANGUAGE_NAME: &str = "English";
pub const DEFAULT_TONE: &str = "professional";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub group: &'static str,
}

const fn entry(value: &'static str, label: &'static str, group: &'static str) -> CatalogEntry {
    CatalogEntry {
        value,
        label,
        group,
    }
}

pub const LANGUAGES: &[CatalogEntry] = &[
    entry("en", "English", "European"),
    entry("id", "Indonesian", "Asian"),
    entry("ms", "Malay", "Asian"),
    entry("zh", "Chinese", "Asian"),
    entry("ja", "Japanese", "Asian"),
    entry("ko", "Korean", "Asian"),
    entry("es", "Spanish", "European"),
    entry("fr", "French", "European"),
    entry("de", "German", "European"),
    entry("it", "Italian", "European"),
    entry("pt", "Portuguese", "European"),
    entry("ru", "Russian", "European"),
    entry("ar", "Arabic", "Middle Eastern"),
    entry("hi", "Hindi", "Asian"),
    entry("th", "Thai", "Asian"),
    entry("vi", "Vietnamese", "Asian"),
];

pub const TONES: &[CatalogEntry] = &[
    entry("professional", "Professional", "Business"),
    entry("formal", "Formal", "Business"),
    entry("polite", "Polite", "Business"),
    entry("confident", "Confident", "Business"),
    entry("friendly", "Friendly", "Casual"),
    entry("casual", "Casual", "Casual"),
    entry("enthusiastic", "Enthusiastic", "Casual"),
    entry("empathetic", "Empathetic", "Emotional"),
    entry("apologetic", "Apologetic", "Emotional"),
    entry("grateful", "Grateful", "Emotional"),
    entry("diplomatic", "Diplomatic", "Special"),
    entry("persuasive", "Persuasive", "Special"),
    entry("urgent", "Urgent", "Special"),
];

/// Maps a language code to its display name, defaulting to English.
pub fn language_name(code: Option<&str>) -> &'static str {
    code.and_then(|code| LANGUAGES.iter().find(|language| language.value == code))
        .map(|language| language.label)
        .unwrap_or(DEFAULT_LANGUAGE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogGroup {
    pub group: &'static str,
    pub entries: Vec<CatalogEntry>,
}

/// Groups entries by their `group` label, keeping groups in order of first
/// appearance and entries in catalog order.
pub fn grouped(entries: &[CatalogEntry]) -> Vec<CatalogGroup> {
    let mut groups: Vec<CatalogGroup> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|group| group.group == entry.group) {
            Some(group) => group.entries.push(*entry),
            None => groups.push(CatalogGroup {
                group: entry.group,
                entries: vec![*entry],
            }),
        }
    }

    groups
}
