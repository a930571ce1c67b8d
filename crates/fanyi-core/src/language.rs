use std::collections::HashMap;
use std::sync::LazyLock;

/// Display names accepted in commands and the provider code each maps to.
/// Several names may share a code; the first one listed is the canonical name.
const LANGUAGES: &[(&str, &str)] = &[
    ("阿姆哈拉语", "am"),
    ("阿拉伯语", "ar"),
    ("巴斯克语", "eu"),
    ("孟加拉语", "bn"),
    ("英语（英国）", "en-GB"),
    ("葡萄牙语（巴西）", "pt-BR"),
    ("保加利亚语", "bg"),
    ("加泰罗尼亚语", "ca"),
    ("切罗基语", "chr"),
    ("克罗地亚语", "hr"),
    ("捷克语", "cs"),
    ("丹麦语", "da"),
    ("荷兰语", "nl"),
    ("英语（美国）", "en"),
    ("英语", "en"),
    ("爱沙尼亚语", "et"),
    ("菲律宾语", "fil"),
    ("芬兰语", "fi"),
    ("法语", "fr"),
    ("德语", "de"),
    ("希腊语", "el"),
    ("古吉拉特语", "gu"),
    ("希伯来语", "iw"),
    ("印地语", "hi"),
    ("匈牙利语", "hu"),
    ("冰岛语", "is"),
    ("印度尼西亚语", "id"),
    ("意大利语", "it"),
    ("日语", "ja"),
    ("卡纳达语", "kn"),
    ("韩语", "ko"),
    ("拉脱维亚语", "lv"),
    ("立陶宛语", "lt"),
    ("马来语", "ms"),
    ("马拉雅拉姆语", "ml"),
    ("马拉地语", "mr"),
    ("挪威语", "no"),
    ("波兰语", "pl"),
    ("葡萄牙语（葡萄牙）", "pt-PT"),
    ("葡萄牙语", "pt-PT"),
    ("罗马尼亚语", "ro"),
    ("俄语", "ru"),
    ("塞尔维亚语", "sr"),
    ("中文", "zh-CN"),
    ("简中", "zh-CN"),
    ("斯洛伐克语", "sk"),
    ("斯洛文尼亚语", "sl"),
    ("西班牙语", "es"),
    ("斯瓦希里语", "sw"),
    ("瑞典语", "sv"),
    ("泰米尔语", "ta"),
    ("泰卢固语", "te"),
    ("泰语", "th"),
    ("繁体中文", "zh-TW"),
    ("繁中", "zh-TW"),
    ("土耳其语", "tr"),
    ("乌尔都语", "ur"),
    ("乌克兰语", "uk"),
    ("越南语", "vi"),
    ("威尔士语", "cy"),
];

static BUILTIN: LazyLock<LanguageCatalog> =
    LazyLock::new(|| LanguageCatalog::from_entries(LANGUAGES.iter().copied()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub display_name: &'static str,
    pub code: &'static str,
}

/// Bidirectional display name / provider code table.
///
/// Name lookup is exact. Code lookup is lossy when several names alias the
/// same code: it always yields the first name inserted for that code.
#[derive(Debug)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
    by_name: HashMap<&'static str, &'static str>,
    by_code: HashMap<&'static str, &'static str>,
}

impl LanguageCatalog {
    /// The process-wide catalog, built on first use
    pub fn builtin() -> &'static LanguageCatalog {
        &BUILTIN
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            by_code: HashMap::new(),
        };

        for (display_name, code) in entries {
            if catalog.by_name.contains_key(display_name) {
                continue;
            }
            catalog.by_name.insert(display_name, code);
            catalog.by_code.entry(code).or_insert(display_name);
            catalog.entries.push(LanguageEntry { display_name, code });
        }

        catalog
    }

    /// Provider code for a display name
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// Canonical display name for a code, or the code itself if unknown
    pub fn name_for<'a>(&self, code: &'a str) -> &'a str {
        self.by_code.get(code).copied().unwrap_or(code)
    }

    /// True for any known display name or provider code
    pub fn is_recognized(&self, token: &str) -> bool {
        self.by_name.contains_key(token) || self.by_code.contains_key(token)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }
}
