use fanyi_core::LanguageCatalog;
use fanyi_types::HistoryRecord;

pub const NO_MESSAGE: &str = "无法获取消息内容。";
pub const NO_HISTORY: &str = "暂无翻译记录。";
pub const UNREACHABLE: &str = "无法连接到翻译服务，请检查网络或稍后再试。";
pub const USAGE: &str = "用法：/tl <目标语言> <文本>\n例如：/tl 日语 你好";

pub const HELP: &str = "📘 使用说明：\n\
    /tl <语言> <文本>\n\
    示例:/tl 日语 今天天气很好\n\
    输入:/tl 历史 [条数] 查看翻译历史\n\
    输入:/tl 代码 查看语言代码\n\
    输入:/tl 你好 自动判断语言并翻译(仅限中英互译)";

pub fn translation_failed(error: &str) -> String {
    format!("翻译失败：{}", error)
}

/// One `name: code` line per catalog entry
pub fn code_table(catalog: &LanguageCatalog) -> String {
    catalog
        .entries()
        .iter()
        .map(|entry| format!("{:<10}: {}", entry.display_name, entry.code))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered history blocks, in the order given
pub fn history(catalog: &LanguageCatalog, records: &[HistoryRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "# {}\n原文: {}\n翻译: {}\n语言: {}\n时间: {}",
                i + 1,
                record.source_text,
                record.translated_text,
                catalog.name_for(&record.target_lang),
                record.timestamp
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
