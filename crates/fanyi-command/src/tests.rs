use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fanyi_history::HistoryStore;
use fanyi_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use fanyi_types::HistoryRecord;
use tempfile::TempDir;

use crate::{CommandInterpreter, replies};

#[derive(Clone, Copy)]
enum Behavior {
    Echo,
    Unreachable,
    BadPayload,
}

/// Records every call and answers `<to>:<text>`
struct FakeTranslator {
    behavior: Behavior,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeTranslator {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), to.to_string()));

        match self.behavior {
            Behavior::Echo => Ok(Translation {
                text: format!("{to}:{text}"),
                detected_source: "auto".to_string(),
                to: to.to_string(),
            }),
            Behavior::Unreachable => Err(TranslateError::NetworkError("connection refused".into())),
            Behavior::BadPayload => Err(TranslateError::ParseError("No segments in response".into())),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

async fn setup(behavior: Behavior) -> (CommandInterpreter, Arc<FakeTranslator>, TempDir) {
    let dir = TempDir::new().unwrap();
    let history = HistoryStore::open(dir.path().join("history.json"))
        .await
        .unwrap();
    let translator = FakeTranslator::new(behavior);
    let interpreter = CommandInterpreter::new(translator.clone(), history);
    (interpreter, translator, dir)
}

fn record(i: usize) -> HistoryRecord {
    HistoryRecord {
        timestamp: format!("2025-06-01 12:00:{:02}", i),
        source_text: format!("原文{i}"),
        translated_text: format!("text {i}"),
        target_lang: "ja".to_string(),
    }
}

#[tokio::test]
async fn test_static_replies() {
    let (interpreter, translator, _dir) = setup(Behavior::Echo).await;

    assert_eq!(interpreter.handle("").await, replies::NO_MESSAGE);
    assert_eq!(interpreter.handle("/tl").await, replies::USAGE);
    assert_eq!(interpreter.handle("/tl help").await, replies::HELP);
    assert_eq!(interpreter.handle("/tl 帮助").await, replies::HELP);

    let codes = interpreter.handle("/tl 代码").await;
    assert!(codes.starts_with("阿姆哈拉语"));
    assert!(codes.ends_with("威尔士语      : cy"));

    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn test_auto_detect_translates_and_records() {
    let (interpreter, translator, _dir) = setup(Behavior::Echo).await;

    assert_eq!(interpreter.handle("/tl 你好世界").await, "en:你好世界");
    assert_eq!(interpreter.handle("/tl hello world").await, "zh-CN:hello world");

    assert_eq!(
        translator.calls(),
        vec![
            ("你好世界".to_string(), "en".to_string()),
            ("hello world".to_string(), "zh-CN".to_string()),
        ]
    );

    let records = interpreter.history().load().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source_text, "你好世界");
    assert_eq!(records[0].translated_text, "en:你好世界");
    assert_eq!(records[0].target_lang, "en");
    assert_eq!(records[1].target_lang, "zh-CN");
}

#[tokio::test]
async fn test_explicit_language_and_fallback() {
    let (interpreter, translator, _dir) = setup(Behavior::Echo).await;

    assert_eq!(
        interpreter.handle("/tl 日语 今天天气很好").await,
        "ja:今天天气很好"
    );
    assert_eq!(
        interpreter.handle("/tl 随便 今天天气很好").await,
        "en:随便 今天天气很好"
    );

    assert_eq!(
        translator.calls(),
        vec![
            ("今天天气很好".to_string(), "ja".to_string()),
            ("随便 今天天气很好".to_string(), "en".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_transport_failure_is_not_recorded() {
    let (interpreter, translator, _dir) = setup(Behavior::Unreachable).await;

    assert_eq!(interpreter.handle("/tl hello").await, replies::UNREACHABLE);
    assert_eq!(
        interpreter.handle("/tl 法语 你好").await,
        replies::UNREACHABLE
    );

    assert_eq!(translator.calls().len(), 2);
    assert!(interpreter.history().load().await.is_empty());
}

#[tokio::test]
async fn test_other_failure_reports_error() {
    let (interpreter, _translator, _dir) = setup(Behavior::BadPayload).await;

    assert_eq!(
        interpreter.handle("/fy hello").await,
        "翻译失败：Malformed response: No segments in response"
    );
    assert!(interpreter.history().load().await.is_empty());
}

#[tokio::test]
async fn test_history_empty() {
    let (interpreter, _translator, _dir) = setup(Behavior::Echo).await;

    assert_eq!(interpreter.handle("/tl history").await, replies::NO_HISTORY);
    assert_eq!(interpreter.handle("/tl 历史 3").await, replies::NO_HISTORY);
}

#[tokio::test]
async fn test_history_shows_latest_slice() {
    let (interpreter, _translator, _dir) = setup(Behavior::Echo).await;
    for i in 1..=10 {
        interpreter.history().append(record(i)).await.unwrap();
    }

    let reply = interpreter.handle("/tl history 3").await;
    let blocks: Vec<_> = reply.split("\n\n").collect();

    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[0],
        "# 1\n原文: 原文8\n翻译: text 8\n语言: 日语\n时间: 2025-06-01 12:00:08"
    );
    assert!(blocks[1].starts_with("# 2\n原文: 原文9\n"));
    assert!(blocks[2].starts_with("# 3\n原文: 原文10\n"));

    // Default count is five
    let reply = interpreter.handle("/tl history").await;
    assert_eq!(reply.split("\n\n").count(), 5);
    assert!(reply.starts_with("# 1\n原文: 原文6\n"));
}

#[tokio::test]
async fn test_history_bad_count_falls_back_to_default() {
    let (interpreter, _translator, _dir) = setup(Behavior::Echo).await;
    interpreter.history().append(record(1)).await.unwrap();
    interpreter.history().append(record(2)).await.unwrap();

    let with_default = interpreter.handle("/tl history").await;
    let with_garbage = interpreter.handle("/tl history abc").await;

    assert_eq!(with_default, with_garbage);
    assert_eq!(with_default.split("\n\n").count(), 2);
}

#[tokio::test]
async fn test_unknown_code_is_shown_verbatim() {
    let (interpreter, _translator, _dir) = setup(Behavior::Echo).await;
    let mut unknown = record(1);
    unknown.target_lang = "xx".to_string();
    interpreter.history().append(unknown).await.unwrap();

    let reply = interpreter.handle("/tl history 1").await;
    assert!(reply.contains("语言: xx\n"));
}
