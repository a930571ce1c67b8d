mod google;

pub use google::GoogleTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language, letting the provider detect the source
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Source language as reported by the provider
    pub detected_source: LanguageCode,
    pub to: LanguageCode,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The provider could not be reached (connect, timeout, request failure)
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Malformed response: {0}")]
    ParseError(String),
}

impl TranslateError {
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslateError::NetworkError(_))
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        // A timeout or dropped connection while reading the body is still a
        // network failure, even though reqwest may also flag it as decode
        if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
            TranslateError::NetworkError(e.to_string())
        } else if e.is_decode() {
            TranslateError::ParseError(e.to_string())
        } else if e.is_status() {
            TranslateError::ApiError(e.to_string())
        } else {
            TranslateError::NetworkError(e.to_string())
        }
    }
}

/// Result of one translation attempt, flattened for callers that only
/// care whether the provider was reachable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOutcome {
    Success(Translation),
    TransportFailure(String),
    OtherFailure(String),
}

impl From<Result<Translation, TranslateError>> for TranslateOutcome {
    fn from(result: Result<Translation, TranslateError>) -> Self {
        match result {
            Ok(translation) => TranslateOutcome::Success(translation),
            Err(e) if e.is_transport() => TranslateOutcome::TransportFailure(e.to_string()),
            Err(e) => TranslateOutcome::OtherFailure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        let ok = Translation {
            text: "hello".to_string(),
            detected_source: "zh-CN".to_string(),
            to: "en".to_string(),
        };
        assert_eq!(
            TranslateOutcome::from(Ok(ok.clone())),
            TranslateOutcome::Success(ok)
        );

        let network = TranslateOutcome::from(Err(TranslateError::NetworkError("refused".into())));
        assert!(matches!(network, TranslateOutcome::TransportFailure(_)));

        let parse = TranslateOutcome::from(Err(TranslateError::ParseError("bad".into())));
        assert_eq!(
            parse,
            TranslateOutcome::OtherFailure("Malformed response: bad".to_string())
        );
    }
}
