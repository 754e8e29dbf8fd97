//! HTTP-ответ в виде, не зависящем от транспорта (web_sys, reqwest, тесты).

use serde::de::DeserializeOwned;

/// Статус и тело ответа, прочитанное как текст
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Тело ответа, либо код статуса, если тело пустое
    pub fn error_text(&self) -> String {
        if self.body.is_empty() {
            self.status.to_string()
        } else {
            self.body.clone()
        }
    }

    pub fn parse<T: DeserializeOwned>(&self) -> ParsedBody<T> {
        ParsedBody::parse(&self.body)
    }
}

/// Двухступенчатый разбор тела: сначала JSON, при неудаче исходный текст
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody<T> {
    Structured(T),
    Raw(String),
}

impl<T: DeserializeOwned> ParsedBody<T> {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<T>(text) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }
}

impl<T> ParsedBody<T> {
    pub fn structured(self) -> Option<T> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Probe {
        value: i32,
    }

    #[test]
    fn test_success_range() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(199, "").is_success());
        assert!(!HttpReply::new(301, "").is_success());
        assert!(!HttpReply::new(500, "").is_success());
    }

    #[test]
    fn test_error_text_falls_back_to_status() {
        assert_eq!(HttpReply::new(503, "").error_text(), "503");
        assert_eq!(HttpReply::new(503, "busy").error_text(), "busy");
    }

    #[test]
    fn test_parse_structured_and_raw() {
        let ok: ParsedBody<Probe> = ParsedBody::parse(r#"{"value":7}"#);
        assert_eq!(ok, ParsedBody::Structured(Probe { value: 7 }));

        let raw: ParsedBody<Probe> = HttpReply::new(200, "not json").parse();
        assert_eq!(raw, ParsedBody::Raw("not json".to_string()));
        assert_eq!(raw.structured(), None);
    }
}
