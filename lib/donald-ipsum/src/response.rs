use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Error content used when a failed response carries nothing displayable.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A successful reply: HTTP 200 with `success: true`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorContent {
    Messages(Vec<String>),
    Unknown,
}

impl fmt::Display for ErrorContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorContent::Messages(messages) => f.write_str(&messages.join("; ")),
            ErrorContent::Unknown => f.write_str(UNKNOWN_ERROR),
        }
    }
}

// Serializes as the message list, or as the bare fallback string.
impl Serialize for ErrorContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ErrorContent::Messages(messages) => messages.serialize(serializer),
            ErrorContent::Unknown => serializer.serialize_str(UNKNOWN_ERROR),
        }
    }
}

/// Any reply that is not a success: a non-200 status, or a body whose
/// `success` flag is not `true`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Donald Ipsum API failed with status {status}: {content}")]
pub struct ApiError {
    pub status: u16,
    pub content: ErrorContent,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Body {
    #[serde(default)]
    pub success: Value,

    #[serde(default, deserialize_with = "present")]
    pub content: Option<Value>,
}

// Keeps an explicit `null` apart from a missing field.
fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug)]
enum Content {
    Missing,
    Messages(Vec<String>),
    Malformed,
}

impl Body {
    fn is_success(&self) -> bool {
        self.success == Value::Bool(true)
    }

    /// A lone string is a one-element list, an empty one counts as missing.
    /// Anything but strings is malformed.
    fn content(self) -> Content {
        match self.content {
            None => Content::Missing,
            Some(Value::String(s)) if s.is_empty() => Content::Missing,
            Some(Value::String(s)) => Content::Messages(vec![s]),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(Content::Malformed, Content::Messages),
            Some(_) => Content::Malformed,
        }
    }
}

/// Maps a status code and raw body to the success or error shape.
///
/// A body that is not JSON is an [`ApiError`] with [`ErrorContent::Unknown`],
/// even under status 200, and so is a successful reply whose `content` is not
/// made of strings. Only failures of the HTTP exchange itself surface as
/// [`crate::Error::Request`].
pub(crate) fn classify(status: u16, body: &[u8]) -> std::result::Result<ApiResponse, ApiError> {
    let body = match serde_json::from_slice::<Body>(body) {
        Ok(body) => body,
        Err(e) => {
            log::debug!("undecodable response body (status {status}): {e}");
            return Err(ApiError {
                status,
                content: ErrorContent::Unknown,
            });
        }
    };

    if status == 200 && body.is_success() {
        return match body.content() {
            Content::Missing => Ok(ApiResponse {
                status,
                content: vec![],
            }),
            Content::Messages(content) => Ok(ApiResponse { status, content }),
            Content::Malformed => {
                log::warn!("successful response with malformed content (status {status})");
                Err(ApiError {
                    status,
                    content: ErrorContent::Unknown,
                })
            }
        };
    }

    let content = match body.content() {
        Content::Messages(messages) if !messages.is_empty() => ErrorContent::Messages(messages),
        _ => ErrorContent::Unknown,
    };

    Err(ApiError { status, content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_success() {
        let res = classify(
            200,
            &body(json!({"success": true, "content": ["Let's build a wall"]})),
        );
        assert_eq!(
            res,
            Ok(ApiResponse {
                status: 200,
                content: vec!["Let's build a wall".to_string()],
            })
        );
    }

    #[test]
    fn test_success_content_is_untouched() {
        let content = vec!["  padded  ".to_string(), String::new(), "<b>x</b>".to_string()];
        let res = classify(200, &body(json!({"success": true, "content": content}))).unwrap();
        assert_eq!(res.content, content);
    }

    #[test]
    fn test_success_without_content() {
        let res = classify(200, &body(json!({"success": true}))).unwrap();
        assert!(res.content.is_empty());
    }

    #[test]
    fn test_success_with_single_string_content() {
        let res = classify(200, &body(json!({"success": true, "content": "Huge"}))).unwrap();
        assert_eq!(res.content, vec!["Huge".to_string()]);
    }

    #[test]
    fn test_success_with_malformed_content() {
        for payload in [
            json!({"success": true, "content": ["a", 3]}),
            json!({"success": true, "content": [1, 2]}),
            json!({"success": true, "content": null}),
            json!({"success": true, "content": {"a": 1}}),
        ] {
            let err = classify(200, &body(payload)).unwrap_err();
            assert_eq!(
                err,
                ApiError {
                    status: 200,
                    content: ErrorContent::Unknown,
                }
            );
        }
    }

    #[test]
    fn test_error_keeps_empty_string_entries() {
        let err = classify(500, &body(json!({"success": false, "content": [""]}))).unwrap_err();
        assert_eq!(
            err,
            ApiError {
                status: 500,
                content: ErrorContent::Messages(vec![String::new()]),
            }
        );
    }

    #[test]
    fn test_non_200_is_error() {
        let res = classify(
            500,
            &body(json!({"success": false, "content": ["There was an error"]})),
        );
        assert_eq!(
            res,
            Err(ApiError {
                status: 500,
                content: ErrorContent::Messages(vec!["There was an error".to_string()]),
            })
        );
    }

    #[test]
    fn test_non_200_with_success_flag_is_error() {
        let err = classify(201, &body(json!({"success": true, "content": ["ok"]}))).unwrap_err();
        assert_eq!(err.status, 201);
        assert_eq!(err.content, ErrorContent::Messages(vec!["ok".to_string()]));
    }

    #[test]
    fn test_200_without_success_flag_is_error() {
        let err = classify(200, &body(json!({"content": ["Sad!"]}))).unwrap_err();
        assert_eq!(err.status, 200);
        assert_eq!(err.content, ErrorContent::Messages(vec!["Sad!".to_string()]));

        let err = classify(200, &body(json!({"success": false, "content": ["Sad!"]}))).unwrap_err();
        assert_eq!(err.status, 200);
    }

    #[test]
    fn test_truthy_success_flag_is_not_success() {
        let err = classify(200, &body(json!({"success": "true", "content": ["x"]}))).unwrap_err();
        assert_eq!(err.status, 200);

        let err = classify(200, &body(json!({"success": 1, "content": ["x"]}))).unwrap_err();
        assert_eq!(err.status, 200);
    }

    #[test]
    fn test_error_content_fallback() {
        for payload in [
            json!({"success": false}),
            json!({"success": false, "content": []}),
            json!({"success": false, "content": ""}),
            json!({"success": false, "content": null}),
            json!({"success": false, "content": 42}),
            json!({"success": false, "content": [1, 2]}),
        ] {
            let err = classify(404, &body(payload)).unwrap_err();
            assert_eq!(err.status, 404);
            assert_eq!(err.content, ErrorContent::Unknown);
        }
    }

    #[test]
    fn test_undecodable_body() {
        let err = classify(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError {
                status: 502,
                content: ErrorContent::Unknown,
            }
        );

        let err = classify(200, b"").unwrap_err();
        assert_eq!(err.status, 200);
        assert_eq!(err.content, ErrorContent::Unknown);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError {
            status: 500,
            content: ErrorContent::Messages(vec!["There was an error".to_string()]),
        };
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": 500, "content": ["There was an error"]})
        );

        let err = ApiError {
            status: 503,
            content: ErrorContent::Unknown,
        };
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": 503, "content": "Unknown error"})
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError {
            status: 500,
            content: ErrorContent::Messages(vec!["a".to_string(), "b".to_string()]),
        };
        assert_eq!(err.to_string(), "Donald Ipsum API failed with status 500: a; b");
        assert_eq!(ErrorContent::Unknown.to_string(), "Unknown error");
    }
}
