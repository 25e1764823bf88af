use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IncapApiError {
    #[error("4xx client error, status: {0}, body: {1}")]
    ClientError(u16, String),

    #[error("5xx server error: {0}")]
    ServerError(String),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    /// 请求没能完成(网络、连接、HTTP状态码)，附带正在处理的子账户或分页信息
    #[error("error {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<IncapApiError>,
    },

    /// 响应体不是预期的JSON结构，body为原始响应
    #[error("error parsing {context} JSON response: {source}\nresponse: {body}")]
    Decode {
        context: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON解析成功，但res不为0
    #[error("error from Incapsula service when {context}: {body}")]
    Service { context: String, body: String },

    #[error("argument error: {0}")]
    ArgumentError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    UrlError(#[from] url::ParseError),

    #[error(transparent)]
    EncodeError(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    HeaderError(#[from] InvalidHeaderValue),

    #[error("unknown error: {0}")]
    Unknown(String),
}

pub type IncapResult<T> = Result<T, IncapApiError>;

impl IncapApiError {
    /// 为传输层错误加上上下文
    pub(crate) fn transport(context: impl Into<String>, source: IncapApiError) -> Self {
        IncapApiError::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// 响应体中的`res`不为0时使用
    pub(crate) fn service(context: impl Into<String>, body: &str) -> Self {
        IncapApiError::Service {
            context: context.into(),
            body: body.to_string(),
        }
    }

    /// 原始响应体，只有Decode和Service错误才有
    pub fn body(&self) -> Option<&str> {
        match self {
            IncapApiError::Decode { body, .. } | IncapApiError::Service { body, .. } => {
                Some(body.as_str())
            }
            IncapApiError::Transport { source, .. } => source.body(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_contains_body() {
        let body = r#"{"res":1,"res_message":"Unexpected error"}"#;
        let e = IncapApiError::service("adding subaccount foo", body);
        assert!(e.to_string().contains(body));
        assert_eq!(e.body(), Some(body));
    }

    #[test]
    fn test_transport_error_context() {
        let e = IncapApiError::transport(
            "deleting subaccount id: 42",
            IncapApiError::ServerError("bad gateway".to_string()),
        );
        assert_eq!(
            e.to_string(),
            "error deleting subaccount id: 42: 5xx server error: bad gateway"
        );
        assert!(e.body().is_none());
    }
}
