use crate::{
    config::Config,
    errors::{IncapApiError, IncapResult},
};
use reqwest::{header, Url};
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

use super::params::Operation;

/// REST响应体
pub(crate) type RespBody = String;

pub const API_ID_HEADER: &str = "x-api-id";
pub const API_KEY_HEADER: &str = "x-api-key";
pub const OPERATION_HEADER: &str = "x-tf-operation";

/// 已建立好的Http连接客户端(reqwest::Client)，鉴权信息放在默认请求头中
#[derive(Debug, Clone)]
pub struct RestConn {
    conn: reqwest::Client,
    base_url: Url,
}

impl RestConn {
    ///```rust
    ///let config = Config::new("12345", "abcdefhijklmnopqrstuvwxyz");
    ///let rest_conn = RestConn::new(&config, Some("http://127.0.0.1:8118"))?;
    ///```
    pub fn new(config: &Config, proxy: Option<&str>) -> IncapResult<RestConn> {
        let mut api_key = header::HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        let mut header = header::HeaderMap::new();
        header.insert(API_ID_HEADER, header::HeaderValue::from_str(&config.api_id)?);
        header.insert(API_KEY_HEADER, api_key);

        let mut builder = reqwest::Client::builder().default_headers(header);
        if let Some(prx) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(prx)?);
        }

        Ok(Self {
            conn: builder.build()?,
            base_url: config.base_url()?,
        })
    }

    async fn check_rest_resp(resp: reqwest::Response) -> IncapResult<reqwest::Response> {
        let status_code = u16::from(resp.status());
        if status_code >= 300 {
            let body = resp.text().await.unwrap_or_default();
            let e = if status_code >= 500 {
                IncapApiError::ServerError(body)
            } else if status_code >= 400 {
                IncapApiError::ClientError(status_code, body)
            } else {
                IncapApiError::Unknown(body)
            };
            Err(e)
        } else {
            Ok(resp)
        }
    }

    /// 以表单方式POST请求，返回响应的Body字符串，否则报错
    ///
    /// operation会放进`x-tf-operation`请求头
    ///```rust
    ///let params = PSubAccountDelete::new(42);
    ///let body = rest_conn
    ///    .post_form("subaccounts/delete", params, Operation::DeleteSubAccount)
    ///    .await?;
    ///```
    #[tracing::instrument(skip(self))]
    pub async fn post_form<P>(
        &self,
        path: &str,
        params: P,
        operation: Operation,
    ) -> IncapResult<RespBody>
    where
        P: Serialize + Debug,
    {
        let url = self.base_url.join(path)?;
        let form = serde_urlencoded::to_string(params)?;
        debug!("POST {} form: {}", url, form);

        let mut resp = self
            .conn
            .post(url)
            .header(OPERATION_HEADER, operation.as_str())
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form)
            .send()
            .await?;

        resp = Self::check_rest_resp(resp).await?;

        Ok(resp.text().await?)
    }
}
