use serde::{Deserialize, Serialize};

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// 创建子账户时提交的信息
///
/// 可选字段为空字符串或0时表示未设置，序列化时省略
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SubAccountPayload {
    pub sub_account_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ref_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_level: String,
    /// 母账户ID
    #[serde(skip_serializing_if = "is_zero")]
    pub parent_id: u64,
    /// 日志存放的账户ID
    #[serde(skip_serializing_if = "is_zero", alias = "LogsAccountID")]
    pub logs_account_id: u64,
}

impl SubAccountPayload {
    pub fn new(name: &str) -> Self {
        Self {
            sub_account_name: name.to_string(),
            ..Default::default()
        }
    }
}

/// 子账户，sub_account_id由Incapsula分配
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubAccount {
    #[serde(default)]
    pub sub_account_id: u64,
    #[serde(flatten)]
    pub payload: SubAccountPayload,
}

impl SubAccount {
    pub fn name(&self) -> &str {
        &self.payload.sub_account_name
    }
}

/// 添加子账户的响应
#[derive(Debug, Deserialize)]
pub struct SubAccountAddResponse {
    #[serde(default)]
    pub sub_account: SubAccount,
    #[serde(default)]
    pub res: i64,
}

/// 子账户列表(一页)的响应
#[derive(Debug, Deserialize)]
pub struct SubAccountListResponse {
    #[serde(rename = "resultList", default)]
    pub sub_accounts: Vec<SubAccount>,
    #[serde(default)]
    pub res: i64,
}

/// 删除子账户的响应，只关心res，res_message等字段忽略
#[derive(Debug, Deserialize)]
pub(crate) struct SubAccountDeleteResponse {
    #[serde(default)]
    pub(crate) res: i64,
}
