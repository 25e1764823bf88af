use crate::types::sub_account::SubAccountPayload;
use serde::Serialize;
use std::fmt::Display;

/// 请求所属的操作，作为`x-tf-operation`请求头随请求发送
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateSubAccount,
    ReadSubAccount,
    DeleteSubAccount,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateSubAccount => "create_subaccount",
            Operation::ReadSubAccount => "read_subaccount",
            Operation::DeleteSubAccount => "delete_subaccount",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// 添加子账户的表单参数，空字符串和0值的可选字段不发送
#[derive(Debug, Serialize)]
pub struct PSubAccountAdd<'a> {
    sub_account_name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    ref_id: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    parent_id: u64,
    #[serde(skip_serializing_if = "is_zero")]
    logs_account_id: u64,
    #[serde(skip_serializing_if = "str::is_empty")]
    log_level: &'a str,
}

impl<'a> PSubAccountAdd<'a> {
    pub fn new(payload: &'a SubAccountPayload) -> Self {
        Self {
            sub_account_name: &payload.sub_account_name,
            ref_id: &payload.ref_id,
            parent_id: payload.parent_id,
            logs_account_id: payload.logs_account_id,
            log_level: &payload.log_level,
        }
    }
}

/// 分页列出子账户，account_id为0时不按母账户过滤
#[derive(Debug, Serialize)]
pub struct PSubAccountList {
    #[serde(skip_serializing_if = "is_zero")]
    account_id: u64,
    page_num: u32,
    page_size: usize,
}

impl PSubAccountList {
    pub fn new(account_id: u64, page_num: u32, page_size: usize) -> Self {
        Self {
            account_id,
            page_num,
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PSubAccountDelete {
    sub_account_id: u64,
}

impl PSubAccountDelete {
    pub fn new(sub_account_id: u64) -> Self {
        Self { sub_account_id }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_p_sub_account_add() {
        // 只有名称
        let payload = SubAccountPayload::new("acme");
        let x = serde_urlencoded::to_string(PSubAccountAdd::new(&payload));
        assert_eq!(Ok("sub_account_name=acme".to_string()), x, "name only test failed");

        // 全部字段
        let payload = SubAccountPayload {
            sub_account_name: "acme corp".to_string(),
            ref_id: "ref-1".to_string(),
            log_level: "full".to_string(),
            parent_id: 100,
            logs_account_id: 200,
        };
        let x = serde_urlencoded::to_string(PSubAccountAdd::new(&payload));
        assert_eq!(
            Ok(
                "sub_account_name=acme+corp&ref_id=ref-1&parent_id=100&logs_account_id=200&log_level=full"
                    .to_string()
            ),
            x,
            "all fields test failed"
        );

        // 部分字段
        let payload = SubAccountPayload {
            parent_id: 7,
            ..SubAccountPayload::new("acme")
        };
        let x = serde_urlencoded::to_string(PSubAccountAdd::new(&payload));
        assert_eq!(Ok("sub_account_name=acme&parent_id=7".to_string()), x);
    }

    #[test]
    fn test_p_sub_account_list() {
        let x = serde_urlencoded::to_string(PSubAccountList::new(0, 3, 50));
        assert_eq!(Ok("page_num=3&page_size=50".to_string()), x);

        let x = serde_urlencoded::to_string(PSubAccountList::new(1234, 0, 50));
        assert_eq!(Ok("account_id=1234&page_num=0&page_size=50".to_string()), x);
    }

    #[test]
    fn test_p_sub_account_delete() {
        let x = serde_urlencoded::to_string(PSubAccountDelete::new(42));
        assert_eq!(Ok("sub_account_id=42".to_string()), x);
    }

    #[test]
    fn test_operation_tag() {
        assert_eq!(Operation::CreateSubAccount.to_string(), "create_subaccount");
        assert_eq!(Operation::ReadSubAccount.as_str(), "read_subaccount");
        assert_eq!(Operation::DeleteSubAccount.as_str(), "delete_subaccount");
    }
}
