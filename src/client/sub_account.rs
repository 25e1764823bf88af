use super::{
    params::{Operation, PSubAccountAdd, PSubAccountDelete, PSubAccountList},
    RestConn,
};
use crate::{
    errors::{IncapApiError, IncapResult},
    types::sub_account::{
        SubAccount, SubAccountAddResponse, SubAccountDeleteResponse, SubAccountListResponse,
        SubAccountPayload,
    },
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

const ENDPOINT_SUB_ACCOUNT_ADD: &str = "subaccounts/add";
const ENDPOINT_SUB_ACCOUNT_LIST: &str = "accounts/listSubAccounts";
const ENDPOINT_SUB_ACCOUNT_DELETE: &str = "subaccounts/delete";

/// 子账户列表每页的数量，返回满页时才会继续请求下一页
pub const PAGE_SIZE: usize = 50;

fn decode<T: DeserializeOwned>(context: &str, body: &str) -> IncapResult<T> {
    serde_json::from_str::<T>(body).map_err(|source| IncapApiError::Decode {
        context: context.to_string(),
        body: body.to_string(),
        source,
    })
}

/// 子账户相关接口
impl RestConn {
    /// 添加子账户，成功时返回的子账户带有Incapsula分配的sub_account_id
    #[instrument(skip(self))]
    pub async fn add_sub_account(
        &self,
        payload: &SubAccountPayload,
    ) -> IncapResult<SubAccountAddResponse> {
        let name = payload.sub_account_name.as_str();
        if name.is_empty() {
            return Err(IncapApiError::ArgumentError(
                "sub_account_name must not be empty".to_string(),
            ));
        }
        info!("adding Incapsula subaccount: {}", name);

        let params = PSubAccountAdd::new(payload);
        let res = self
            .post_form(ENDPOINT_SUB_ACCOUNT_ADD, params, Operation::CreateSubAccount)
            .await
            .map_err(|e| IncapApiError::transport(format!("adding subaccount {}", name), e))?;
        debug!("Incapsula add subaccount JSON response: {}", res);

        let add_res = decode::<SubAccountAddResponse>(
            &format!("add subaccount response for subaccount {}", name),
            &res,
        )?;
        if add_res.res != 0 {
            return Err(IncapApiError::service(
                format!("adding subaccount {}", name),
                &res,
            ));
        }
        Ok(add_res)
    }

    /// 查找某个母账户下的子账户，一页一页地扫描，直到找到或者遇到不满的一页
    ///
    /// 没找到时返回`Ok(None)`，任何一页请求失败都直接返回错误
    #[instrument(skip(self))]
    pub async fn sub_account(
        &self,
        parent_account_id: u64,
        sub_account_id: u64,
    ) -> IncapResult<Option<SubAccount>> {
        info!("reading Incapsula subaccount id: {}", sub_account_id);

        let mut page_num = 0;
        loop {
            debug!(
                "looking for subaccount {}, fetching page: {}",
                sub_account_id, page_num
            );
            let sub_accounts = self.sub_account_page(parent_account_id, page_num).await?;
            let full_page = sub_accounts.len() == PAGE_SIZE;
            if let Some(found) = sub_accounts
                .into_iter()
                .find(|s| s.sub_account_id == sub_account_id)
            {
                info!("found subaccount: {:?}", found);
                return Ok(Some(found));
            }
            if !full_page {
                break;
            }
            page_num += 1;
        }

        debug!("didn't find subaccount {}", sub_account_id);
        Ok(None)
    }

    /// 列出某个母账户下的所有子账户(account_id为0时不过滤)，按页的顺序返回
    #[instrument(skip(self))]
    pub async fn sub_account_list(&self, parent_account_id: u64) -> IncapResult<Vec<SubAccount>> {
        let mut all = Vec::new();
        let mut page_num = 0;
        loop {
            let sub_accounts = self.sub_account_page(parent_account_id, page_num).await?;
            let full_page = sub_accounts.len() == PAGE_SIZE;
            all.extend(sub_accounts);
            if !full_page {
                break;
            }
            page_num += 1;
        }
        info!("listed {} subaccounts for account {}", all.len(), parent_account_id);
        Ok(all)
    }

    /// 请求一页子账户，每页PAGE_SIZE个
    #[instrument(skip(self))]
    pub async fn sub_account_page(
        &self,
        account_id: u64,
        page_num: u32,
    ) -> IncapResult<Vec<SubAccount>> {
        let params = PSubAccountList::new(account_id, page_num, PAGE_SIZE);
        let res = self
            .post_form(ENDPOINT_SUB_ACCOUNT_LIST, params, Operation::ReadSubAccount)
            .await
            .map_err(|e| {
                IncapApiError::transport(
                    format!(
                        "getting subaccounts for account {} page {}",
                        account_id, page_num
                    ),
                    e,
                )
            })?;
        debug!("Incapsula subaccounts JSON response: {}", res);

        let list_res = decode::<SubAccountListResponse>(
            &format!(
                "subaccounts list response for account {} page {}",
                account_id, page_num
            ),
            &res,
        )?;
        if list_res.res != 0 {
            return Err(IncapApiError::service(
                format!("listing subaccounts for account {}", account_id),
                &res,
            ));
        }
        Ok(list_res.sub_accounts)
    }

    /// 删除子账户，没有错误即表示删除成功
    #[instrument(skip(self))]
    pub async fn delete_sub_account(&self, sub_account_id: u64) -> IncapResult<()> {
        info!("deleting Incapsula subaccount id: {}", sub_account_id);

        let params = PSubAccountDelete::new(sub_account_id);
        let res = self
            .post_form(ENDPOINT_SUB_ACCOUNT_DELETE, params, Operation::DeleteSubAccount)
            .await
            .map_err(|e| {
                IncapApiError::transport(format!("deleting subaccount id: {}", sub_account_id), e)
            })?;
        debug!("Incapsula delete subaccount JSON response: {}", res);

        let delete_res = decode::<SubAccountDeleteResponse>(
            &format!("delete subaccount response for subaccount id: {}", sub_account_id),
            &res,
        )?;
        if delete_res.res != 0 {
            return Err(IncapApiError::service(
                format!("deleting subaccount id: {}", sub_account_id),
                &res,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_contains_body() {
        let body = "<html>502 Bad Gateway</html>";
        let e = decode::<SubAccountAddResponse>("add subaccount", body).unwrap_err();
        assert!(matches!(e, IncapApiError::Decode { .. }));
        assert!(e.to_string().contains(body));
    }
}
