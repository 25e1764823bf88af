/// 子账户
pub mod sub_account;
