/// REST客户端连接
pub mod rest;

/// Rest请求的表单参数和操作类型
///
/// 所有请求参数都需要实现Serialize，由serde_urlencoded编码为表单
pub mod params;

/// [子账户接口](rest/struct.RestConn.html#impl-1)，添加、查询、删除子账户
pub mod sub_account;

pub use params::Operation;
pub use rest::*;
pub use sub_account::PAGE_SIZE;
