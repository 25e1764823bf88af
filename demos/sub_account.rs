use incap_api::{client::RestConn, Config, SubAccountPayload};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // INCAPSULA_API_ID、INCAPSULA_API_KEY、INCAPSULA_BASE_URL(可选)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let rest_conn = RestConn::new(&config, None).unwrap();

    let payload = SubAccountPayload {
        ref_id: "demo-ref".to_string(),
        log_level: "security".to_string(),
        ..SubAccountPayload::new("demo subaccount")
    };
    let added = rest_conn.add_sub_account(&payload).await.unwrap();
    let id = added.sub_account.sub_account_id;
    debug!("added: {:?}", added);

    let found = rest_conn.sub_account(0, id).await;
    debug!("found: {:?}", found);

    let x = rest_conn.delete_sub_account(id).await;
    debug!("deleted: {:?}", x);
}
