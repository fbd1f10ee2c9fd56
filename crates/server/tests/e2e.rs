use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use server::{startup, ServerState};

struct TestApp {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await??;
        Ok(())
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(startup::serve(listener, ServerState::in_memory(), async move {
        let _ = rx.await;
    }));

    Ok(TestApp { base_url, shutdown: Some(tx), handle })
}

#[tokio::test]
async fn e2e_bank_lifecycle_over_tcp() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let banks = format!("{}/api/banks", app.base_url);

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let bank = json!({"accountNumber": "e2e-1", "trust": 4.25, "transactionFee": 3});
    let res = c.post(&banks).json(&bank).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, bank);

    let res = c.post(&banks).json(&bank).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let patched = json!({"accountNumber": "e2e-1", "trust": 0.5, "transactionFee": 9});
    let res = c.patch(&banks).json(&patched).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{banks}/e2e-1")).send().await?;
    assert_eq!(res.json::<Value>().await?, patched);

    let listed = c.get(&banks).send().await?.json::<Vec<Value>>().await?;
    let keys: Vec<&str> = listed.iter().filter_map(|b| b["accountNumber"].as_str()).collect();
    assert_eq!(keys, vec!["1234", "3435", "5678", "e2e-1"]);

    let res = c.delete(format!("{banks}/e2e-1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.delete(format!("{banks}/e2e-1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    app.stop().await
}
