#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use uniswap_v3_tags::ChainEndpoints;

pub const SUBGRAPH_PATH: &str = "/api/K1/subgraphs/id/uniswap-v3-test";

/// Endpoint table pointing chain 1 at the mock server.
pub fn mock_endpoints(server: &ServerGuard) -> ChainEndpoints {
    ChainEndpoints::new([(
        "1".to_string(),
        format!("{}/api/[api-key]/subgraphs/id/uniswap-v3-test", server.url()),
    )])
}

pub fn pool_json(ts: u64, symbol0: &str, symbol1: &str) -> Value {
    json!({
        "id": format!("0x{ts:040x}"),
        "createdAtTimestamp": ts.to_string(),
        "token0": { "id": "0x01", "name": format!("{symbol0} Token"), "symbol": symbol0 },
        "token1": { "id": "0x02", "name": format!("{symbol1} Token"), "symbol": symbol1 }
    })
}

/// `len` pools with consecutive timestamps starting at `first_ts`.
pub fn page_json(first_ts: u64, len: u64) -> Value {
    let pools: Vec<Value> = (first_ts..first_ts + len)
        .map(|ts| pool_json(ts, "USDC", "WETH"))
        .collect();
    json!({ "data": { "pools": pools } })
}

pub async fn mock_page(server: &mut ServerGuard, cursor: u64, body: &Value) -> Mock {
    server
        .mock("POST", SUBGRAPH_PATH)
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::PartialJson(json!({ "variables": { "lastTimestamp": cursor } })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await
}

/// Events recorded by [`CapturedLogs`]: level and rendered message.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    events: std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String)>>>,
}

impl CapturedLogs {
    /// Crate events at `level`, in emission order.
    pub fn messages(&self, level: tracing::Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(event_level, _)| *event_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        use tracing_subscriber::layer::SubscriberExt;
        tracing_subscriber::registry().with(self.clone())
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CapturedLogs {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if !event.metadata().target().starts_with("uniswap_v3_tags") {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.message));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
