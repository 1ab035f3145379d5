mod common;

use common::{mock_endpoints, mock_page, page_json, pool_json, SUBGRAPH_PATH};
use serde_json::json;
use uniswap_v3_tags::{TagError, TagService, UniswapV3TagService};

#[tokio::test]
async fn returns_tags_across_all_pages() {
    let mut server = mockito::Server::new_async().await;
    let first = mock_page(&mut server, 0, &page_json(1, 1000)).await;
    let second = mock_page(&mut server, 1000, &page_json(1001, 1000)).await;
    let third = mock_page(&mut server, 2000, &page_json(2001, 400)).await;
    let service = UniswapV3TagService::with_endpoints(mock_endpoints(&server));

    let tags = service.return_tags("1", "K1").await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
    assert_eq!(tags.len(), 2400);
    assert_eq!(tags[0].contract_address, format!("eip155:1:0x{:040x}", 1));
    assert_eq!(tags[0].public_name_tag, "USDC/WETH Pool");
}

#[tokio::test]
async fn excludes_pools_with_script_tags() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "data": {
            "pools": [
                pool_json(1, "USDC", "WETH"),
                pool_json(2, "<script>alert(1)</script>", "WETH"),
                pool_json(3, "DAI", "USDC")
            ]
        }
    });
    mock_page(&mut server, 0, &body).await;
    let service = UniswapV3TagService::with_endpoints(mock_endpoints(&server));

    let tags = service.return_tags("1", "K1").await.unwrap();

    let names: Vec<&str> = tags.iter().map(|t| t.public_name_tag.as_str()).collect();
    assert_eq!(names, vec!["USDC/WETH Pool", "DAI/USDC Pool"]);
    assert!(tags.iter().all(|t| !t.public_note.contains("<script>")));
}

#[tokio::test]
async fn http_failure_on_later_page_returns_no_tags() {
    let mut server = mockito::Server::new_async().await;
    mock_page(&mut server, 0, &page_json(1, 1000)).await;
    server
        .mock("POST", SUBGRAPH_PATH)
        .match_body(mockito::Matcher::PartialJson(json!({ "variables": { "lastTimestamp": 1000 } })))
        .with_status(500)
        .create_async()
        .await;
    let service = UniswapV3TagService::with_endpoints(mock_endpoints(&server));

    let err = service.return_tags("1", "K1").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
    assert!(matches!(err, TagError::Fetch { .. }));
}

#[tokio::test]
async fn graphql_errors_reject_with_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", SUBGRAPH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "errors": [{ "message": "subgraph not found" }] }).to_string())
        .create_async()
        .await;
    let service = UniswapV3TagService::with_endpoints(mock_endpoints(&server));

    let err = service.return_tags("1", "K1").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error fetching Uniswap v3 pools for chain 1: GraphQL errors occurred"
    );
}

#[tokio::test]
async fn unsupported_chain_never_hits_network() {
    let mut server = mockito::Server::new_async().await;
    let untouched = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let service = UniswapV3TagService::with_endpoints(mock_endpoints(&server));

    let err = service.return_tags("137", "K1").await.unwrap_err();

    untouched.assert_async().await;
    assert_eq!(
        err.to_string(),
        "Unsupported Chain ID: 137. Only the following values are accepted: 1"
    );
}
