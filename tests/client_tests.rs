//! End-to-end tests of the client against a mocked JSON-RPC endpoint.

use ankr_multichain_client::client::Error;
use ankr_multichain_client::{AnkrClient, types::*};
use httpmock::{Method::POST, Mock, MockServer};
use serde_json::{Value, json};

const API_KEY: &str = "KEY123";

fn client_for(server: &MockServer) -> AnkrClient {
    AnkrClient::with_endpoint(format!("{}/", server.base_url()), API_KEY)
}

/// Answer any request whose body contains `partial` with `{"result": result}`.
async fn mock_result<'a>(server: &'a MockServer, partial: Value, result: Value) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/{API_KEY}"))
                .json_body_partial(partial.to_string());
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "jsonrpc": "2.0", "id": 0, "result": result }));
        })
        .await
}

fn currencies_reply() -> Value {
    json!({
        "currencies": [{
            "blockchain": "eth",
            "name": "Ethereum",
            "decimals": 18,
            "symbol": "ETH",
            "thumbnail": "https://example.com/eth.png"
        }]
    })
}

#[tokio::test]
async fn get_logs_posts_one_envelope_and_returns_result() {
    let server = MockServer::start_async().await;
    let request = GetLogsRequest::new(Blockchain::Eth, 17_000_000u64, 17_000_010u64)
        .with_address("0xdac17f958d2ee523a2206206994597c13d831ec7")
        .decoded();
    let params = serde_json::to_value(&request).expect("serialize");

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/{API_KEY}"))
                .header("content-type", "application/json")
                .json_body(json!({
                    "method": "ankr_getLogs",
                    "params": params,
                    "id": 1,
                    "jsonrpc": "2.0"
                }));
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "logs": [], "nextPageToken": "abc" }
            }));
        })
        .await;

    let reply = client_for(&server).get_logs(request).await.expect("logs");

    mock.assert_async().await;
    assert!(reply.logs.is_empty());
    assert_eq!(reply.next_page_token.as_deref(), Some("abc"));
}

#[tokio::test]
async fn rpc_error_carries_code_message_and_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/{API_KEY}"));
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": 3, "message": "boom", "data": { "foo": 1 } }
            }));
        })
        .await;

    let err = client_for(&server)
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect_err("rpc error");

    let rpc = err.as_rpc().expect("should be an RPC error");
    assert_eq!(rpc.message, "boom");
    assert_eq!(rpc.code, Some(3));
    assert_eq!(rpc.data, Some(json!({ "foo": 1 })));
    assert_eq!(rpc.to_string(), "boom");
}

#[tokio::test]
async fn sequential_ids_increase_from_one() {
    let server = MockServer::start_async().await;
    let mut mocks = Vec::new();
    for id in 1..=4 {
        mocks.push(mock_result(&server, json!({ "id": id }), currencies_reply()).await);
    }

    let client = client_for(&server);
    for _ in 0..4 {
        client
            .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
            .await
            .expect("currencies");
    }

    for mock in &mocks {
        mock.assert_hits_async(1).await;
    }
}

#[tokio::test]
async fn failed_call_still_consumes_an_id() {
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).json_body_partial(json!({ "id": 1 }).to_string());
            then.status(200)
                .json_body(json!({ "error": { "code": -32000, "message": "rate limited" } }));
        })
        .await;
    let second = mock_result(&server, json!({ "id": 2 }), currencies_reply()).await;

    let client = client_for(&server);
    assert!(
        client
            .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
            .await
            .is_err()
    );
    client
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect("second call");

    failing.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_never_share_an_id() {
    let server = MockServer::start_async().await;
    let price = json!({ "blockchain": "eth", "usdPrice": "3000.5" });
    let first = mock_result(&server, json!({ "id": 1 }), price.clone()).await;
    let second = mock_result(&server, json!({ "id": 2 }), price).await;

    let client = client_for(&server);
    let (a, b) = tokio::join!(
        client.get_token_price(GetTokenPriceRequest::native(Blockchain::Eth)),
        client.get_token_price(GetTokenPriceRequest::native(Blockchain::Eth)),
    );
    a.expect("first");
    b.expect("second");

    first.assert_hits_async(1).await;
    second.assert_hits_async(1).await;
}

#[tokio::test]
async fn each_method_uses_its_procedure_name() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    let blocks = mock_result(
        &server,
        json!({ "method": "ankr_getBlocks" }),
        json!({ "blocks": [] }),
    )
    .await;
    client
        .get_blocks(GetBlocksRequest::latest(Blockchain::Bsc))
        .await
        .expect("blocks");
    blocks.assert_async().await;

    let txs = mock_result(
        &server,
        json!({ "method": "ankr_getTransactionsByHash", "params": { "transactionHash": "0xfeed" } }),
        json!({ "transactions": [] }),
    )
    .await;
    client
        .get_transactions_by_hash(GetTransactionsByHashRequest::new("0xfeed"))
        .await
        .expect("transactions");
    txs.assert_async().await;

    let balance = mock_result(
        &server,
        json!({ "method": "ankr_getAccountBalance" }),
        json!({ "totalBalanceUsd": "0", "assets": [] }),
    )
    .await;
    let reply = client
        .get_account_balance(GetAccountBalanceRequest::new("0xabc"))
        .await
        .expect("balance");
    assert_eq!(reply.total_balance_usd, "0");
    balance.assert_async().await;

    let nfts = mock_result(
        &server,
        json!({ "method": "ankr_getNFTsByOwner" }),
        json!({
            "owner": "0xabc",
            "assets": [{
                "blockchain": "eth",
                "name": "Ape #1",
                "tokenId": "1",
                "contractType": "ERC721",
                "contractAddress": "0xbc4c",
                "traits": [{ "trait_type": "Fur", "value": "Gold" }]
            }]
        }),
    )
    .await;
    let reply = client
        .get_nfts_by_owner(GetNftsByOwnerRequest::new("0xabc"))
        .await
        .expect("nfts");
    assert_eq!(reply.assets[0].contract_type, NftContractType::Erc721);
    assert_eq!(reply.assets[0].traits[0].value, "Gold");
    nfts.assert_async().await;

    let metadata = mock_result(
        &server,
        json!({ "method": "ankr_getNFTMetadata" }),
        json!({
            "metadata": {
                "blockchain": "eth",
                "contractAddress": "0xbc4c",
                "tokenId": "1",
                "contractType": "ERC721"
            },
            "attributes": { "name": "Ape #1", "imageUrl": "ipfs://x" }
        }),
    )
    .await;
    let reply = client
        .get_nft_metadata(GetNftMetadataRequest::new(Blockchain::Eth, "0xbc4c", "1"))
        .await
        .expect("metadata");
    assert_eq!(reply.attributes.expect("attributes").image_url, "ipfs://x");
    metadata.assert_async().await;

    let holders = mock_result(
        &server,
        json!({ "method": "ankr_getTokenHolders" }),
        json!({
            "blockchain": "eth",
            "contractAddress": "0xdac1",
            "tokenDecimals": 6,
            "holders": [{ "holderAddress": "0x1", "balance": "1.5", "balanceRawInteger": "1500000" }],
            "holdersCount": 1,
            "nextPageToken": ""
        }),
    )
    .await;
    let reply = client
        .get_token_holders(GetTokenHoldersRequest::new(Blockchain::Eth, "0xdac1"))
        .await
        .expect("holders");
    assert_eq!(reply.holders[0].raw_amount(), Some(1_500_000));
    holders.assert_async().await;

    let count = mock_result(
        &server,
        json!({ "method": "ankr_getTokenHoldersCount" }),
        json!({
            "blockchain": "eth",
            "contractAddress": "0xdac1",
            "tokenDecimals": 6,
            "holderCountHistory": [],
            "latestHoldersCount": 42
        }),
    )
    .await;
    let reply = client
        .get_token_holders_count(GetTokenHoldersCountRequest::new(Blockchain::Eth, "0xdac1"))
        .await
        .expect("holders count");
    assert_eq!(reply.latest_holders_count, 42);
    count.assert_async().await;

    let currencies = mock_result(
        &server,
        json!({ "method": "ankr_getCurrencies" }),
        currencies_reply(),
    )
    .await;
    let reply = client
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect("currencies");
    assert_eq!(reply.currencies[0].symbol, "ETH");
    currencies.assert_async().await;
}

#[tokio::test]
async fn supplemental_procedures() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    let stats = mock_result(
        &server,
        json!({ "method": "ankr_getBlockchainStats" }),
        json!({ "stats": [{
            "blockchain": "eth",
            "totalTransactionsCount": 2000000000u64,
            "totalEventsCount": 5000000000u64,
            "latestBlockNumber": 19000000,
            "blockTimeMs": 12000,
            "nativeCoinUsdPrice": "3000"
        }] }),
    )
    .await;
    let reply = client
        .get_blockchain_stats(GetBlockchainStatsRequest::default())
        .await
        .expect("stats");
    assert_eq!(reply.stats[0].block_time_ms, 12_000);
    stats.assert_async().await;

    let interactions = mock_result(
        &server,
        json!({ "method": "ankr_getInteractions", "params": { "address": "0xabc" } }),
        json!({ "blockchains": ["eth", "zora"] }),
    )
    .await;
    let reply = client
        .get_interactions(GetInteractionsRequest::new("0xabc"))
        .await
        .expect("interactions");
    assert_eq!(
        reply.blockchains,
        vec![Blockchain::Eth, Blockchain::Other("zora".to_string())]
    );
    interactions.assert_async().await;

    let nft_holders = mock_result(
        &server,
        json!({ "method": "ankr_getNFTHolders" }),
        json!({ "holders": ["0x1", "0x2"], "nextPageToken": "" }),
    )
    .await;
    let reply = client
        .get_nft_holders(GetNftHoldersRequest::new(Blockchain::Eth, "0xbc4c"))
        .await
        .expect("nft holders");
    assert_eq!(reply.holders.len(), 2);
    nft_holders.assert_async().await;

    let token_transfers = mock_result(
        &server,
        json!({ "method": "ankr_getTokenTransfers" }),
        json!({ "transfers": [] }),
    )
    .await;
    client
        .get_token_transfers(GetTransfersRequest::new(Blockchain::Eth, "0xabc"))
        .await
        .expect("token transfers");
    token_transfers.assert_async().await;

    let nft_transfers = mock_result(
        &server,
        json!({ "method": "ankr_getNftTransfers" }),
        json!({ "transfers": [] }),
    )
    .await;
    client
        .get_nft_transfers(GetTransfersRequest::new(Blockchain::Eth, "0xabc"))
        .await
        .expect("nft transfers");
    nft_transfers.assert_async().await;

    let by_address = mock_result(
        &server,
        json!({ "method": "ankr_getTransactionsByAddress" }),
        json!({ "transactions": [] }),
    )
    .await;
    client
        .get_transactions_by_address(GetTransactionsByAddressRequest::new(
            Blockchain::Eth,
            "0xabc",
        ))
        .await
        .expect("transactions by address");
    by_address.assert_async().await;
}

#[tokio::test]
async fn non_success_status_without_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(502).body("bad gateway");
        })
        .await;

    let err = client_for(&server)
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect_err("status error");
    match err {
        Error::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_with_rpc_error_is_unwrapped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(403).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32001, "message": "invalid api key" }
            }));
        })
        .await;

    let err = client_for(&server)
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect_err("rpc error");
    assert_eq!(err.as_rpc().map(|e| e.code), Some(Some(-32001)));
}

#[tokio::test]
async fn unexpected_result_shape_is_json_error() {
    let server = MockServer::start_async().await;
    mock_result(&server, json!({ "id": 1 }), json!("not an object")).await;

    let err = client_for(&server)
        .get_blocks(GetBlocksRequest::latest(Blockchain::Eth))
        .await
        .expect_err("decode error");
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn transport_failure_is_http_error() {
    // Nothing listens on the discard port.
    let client = AnkrClient::with_endpoint("http://127.0.0.1:9/", API_KEY);
    let err = client
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect_err("connection refused");
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn builder_headers_are_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/{API_KEY}"))
                .header("x-request-source", "indexer")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({ "result": currencies_reply() }));
        })
        .await;

    let client = AnkrClient::builder(API_KEY)
        .endpoint(format!("{}/", server.base_url()))
        .header("x-request-source", "indexer")
        .build()
        .expect("client");
    client
        .get_currencies(GetCurrenciesRequest::new(Blockchain::Eth))
        .await
        .expect("currencies");

    mock.assert_async().await;
}
