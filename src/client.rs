//! Async JSON-RPC client for the Ankr multichain API.

use crate::types::*;
use reqwest::Client;
use reqwest::header::{
    CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Endpoint used when none is configured. The API key is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://rpc.ankr.com/multichain/";

/// JSON-RPC request wrapper
#[derive(Debug, Serialize)]
struct RpcRequest<T> {
    method: &'static str,
    params: T,
    id: u64,
    jsonrpc: &'static str,
}

/// JSON-RPC response wrapper
///
/// `result` is kept untyped until `error` has been ruled out, so an error
/// response is reported as such even if it also carries a `result`.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

impl RpcResponse {
    fn into_result<R: DeserializeOwned>(self) -> Result<R> {
        if let Some(error) = self.error {
            return Err(Error::Rpc(error));
        }
        let result = self.result.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(result)?)
    }
}

/// JSON-RPC error returned by the service.
///
/// Displays as the remote `message`. `code` and `data` are passed through
/// unchanged for programmatic inspection.
///
/// ```json
/// { "code": -32602, "message": "invalid params", "data": { "field": "walletAddress" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct RpcError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The remote JSON-RPC error, if this failure came from the service itself.
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(error) => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Builder for [`AnkrClient`].
///
/// ```no_run
/// use ankr_multichain_client::AnkrClient;
///
/// # fn main() -> ankr_multichain_client::client::Result<()> {
/// let client = AnkrClient::builder("my-api-key")
///     .endpoint("https://rpc.ankr.com/multichain/")
///     .header("x-request-source", "indexer")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AnkrClientBuilder {
    api_key: String,
    endpoint: String,
    headers: Vec<(String, String)>,
    http_client: Option<Client>,
}

impl AnkrClientBuilder {
    /// Override the endpoint. The API key is appended to it as-is.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Add a static header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies, pooling).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AnkrClient> {
        let mut headers = json_headers();
        for (name, value) in self.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(&value)?,
            );
        }

        Ok(AnkrClient {
            client: self.http_client.unwrap_or_default(),
            url: format!("{}{}", self.endpoint, self.api_key),
            headers,
            request_id: AtomicU64::new(1),
        })
    }
}

/// Async client for the Ankr multichain JSON-RPC API.
///
/// Each method performs exactly one HTTP POST and consumes one request id,
/// whether or not the call succeeds. Ids start at 1 and are unique per
/// instance, including across concurrent calls.
///
/// Replies are decoded into the expected type without further validation;
/// a reply the service shapes differently surfaces as [`Error::Json`].
///
/// # Example
///
/// ```no_run
/// use ankr_multichain_client::{AnkrClient, types::*};
///
/// #[tokio::main]
/// async fn main() -> ankr_multichain_client::client::Result<()> {
///     let client = AnkrClient::new("my-api-key");
///     let price = client
///         .get_token_price(GetTokenPriceRequest::native(Blockchain::Eth))
///         .await?;
///     println!("ETH: ${}", price.usd_price);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct AnkrClient {
    client: Client,
    url: String,
    headers: HeaderMap,
    request_id: AtomicU64,
}

impl AnkrClient {
    /// Create a client against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a client against a custom endpoint. The target URL is
    /// `endpoint + api_key`, without any escaping.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", endpoint.into(), api_key.into()),
            headers: json_headers(),
            request_id: AtomicU64::new(1),
        }
    }

    pub fn builder(api_key: impl Into<String>) -> AnkrClientBuilder {
        AnkrClientBuilder {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            headers: Vec::new(),
            http_client: None,
        }
    }

    /// The URL every request is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<R> {
        let id = self.next_id();
        let request = RpcRequest {
            method,
            params,
            id,
            jsonrpc: "2.0",
        };
        tracing::debug!(method, id, "sending JSON-RPC request");

        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        // A non-2xx response is only unwrapped when it carries a JSON-RPC error.
        let envelope = match serde_json::from_slice::<RpcResponse>(&body) {
            Ok(envelope) if status.is_success() || envelope.error.is_some() => envelope,
            Err(err) if status.is_success() => return Err(Error::Json(err)),
            _ => {
                return Err(Error::Status {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
        };

        envelope.into_result().inspect_err(|err| {
            if let Error::Rpc(rpc) = err {
                tracing::debug!(method, id, code = ?rpc.code, "JSON-RPC error response");
            }
        })
    }

    // ── Query ────────────────────────────────────────────────────

    /// Returns logs matching a filter, optionally decoded against known ABIs.
    pub async fn get_logs(&self, request: GetLogsRequest) -> Result<GetLogsReply> {
        self.call("ankr_getLogs", request).await
    }

    /// Returns a range of blocks, optionally with transactions and logs.
    pub async fn get_blocks(&self, request: GetBlocksRequest) -> Result<GetBlocksReply> {
        self.call("ankr_getBlocks", request).await
    }

    /// Looks up a transaction by hash on one or more chains.
    pub async fn get_transactions_by_hash(
        &self,
        request: GetTransactionsByHashRequest,
    ) -> Result<GetTransactionsByHashReply> {
        self.call("ankr_getTransactionsByHash", request).await
    }

    /// Returns transactions sent from or to an address.
    pub async fn get_transactions_by_address(
        &self,
        request: GetTransactionsByAddressRequest,
    ) -> Result<GetTransactionsByAddressReply> {
        self.call("ankr_getTransactionsByAddress", request).await
    }

    /// Returns chain statistics such as latest block and native coin price.
    pub async fn get_blockchain_stats(
        &self,
        request: GetBlockchainStatsRequest,
    ) -> Result<GetBlockchainStatsReply> {
        self.call("ankr_getBlockchainStats", request).await
    }

    /// Returns the chains on which an address has any activity.
    pub async fn get_interactions(
        &self,
        request: GetInteractionsRequest,
    ) -> Result<GetInteractionsReply> {
        self.call("ankr_getInteractions", request).await
    }

    // ── Token ────────────────────────────────────────────────────

    /// Returns native and token balances of a wallet.
    pub async fn get_account_balance(
        &self,
        request: GetAccountBalanceRequest,
    ) -> Result<GetAccountBalanceReply> {
        self.call("ankr_getAccountBalance", request).await
    }

    /// Returns the current holders of a token.
    pub async fn get_token_holders(
        &self,
        request: GetTokenHoldersRequest,
    ) -> Result<GetTokenHoldersReply> {
        self.call("ankr_getTokenHolders", request).await
    }

    /// Returns the holder-count history of a token.
    pub async fn get_token_holders_count(
        &self,
        request: GetTokenHoldersCountRequest,
    ) -> Result<GetTokenHoldersCountReply> {
        self.call("ankr_getTokenHoldersCount", request).await
    }

    /// Returns the USD price of a token or the chain's native coin.
    pub async fn get_token_price(
        &self,
        request: GetTokenPriceRequest,
    ) -> Result<GetTokenPriceReply> {
        self.call("ankr_getTokenPrice", request).await
    }

    /// Returns the currencies used on a chain.
    pub async fn get_currencies(
        &self,
        request: GetCurrenciesRequest,
    ) -> Result<GetCurrenciesReply> {
        self.call("ankr_getCurrencies", request).await
    }

    /// Returns token transfers touching an address.
    pub async fn get_token_transfers(
        &self,
        request: GetTransfersRequest,
    ) -> Result<GetTokenTransfersReply> {
        self.call("ankr_getTokenTransfers", request).await
    }

    // ── NFT ──────────────────────────────────────────────────────

    /// Returns the NFTs owned by a wallet.
    pub async fn get_nfts_by_owner(
        &self,
        request: GetNftsByOwnerRequest,
    ) -> Result<GetNftsByOwnerReply> {
        self.call("ankr_getNFTsByOwner", request).await
    }

    /// Returns metadata and attributes of a single NFT.
    pub async fn get_nft_metadata(
        &self,
        request: GetNftMetadataRequest,
    ) -> Result<GetNftMetadataReply> {
        self.call("ankr_getNFTMetadata", request).await
    }

    /// Returns the holders of an NFT collection.
    pub async fn get_nft_holders(
        &self,
        request: GetNftHoldersRequest,
    ) -> Result<GetNftHoldersReply> {
        self.call("ankr_getNFTHolders", request).await
    }

    /// Returns NFT transfers touching an address.
    pub async fn get_nft_transfers(
        &self,
        request: GetTransfersRequest,
    ) -> Result<GetNftTransfersReply> {
        self.call("ankr_getNftTransfers", request).await
    }
}
