//! Request and reply types for every `ankr_*` procedure.
//!
//! These are plain data shapes: the client serializes requests as-is and decodes
//! replies with serde. No client-side validation is applied, so a malformed
//! request is forwarded to the service untouched.
//!
//! Wire names are camelCase. Optional request fields are omitted when `None`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── Shared building blocks ───────────────────────────────────────────

macro_rules! blockchains {
    ($($(#[$meta:meta])* $variant:ident => $wire:literal,)+) => {
        /// A chain identifier understood by the multichain API.
        ///
        /// Chains not known to this crate are kept verbatim in [`Blockchain::Other`]
        /// so they survive a decode/encode cycle.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Blockchain {
            $($(#[$meta])* $variant,)+
            /// Any identifier not listed above.
            Other(String),
        }

        impl Blockchain {
            /// The identifier as sent on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(name) => name,
                }
            }
        }

        impl From<String> for Blockchain {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }
    };
}

blockchains! {
    Arbitrum => "arbitrum",
    Avalanche => "avalanche",
    AvalancheFuji => "avalanche_fuji",
    Base => "base",
    Bsc => "bsc",
    Eth => "eth",
    EthGoerli => "eth_goerli",
    EthHolesky => "eth_holesky",
    EthSepolia => "eth_sepolia",
    Fantom => "fantom",
    Flare => "flare",
    Gnosis => "gnosis",
    Linea => "linea",
    Optimism => "optimism",
    OptimismTestnet => "optimism_testnet",
    Polygon => "polygon",
    PolygonMumbai => "polygon_mumbai",
    PolygonZkevm => "polygon_zkevm",
    Rollux => "rollux",
    Scroll => "scroll",
    Syscoin => "syscoin",
    Telos => "telos",
    Xai => "xai",
    Xlayer => "xlayer",
}

impl From<&str> for Blockchain {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl FromStr for Blockchain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Blockchain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Blockchain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// A field that accepts either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// One chain or several, as accepted by the `blockchain` request field.
pub type BlockchainSelector = OneOrMany<Blockchain>;

/// Symbolic block positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Earliest,
}

/// A block height or a symbolic position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockNumber {
    Number(u64),
    Tag(BlockTag),
}

/// Indexing progress of the backend for a chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    /// Unix time in seconds of the last indexed block.
    pub timestamp: f64,
    pub lag: String,
    pub status: String,
}

// ── Decoded ABI data ─────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub indexed: bool,
    pub size: u32,
    pub value_decoded: String,
}

/// A log decoded against a known contract ABI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub name: String,
    pub inputs: Vec<EventInput>,
    pub anonymous: bool,
    pub string: String,
    pub signature: String,
    pub id: String,
    pub verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u32,
    pub value_decoded: String,
}

/// Transaction input decoded against a known contract ABI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Method {
    pub name: String,
    pub inputs: Vec<MethodInput>,
    pub string: String,
    pub signature: String,
    pub id: String,
    pub verified: bool,
}

// ── Logs / blocks / transactions ─────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub blockchain: Blockchain,
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: String,
    pub transaction_hash: String,
    pub transaction_index: String,
    pub block_hash: String,
    pub log_index: String,
    #[serde(default)]
    pub removed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<OneOrMany<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogsReply {
    #[serde(default)]
    pub logs: Vec<Log>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub blockchain: Blockchain,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub block_number: String,
    pub block_hash: String,
    pub transaction_index: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub value: String,
    pub input: String,
    pub nonce: String,
    pub gas: String,
    pub gas_price: String,
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub cumulative_gas_used: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub v: String,
    #[serde(default)]
    pub r: String,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub logs_bloom: String,
    #[serde(default)]
    pub logs: Vec<Log>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub blockchain: Blockchain,
    pub number: String,
    pub hash: String,
    pub parent_hash: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub mix_hash: String,
    #[serde(default)]
    pub sha3_uncles: String,
    #[serde(default)]
    pub logs_bloom: String,
    #[serde(default)]
    pub state_root: String,
    pub miner: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub total_difficulty: String,
    #[serde(default)]
    pub extra_data: String,
    #[serde(default)]
    pub size: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub timestamp: String,
    #[serde(default)]
    pub transactions_root: String,
    #[serde(default)]
    pub receipts_root: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub uncles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlocksRequest {
    pub blockchain: Blockchain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_txs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_tx_data: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlocksReply {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsByHashRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    pub transaction_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_tx_data: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsByHashReply {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsByAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    pub address: OneOrMany<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsByAddressReply {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

// ── Balances / tokens ────────────────────────────────────────────────

/// One asset held by a wallet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub blockchain: Blockchain,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u32,
    /// `NATIVE` or the token standard, e.g. `ERC20`.
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub holder_address: String,
    /// Human-readable decimal amount.
    pub balance: String,
    /// Integer amount in the token's smallest unit.
    pub balance_raw_integer: String,
    pub balance_usd: String,
    pub token_price: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountBalanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_whitelisted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountBalanceReply {
    pub total_balance_usd: String,
    #[serde(default)]
    pub assets: Vec<Balance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderBalance {
    pub holder_address: String,
    pub balance: String,
    pub balance_raw_integer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenHoldersRequest {
    pub blockchain: Blockchain,
    pub contract_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenHoldersReply {
    pub blockchain: Blockchain,
    pub contract_address: String,
    pub token_decimals: u32,
    #[serde(default)]
    pub holders: Vec<HolderBalance>,
    pub holders_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

/// A point in a token's holder-count history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderCount {
    pub holder_count: u64,
    pub total_amount: String,
    pub total_amount_raw_integer: String,
    /// RFC 3339 timestamp.
    pub last_updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenHoldersCountRequest {
    pub blockchain: Blockchain,
    pub contract_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenHoldersCountReply {
    pub blockchain: Blockchain,
    pub contract_address: String,
    pub token_decimals: u32,
    #[serde(default)]
    pub holder_count_history: Vec<HolderCount>,
    pub latest_holders_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenPriceRequest {
    pub blockchain: Blockchain,
    /// Omit for the chain's native coin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenPriceReply {
    pub blockchain: Blockchain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub usd_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub blockchain: Blockchain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub name: String,
    pub decimals: u32,
    pub symbol: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCurrenciesRequest {
    pub blockchain: Blockchain,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCurrenciesReply {
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransfersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub blockchain: Blockchain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub value: String,
    pub value_raw_integer: String,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u32,
    #[serde(default)]
    pub thumbnail: String,
    pub transaction_hash: String,
    pub block_height: u64,
    pub timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenTransfersReply {
    #[serde(default)]
    pub transfers: Vec<TokenTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

// ── NFTs ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NftContractType {
    #[serde(rename = "ERC721")]
    Erc721,
    #[serde(rename = "ERC1155")]
    Erc1155,
    #[default]
    #[serde(rename = "UNDEFINED", other)]
    Undefined,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(default)]
    pub trait_type: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub blockchain: Blockchain,
    pub name: String,
    pub token_id: String,
    #[serde(default)]
    pub token_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub contract_type: NftContractType,
    pub contract_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    pub traits: Vec<Trait>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftsByOwnerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
    pub wallet_address: String,
    /// Contract address to token-id allow lists; an empty list matches every token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftsByOwnerReply {
    pub owner: String,
    #[serde(default)]
    pub assets: Vec<Nft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftMetadataRequest {
    pub blockchain: Blockchain,
    pub contract_address: String,
    pub token_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_fetch: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadata {
    pub blockchain: Blockchain,
    pub contract_address: String,
    pub token_id: String,
    #[serde(default)]
    pub contract_type: NftContractType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NftAttributes {
    pub contract_type: NftContractType,
    pub token_url: String,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub traits: Vec<Trait>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftMetadataReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NftMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NftAttributes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftHoldersRequest {
    pub blockchain: Blockchain,
    pub contract_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftHoldersReply {
    #[serde(default)]
    pub holders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransfer {
    pub blockchain: Blockchain,
    #[serde(default)]
    pub from_address: String,
    #[serde(default)]
    pub to_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    pub value: String,
    #[serde(rename = "type", default)]
    pub contract_type: NftContractType,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub collection_symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub transaction_hash: String,
    pub block_height: u64,
    pub timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNftTransfersReply {
    #[serde(default)]
    pub transfers: Vec<NftTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}

// ── Chain statistics / interactions ──────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlockchainStatsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<BlockchainSelector>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainStats {
    pub blockchain: Blockchain,
    pub total_transactions_count: u64,
    pub total_events_count: u64,
    pub latest_block_number: u64,
    pub block_time_ms: u64,
    pub native_coin_usd_price: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlockchainStatsReply {
    #[serde(default)]
    pub stats: Vec<BlockchainStats>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInteractionsRequest {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInteractionsReply {
    /// Chains on which the address has any activity.
    #[serde(default)]
    pub blockchains: Vec<Blockchain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<SyncStatus>,
}
