//! Ergonomic constructors for the request types, plus `From` conversions for the
//! shared building blocks so call sites can pass `Blockchain::Eth`, `"0x.."` or
//! `17_000_000` directly.

use crate::types::{
    BlockNumber, BlockTag, Blockchain, BlockchainSelector, GetAccountBalanceRequest,
    GetBlocksRequest, GetCurrenciesRequest, GetInteractionsRequest, GetLogsRequest,
    GetNftHoldersRequest, GetNftMetadataRequest, GetNftsByOwnerRequest,
    GetTokenHoldersCountRequest, GetTokenHoldersRequest, GetTokenPriceRequest,
    GetTransactionsByAddressRequest, GetTransactionsByHashRequest, GetTransfersRequest, OneOrMany,
};

impl From<Blockchain> for BlockchainSelector {
    fn from(value: Blockchain) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Blockchain>> for BlockchainSelector {
    fn from(value: Vec<Blockchain>) -> Self {
        Self::Many(value)
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<BlockTag> for BlockNumber {
    fn from(value: BlockTag) -> Self {
        Self::Tag(value)
    }
}

impl<T> OneOrMany<T> {
    /// Borrow the contained values as a slice, whichever form was used.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl GetLogsRequest {
    /// Logs from `from_block` through `to_block` on the given chain(s).
    pub fn new(
        blockchain: impl Into<BlockchainSelector>,
        from_block: impl Into<BlockNumber>,
        to_block: impl Into<BlockNumber>,
    ) -> Self {
        Self {
            blockchain: Some(blockchain.into()),
            from_block: Some(from_block.into()),
            to_block: Some(to_block.into()),
            ..Default::default()
        }
    }

    /// Restrict to logs emitted by `address`.
    pub fn with_address(mut self, address: impl Into<OneOrMany<String>>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Ask the service to decode logs against known ABIs.
    pub fn decoded(mut self) -> Self {
        self.decode_logs = Some(true);
        self
    }
}

impl GetBlocksRequest {
    /// Blocks `from_block..=to_block` on one chain, without transactions or logs.
    pub fn new(
        blockchain: impl Into<Blockchain>,
        from_block: impl Into<BlockNumber>,
        to_block: impl Into<BlockNumber>,
    ) -> Self {
        Self {
            blockchain: blockchain.into(),
            from_block: Some(from_block.into()),
            to_block: Some(to_block.into()),
            desc_order: None,
            include_logs: None,
            include_txs: None,
            decode_logs: None,
            decode_tx_data: None,
        }
    }

    /// The most recent block on `blockchain`.
    pub fn latest(blockchain: impl Into<Blockchain>) -> Self {
        Self::new(blockchain, BlockTag::Latest, BlockTag::Latest)
    }
}

impl GetTransactionsByHashRequest {
    /// Look a hash up across every supported chain.
    pub fn new(transaction_hash: impl Into<String>) -> Self {
        Self {
            transaction_hash: transaction_hash.into(),
            ..Default::default()
        }
    }
}

impl GetTransactionsByAddressRequest {
    pub fn new(
        blockchain: impl Into<BlockchainSelector>,
        address: impl Into<OneOrMany<String>>,
    ) -> Self {
        Self {
            blockchain: Some(blockchain.into()),
            address: address.into(),
            ..Default::default()
        }
    }
}

impl GetAccountBalanceRequest {
    /// Balances of `wallet_address` on every supported chain.
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            ..Default::default()
        }
    }

    /// Restrict to the given chain(s).
    pub fn on(mut self, blockchain: impl Into<BlockchainSelector>) -> Self {
        self.blockchain = Some(blockchain.into());
        self
    }
}

impl GetNftsByOwnerRequest {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            ..Default::default()
        }
    }

    /// Restrict to the given chain(s).
    pub fn on(mut self, blockchain: impl Into<BlockchainSelector>) -> Self {
        self.blockchain = Some(blockchain.into());
        self
    }
}

impl GetNftMetadataRequest {
    pub fn new(
        blockchain: impl Into<Blockchain>,
        contract_address: impl Into<String>,
        token_id: impl Into<String>,
    ) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: contract_address.into(),
            token_id: token_id.into(),
            force_fetch: None,
        }
    }
}

impl GetNftHoldersRequest {
    pub fn new(blockchain: impl Into<Blockchain>, contract_address: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: contract_address.into(),
            page_token: None,
            page_size: None,
        }
    }
}

impl GetTokenHoldersRequest {
    pub fn new(blockchain: impl Into<Blockchain>, contract_address: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: contract_address.into(),
            page_token: None,
            page_size: None,
        }
    }
}

impl GetTokenHoldersCountRequest {
    pub fn new(blockchain: impl Into<Blockchain>, contract_address: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: contract_address.into(),
            page_token: None,
            page_size: None,
        }
    }
}

impl GetTokenPriceRequest {
    /// Price of the chain's native coin.
    pub fn native(blockchain: impl Into<Blockchain>) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: None,
        }
    }

    /// Price of the token deployed at `contract_address`.
    pub fn token(blockchain: impl Into<Blockchain>, contract_address: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            contract_address: Some(contract_address.into()),
        }
    }
}

impl GetCurrenciesRequest {
    pub fn new(blockchain: impl Into<Blockchain>) -> Self {
        Self {
            blockchain: blockchain.into(),
        }
    }
}

impl GetTransfersRequest {
    /// Transfers touching `address` on the given chain(s).
    pub fn new(
        blockchain: impl Into<BlockchainSelector>,
        address: impl Into<OneOrMany<String>>,
    ) -> Self {
        Self {
            blockchain: Some(blockchain.into()),
            address: Some(address.into()),
            ..Default::default()
        }
    }
}

impl GetInteractionsRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}
