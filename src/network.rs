//! Network and deployment constants for the ExchangeDemo contract.

/// Default ExchangeDemo contract address.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x2fEc4a9029DFB413465a55Af45242b2548257BDA";

/// Default spot market (INJ/USDT).
pub const DEFAULT_MARKET_ID: &str =
    "0x0611780ba69656949525013d947713300f56c37b6175e02f26bffa495c3208fe";

/// Default JSON-RPC endpoint (local node).
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Display label for the default market.
pub const DEFAULT_MARKET_LABEL: &str = "INJ/USDT";
