//! ExchangeDemo contract ABI.

use alloy_sol_types::sol;

sol! {
    /// Spot exchange precompile wrapper: subaccount deposits and spot limit orders.
    ///
    /// All amounts, prices and quantities are 18-decimal fixed-point integers.
    #[derive(Debug, PartialEq, Eq)]
    interface IExchangeDemo {
        struct SubaccountBalance {
            string denom;
            uint256 amount;
        }

        struct SpotOrder {
            string marketId;
            uint256 price;
            uint256 quantity;
            uint8 orderType;
            string subaccountId;
        }

        function subaccountBalances(string subaccountId) external view returns (SubaccountBalance[] balances);
        function deposit(string subaccountId, string denom, uint256 amount) external;
        function createSpotLimitOrder(SpotOrder order) external returns (string hash);
        function cancelSpotOrder(string subaccountId, string orderHash, string marketId, string clientId) external;
    }
}
