//! Smart contract bindings.

use alloy::sol;

// ERC-20 token interface, used by the demo's token-read path and tests.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
    }
}
