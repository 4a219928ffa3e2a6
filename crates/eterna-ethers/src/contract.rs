use ethers::contract::abigen;

abigen!(
    EternaVerse,
    r"[
        function writePoem(string poem) external

        function getTotalPoems() external view returns (uint256)

        function getPoem(uint256 index) external view returns (address, string, uint256)
    ]"
);
