//! Compiled-in mainnet topology
//!
//! Chain IDs, contract deployments, pool memberships and network-pair
//! restrictions for the production bridge. Callers needing a different
//! topology load their own [`crate::RegistryConfig`] instead.

use crate::{group::PoolGroup, Registry};
use bridge_types::{Asset, Network};

/// Well-known chain IDs
pub mod chains {
	pub const ETHEREUM: u64 = 1;
	pub const OPTIMISM: u64 = 10;
	pub const BSC: u64 = 56;
	pub const POLYGON: u64 = 137;
	pub const FANTOM: u64 = 250;
	pub const BOBA: u64 = 288;
	pub const MOONRIVER: u64 = 1285;
	pub const ARBITRUM: u64 = 42161;
	pub const AVALANCHE: u64 = 43114;
	pub const AURORA: u64 = 1313161554;
}

const NUSD_POOL: &str = "nusd-pool";
const NETH_POOL: &str = "neth-pool";

fn networks() -> Vec<Network> {
	use chains::*;
	vec![
		Network::new(
			ETHEREUM,
			"Ethereum",
			"0x2796317b0fF8538F253012862c06787Adfb8cEb6",
			"0x6571d6be3d8460CF5F7d6711Cd9961860029D85F",
		)
		.with_wrap_pair("ETH", "WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
		Network::new(
			OPTIMISM,
			"Optimism",
			"0xAf41a65F786339e7911F4acDAD6BD49426F2Dc6b",
			"0x470f9522ff620eE45DF86C58E54E6A645fE3b4A7",
		)
		.with_wrap_pair("ETH", "WETH", "0x121ab82b49B2BC4c7901CA46B8277962b4350204"),
		Network::new(
			BSC,
			"BSC",
			"0xd123f70AE324d34A9E76b67a27bf77593bA8749f",
			"0x749F37Df06A99D6A8E065dd065f8cF947ca23697",
		),
		Network::new(
			POLYGON,
			"Polygon",
			"0x8F5BBB2BB8c2Ee94639E55d5F41de9b4839C1280",
			"0x1c6aE197fF4BF7BA96c66C5FD64Cb22450aF9cC8",
		),
		Network::new(
			FANTOM,
			"Fantom",
			"0xAf41a65F786339e7911F4acDAD6BD49426F2Dc6b",
			"0xB003e75f7E0B5365e814302192E99b4EE08c0DEd",
		),
		Network::new(
			BOBA,
			"Boba",
			"0x432036208d2717394d2614d6697c46DF3Ed69540",
			"0x64B4097bCCD27D49BC2A081984C39C3EeC427a2d",
		)
		.with_wrap_pair("ETH", "WETH", "0xd203De32170130082896b4111eDF825a4774c18E"),
		Network::new(
			MOONRIVER,
			"Moonriver",
			"0xaeD5b25BE1c3163c907a471082640450F928DDFE",
			"0xfA28DdB74b08B2b6430f5F61A1Dd5104268CC29e",
		),
		Network::new(
			ARBITRUM,
			"Arbitrum",
			"0x6F4e8eBa4D337f874Ab57478AcC2Cb5BACdc19c9",
			"0x37f9aE2e0Ea6742b9CAD5AbCfB6bBC3475b3862B",
		)
		.with_wrap_pair("ETH", "WETH", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
		Network::new(
			AVALANCHE,
			"Avalanche",
			"0xC05e61d0E7a63D27546389B7aD62FdFf5A91aACE",
			"0xE85429C97589AD793Ca11A8BC3477C03d27ED140",
		),
		Network::new(
			AURORA,
			"Aurora",
			"0xaeD5b25BE1c3163c907a471082640450F928DDFE",
			"0x2D8Ee8d6951cB4Eecfe4a79eb9C2F973C02596Ed",
		),
	]
}

fn assets() -> Vec<Asset> {
	use chains::*;
	vec![
		Asset::new("DAI", "Dai Stablecoin", 18)
			.on_chain_in_group(ETHEREUM, "0x6B175474E89094C44Da98b954EedeAC495271d0F", NUSD_POOL)
			.on_chain_in_group(BSC, "0x1AF3F329e8BE154074D8769D1FFa4eE058B1DBc3", NUSD_POOL)
			.on_chain_in_group(POLYGON, "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063", NUSD_POOL)
			.on_chain_in_group(BOBA, "0xf74195Bb8a5cf652411867c5C2C5b8C2a402be35", NUSD_POOL)
			.on_chain_in_group(AVALANCHE, "0xd586E7F844cEa2F87f50152665BCbc2C279D8d70", NUSD_POOL),
		Asset::new("USDC", "USD Coin", 6)
			.on_chain_in_group(ETHEREUM, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", NUSD_POOL)
			.on_chain_in_group(BSC, "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d", NUSD_POOL)
			.on_chain_in_group(POLYGON, "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", NUSD_POOL)
			.on_chain_in_group(FANTOM, "0x04068DA6C83AFCFA0e13ba15A6696662335D5B75", NUSD_POOL)
			.on_chain_in_group(BOBA, "0x66a2A913e447d6b4BF33EFbec43aAeF87890FBbc", NUSD_POOL)
			.on_chain_in_group(ARBITRUM, "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8", NUSD_POOL)
			.on_chain_in_group(AVALANCHE, "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E", NUSD_POOL)
			.on_chain_in_group(AURORA, "0xB12BFcA5A55806AaF64E99521918A4bf0fC40802", NUSD_POOL),
		Asset::new("USDT", "Tether USD", 6)
			.on_chain_in_group(ETHEREUM, "0xdAC17F958D2ee523a2206206994597C13D831ec7", NUSD_POOL)
			.on_chain_in_group(BSC, "0x55d398326f99059fF775485246999027B3197955", NUSD_POOL)
			.on_chain_in_group(POLYGON, "0xc2132D05D31c914a87C6611C10748AEb04B58e8F", NUSD_POOL)
			.on_chain_in_group(FANTOM, "0x049d68029688eAbF473097a2fC38ef61633A3C7A", NUSD_POOL)
			.on_chain_in_group(BOBA, "0x5DE1677344D3Cb0D7D465c10b72A8f60699C062d", NUSD_POOL)
			.on_chain_in_group(ARBITRUM, "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9", NUSD_POOL)
			.on_chain_in_group(AVALANCHE, "0xc7198437980c041c805A1EDcbA50c1Ce5db95118", NUSD_POOL)
			.on_chain_in_group(AURORA, "0x4988a896b1227218e4A686fdE5EabdcAbd91571f", NUSD_POOL),
		Asset::new("nUSD", "Bridge USD", 18)
			.with_home_chain(ETHEREUM)
			.on_chain_in_group(ETHEREUM, "0x1B84765dE8B7566e4cEAF4D0fD3c5aF52D3DdE4F", NUSD_POOL)
			.on_chain_in_group(BSC, "0x23b891e5C62E0955ae2bD185990103928Ab817b3", NUSD_POOL)
			.on_chain_in_group(POLYGON, "0xB6c473756050dE474286bED418B77Aeac39B02aF", NUSD_POOL)
			.on_chain_in_group(FANTOM, "0xED2a7edd7413021d440b09D654f3b87712abAB66", NUSD_POOL)
			.on_chain_in_group(BOBA, "0x6B4712AE9797C199edd44F897cA09BC57628a1CF", NUSD_POOL)
			.on_chain_in_group(ARBITRUM, "0x2913E812Cf0dcCA30FB28E6Cac3d2DCFF4497688", NUSD_POOL)
			.on_chain_in_group(AVALANCHE, "0xCFc37A6AB183dd4aED08C204D1c2773c0b1BDf46", NUSD_POOL)
			.on_chain_in_group(AURORA, "0x07379565cD8B0CaE7c60Dc78e7f601b34AF2A21c", NUSD_POOL),
		Asset::new("MIM", "Magic Internet Money", 18).on_chain_in_group(
			FANTOM,
			"0x82f0B8B456c1A451378467398982d4834b6829c1",
			NUSD_POOL,
		),
		Asset::new("ETH", "Ether", 18)
			.native()
			.on_chain_in_group(ETHEREUM, "0x0000000000000000000000000000000000000000", NETH_POOL)
			.on_chain_in_group(OPTIMISM, "0x0000000000000000000000000000000000000000", NETH_POOL)
			.on_chain_in_group(BOBA, "0x0000000000000000000000000000000000000000", NETH_POOL)
			.on_chain_in_group(ARBITRUM, "0x0000000000000000000000000000000000000000", NETH_POOL),
		Asset::new("WETH", "Wrapped Ether", 18)
			.on_chain_in_group(ETHEREUM, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", NETH_POOL)
			.on_chain_in_group(OPTIMISM, "0x121ab82b49B2BC4c7901CA46B8277962b4350204", NETH_POOL)
			.on_chain_in_group(BOBA, "0xd203De32170130082896b4111eDF825a4774c18E", NETH_POOL)
			.on_chain_in_group(ARBITRUM, "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1", NETH_POOL),
		Asset::new("nETH", "Bridge ETH", 18)
			.with_home_chain(ETHEREUM)
			.on_chain_in_group(ETHEREUM, "0x0Db66c48CcFcA6D53B322bA12E0C0532A9a5bb9C", NETH_POOL)
			.on_chain_in_group(OPTIMISM, "0x809DC529f07651bD43A172e8dB6f4a7a0d771036", NETH_POOL)
			.on_chain_in_group(BOBA, "0x96419929d7949D6A801A6909c145C8EEf6A40431", NETH_POOL)
			.on_chain_in_group(ARBITRUM, "0x3ea9B0ab55F34Fb188824Ee288CeaEfC63cf908e", NETH_POOL)
			.on_chain_in_group(AVALANCHE, "0x19E1ae0eE35c0404f835521146206595d37981ae", NETH_POOL),
		Asset::new("WETH.e", "Wrapped Ether (Avalanche)", 18).on_chain_in_group(
			AVALANCHE,
			"0x49D5c2BdFfac6CE2BFdB6640F4F80f226bc10bAB",
			NETH_POOL,
		),
		Asset::new("SYN", "SYN Token", 18)
			.with_home_chain(ETHEREUM)
			.on_chain(ETHEREUM, "0x0f2D719407FdBeFF09D87557AbB7232601FD9F29")
			.on_chain(OPTIMISM, "0x5A5fFf6F753d7C11A56A52FE47a177a87e431655")
			.on_chain(BSC, "0xa4080f1778e69467E905B8d6F72f6e441f9e9484")
			.on_chain(POLYGON, "0xf8F9efC0db77d8881500bb06FF5D6ABc3070E695")
			.on_chain(FANTOM, "0xE55e19Fb4F2D85af758950957714292DAC1e25B2")
			.on_chain(BOBA, "0xb554A55358fF0382Fb21F0a478C3546d1106Be8c")
			.on_chain(MOONRIVER, "0xd80d8688b02B3FD3afb81cDb124F188BB5aD0445")
			.on_chain(ARBITRUM, "0x080F6AEd32Fc474DD5717105Dba5ea57268F46eb")
			.on_chain(AVALANCHE, "0x1f1E7c893855525b303f99bDF5c3c05Be09ca251")
			.on_chain(AURORA, "0xd80d8688b02B3FD3afb81cDb124F188BB5aD0445"),
		Asset::new("FRAX", "Frax", 18)
			.with_home_chain(ETHEREUM)
			.on_chain(ETHEREUM, "0x853d955aCEf822Db058eb8505911ED77F175b99e")
			.on_chain(MOONRIVER, "0x1A93B23281CC1CDE4C4741353F3064709A16197d"),
		Asset::new("gOHM", "Governance OHM", 18)
			.with_home_chain(ETHEREUM)
			.on_chain(ETHEREUM, "0x0ab87046fBb341D058F17CBC4c1133F25a20a52f")
			.on_chain(POLYGON, "0xd8cA34fd379d9ca3C6Ee3b3905678320F5b45195")
			.on_chain(FANTOM, "0x91fa20244Fb509e8289CA630E5db3E9166233FDc")
			.on_chain(ARBITRUM, "0x8D9bA570D6cb60C7e3e0F31343Efe75AB8E65FB1")
			.on_chain(AVALANCHE, "0x321E7092a180BB43555132ec53AaA65a5bF84251"),
		Asset::new("DOG", "The Doge NFT", 18)
			.with_home_chain(ETHEREUM)
			.on_chain(ETHEREUM, "0xBAac2B4491727D78D2b78815144570b9f2Fe8899")
			.on_chain(BSC, "0xaA88C603d142C371eA0eAC8756123c5805EdeE03")
			.on_chain(POLYGON, "0xeEe3371B89FC43Ea970E908536Fcddd975135D8a"),
		Asset::new("JUMP", "HyperJump", 18)
			.with_home_chain(FANTOM)
			.on_chain(FANTOM, "0x78DE9326792ce1d6eCA0c978753c6953Cdeedd73")
			.on_chain(BSC, "0x130025eE738A66E691E6A7a62381CB33c6d9Ae83"),
	]
}

fn pool_groups() -> Vec<PoolGroup> {
	use chains::*;
	let nusd = |chain_id: u64, members: Vec<&str>| PoolGroup::new(NUSD_POOL, chain_id, members);
	let neth = |chain_id: u64, members: Vec<&str>| PoolGroup::new(NETH_POOL, chain_id, members);
	vec![
		nusd(ETHEREUM, vec!["nUSD", "DAI", "USDC", "USDT"]),
		nusd(BSC, vec!["nUSD", "DAI", "USDC", "USDT"]),
		nusd(POLYGON, vec!["nUSD", "DAI", "USDC", "USDT"]),
		nusd(FANTOM, vec!["nUSD", "MIM", "USDC", "USDT"]),
		nusd(BOBA, vec!["nUSD", "DAI", "USDC", "USDT"]),
		nusd(ARBITRUM, vec!["nUSD", "USDC", "USDT"]),
		nusd(AVALANCHE, vec!["nUSD", "DAI", "USDC", "USDT"]),
		nusd(AURORA, vec!["nUSD", "USDC", "USDT"]),
		neth(ETHEREUM, vec!["nETH", "ETH", "WETH"]),
		neth(OPTIMISM, vec!["nETH", "ETH", "WETH"]),
		neth(BOBA, vec!["nETH", "ETH", "WETH"]),
		neth(ARBITRUM, vec!["nETH", "ETH", "WETH"]),
		neth(AVALANCHE, vec!["nETH", "WETH.e"]),
	]
}

fn bridge_tokens() -> Vec<String> {
	["nUSD", "nETH", "SYN", "FRAX", "gOHM", "DOG", "JUMP"]
		.into_iter()
		.map(String::from)
		.collect()
}

/// Boba's bridge accepts only the stable and protocol-token legs to
/// and from Ethereum; the ether leg is disabled on that pair.
fn restrictions() -> Vec<((u64, u64), Vec<String>)> {
	use chains::*;
	let boba_allowed = || vec!["nUSD".to_string(), "SYN".to_string()];
	vec![
		((ETHEREUM, BOBA), boba_allowed()),
		((BOBA, ETHEREUM), boba_allowed()),
	]
}

/// The production topology
///
/// Compiled-in data is validated like any other registry source; a
/// failure here is a build-time configuration bug, so aborting is the
/// correct response.
pub fn mainnet() -> Registry {
	Registry::new(
		networks(),
		assets(),
		pool_groups(),
		bridge_tokens(),
		restrictions(),
	)
	.expect("compiled-in mainnet topology must be internally consistent")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mainnet_topology_is_consistent() {
		let registry = mainnet();
		assert!(registry.network(chains::ETHEREUM).is_ok());
		assert!(registry.network(chains::AURORA).is_ok());
	}

	#[test]
	fn test_every_group_has_a_deployed_primary() {
		let registry = mainnet();
		for chain in [
			chains::ETHEREUM,
			chains::BSC,
			chains::POLYGON,
			chains::FANTOM,
			chains::BOBA,
			chains::ARBITRUM,
			chains::AVALANCHE,
			chains::AURORA,
		] {
			let group = registry.pool_group("nUSD", chain).unwrap();
			let primary = group.primary().unwrap();
			assert!(registry.is_bridge_token(primary));
			assert!(registry.address_of(primary, chain).is_some());
		}
	}

	#[test]
	fn test_wrap_pairs_present_on_ether_chains() {
		let registry = mainnet();
		for chain in [chains::ETHEREUM, chains::OPTIMISM, chains::BOBA, chains::ARBITRUM] {
			assert!(registry.wrap_pair_of(chain).is_some(), "chain {chain}");
		}
		assert!(registry.wrap_pair_of(chains::BSC).is_none());
	}

	#[test]
	fn test_boba_ether_leg_is_restricted() {
		let registry = mainnet();
		assert!(!registry.pair_allows(chains::ETHEREUM, chains::BOBA, "nETH"));
		assert!(registry.pair_allows(chains::ETHEREUM, chains::BOBA, "nUSD"));
		assert!(registry.pair_allows(chains::ETHEREUM, chains::OPTIMISM, "nETH"));
	}
}
