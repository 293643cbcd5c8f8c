//! In-test AMM collaborators and the shared fixture used by every test module.
//!
//! `MockFactory` records pairs and can be switched offline. `MockRouter` pulls
//! both sides of the liquidity through `transfer_from`, keeps them, and can be
//! told to fail outright or to report a partial fill.

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::{Error, Fairlaunch, FairlaunchClient, FairlaunchConfig};

// ── Mock factory ────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
enum FactoryKey {
    Pool,
    Offline,
    PairCount,
    Pair(Address, Address),
}

#[contract]
pub struct MockFactory;

#[contractimpl]
impl MockFactory {
    pub fn configure_factory(env: Env, pool: Address) {
        env.storage().instance().set(&FactoryKey::Pool, &pool);
    }

    pub fn set_factory_offline(env: Env, offline: bool) {
        env.storage().instance().set(&FactoryKey::Offline, &offline);
    }

    pub fn pair_count(env: Env) -> u32 {
        env.storage().instance().get(&FactoryKey::PairCount).unwrap_or(0)
    }

    pub fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address {
        if env.storage().instance().get(&FactoryKey::Offline).unwrap_or(false) {
            panic!("factory offline");
        }
        let key = FactoryKey::Pair(token_a, token_b);
        if let Some(pool) = env.storage().instance().get::<_, Address>(&key) {
            return pool;
        }
        let pool: Address = env.storage().instance().get(&FactoryKey::Pool).unwrap();
        let count = Self::pair_count(env.clone());
        env.storage().instance().set(&FactoryKey::PairCount, &(count + 1));
        env.storage().instance().set(&key, &pool);
        pool
    }
}

// ── Mock router ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
enum RouterKey {
    Native,
    Fail,
    ShortFill,
    Lp(Address),
}

#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn configure_router(env: Env, native: Address) {
        env.storage().instance().set(&RouterKey::Native, &native);
    }

    pub fn set_router_fail(env: Env, fail: bool) {
        env.storage().instance().set(&RouterKey::Fail, &fail);
    }

    pub fn set_short_fill(env: Env, short: bool) {
        env.storage().instance().set(&RouterKey::ShortFill, &short);
    }

    pub fn lp_balance(env: Env, owner: Address) -> i128 {
        env.storage().instance().get(&RouterKey::Lp(owner)).unwrap_or(0)
    }

    pub fn add_liquidity_eth(
        env: Env,
        from: Address,
        token: Address,
        amount_token_desired: i128,
        amount_token_min: i128,
        amount_native_desired: i128,
        amount_native_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128) {
        if env.storage().instance().get(&RouterKey::Fail).unwrap_or(false) {
            panic!("router rejected liquidity");
        }
        if env.ledger().timestamp() > deadline {
            panic!("expired");
        }
        assert!(amount_token_min <= amount_token_desired);
        assert!(amount_native_min <= amount_native_desired);

        let this = env.current_contract_address();
        let native: Address = env.storage().instance().get(&RouterKey::Native).unwrap();
        token::Client::new(&env, &token).transfer_from(&this, &from, &this, &amount_token_desired);
        token::Client::new(&env, &native).transfer_from(
            &this,
            &from,
            &this,
            &amount_native_desired,
        );

        let liquidity = amount_native_desired;
        let held = Self::lp_balance(env.clone(), to.clone());
        env.storage().instance().set(&RouterKey::Lp(to), &(held + liquidity));

        if env.storage().instance().get(&RouterKey::ShortFill).unwrap_or(false) {
            return (amount_token_desired - 1, amount_native_desired, liquidity);
        }
        (amount_token_desired, amount_native_desired, liquidity)
    }
}

// ── Shared fixture ──────────────────────────────────────────────────

/// 7-decimal minimal units per whole currency unit.
pub const UNIT: i128 = 10_000_000;
pub const GENESIS: u64 = 900;
pub const WINDOW_START: u64 = 1_000;
pub const WINDOW_END: u64 = WINDOW_START + 120;
pub const MIN_DEPOSIT: i128 = UNIT / 1_000;
pub const HARD_CAP: i128 = 10 * UNIT;
pub const CLAIM_TOKENS: i128 = 300 * UNIT;
pub const LIQUIDITY_TOKENS: i128 = 250 * UNIT;

/// Host-level form of a contract error, as returned by the `try_` client
/// methods.
pub fn err(e: Error) -> soroban_sdk::Error {
    e.into()
}

pub struct Harness {
    pub env: Env,
    pub client: FairlaunchClient<'static>,
    pub owner: Address,
    pub token: token::Client<'static>,
    pub token_sac: token::StellarAssetClient<'static>,
    pub native: token::Client<'static>,
    pub native_sac: token::StellarAssetClient<'static>,
    pub factory: MockFactoryClient<'static>,
    pub router: MockRouterClient<'static>,
    pub pool: Address,
}

impl Harness {
    /// Deployed contract with default config; not initialised.
    pub fn deployed() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(GENESIS);

        let contract_id = env.register(Fairlaunch, ());
        let client = FairlaunchClient::new(&env, &contract_id);
        let owner = Address::generate(&env);

        let token_addr = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let native_addr = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let factory = MockFactoryClient::new(&env, &env.register(MockFactory, ()));
        let router = MockRouterClient::new(&env, &env.register(MockRouter, ()));
        let pool = Address::generate(&env);
        factory.configure_factory(&pool);
        router.configure_router(&native_addr);

        Harness {
            client,
            owner,
            token: token::Client::new(&env, &token_addr),
            token_sac: token::StellarAssetClient::new(&env, &token_addr),
            native: token::Client::new(&env, &native_addr),
            native_sac: token::StellarAssetClient::new(&env, &native_addr),
            factory,
            router,
            pool,
            env,
        }
    }

    /// Initialised contract in `Created`.
    pub fn new() -> Self {
        let h = Self::deployed();
        h.client.init(&h.owner, &h.config());
        h
    }

    /// Initialised and funded with the default reserves, in `Funded`.
    pub fn funded() -> Self {
        let h = Self::new();
        h.fund(CLAIM_TOKENS, LIQUIDITY_TOKENS);
        h
    }

    /// Funded and moved to the start of the window, in `Open`.
    pub fn open() -> Self {
        let h = Self::funded();
        h.set_time(WINDOW_START);
        h
    }

    pub fn config(&self) -> FairlaunchConfig {
        FairlaunchConfig {
            window_start: WINDOW_START,
            window_end: WINDOW_END,
            min_deposit: MIN_DEPOSIT,
            hard_cap: HARD_CAP,
            token: self.token.address.clone(),
            quote_asset: self.native.address.clone(),
            amm_factory: self.factory.address.clone(),
            amm_router: self.router.address.clone(),
        }
    }

    pub fn fund(&self, claim: i128, liquidity: i128) {
        self.token_sac.mint(&self.client.address, &(claim + liquidity));
        self.client.reserve_tokens(&self.owner, &claim, &liquidity);
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// A fresh participant holding `balance` of the native asset.
    pub fn participant(&self, balance: i128) -> Address {
        let who = Address::generate(&self.env);
        self.native_sac.mint(&who, &balance);
        who
    }

    /// A fresh participant that has deposited `amount`.
    pub fn depositor(&self, amount: i128) -> Address {
        let who = self.participant(amount);
        self.client.deposit(&who, &amount);
        who
    }
}
