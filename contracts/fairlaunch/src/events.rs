use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaiseInitialized {
    pub owner: Address,
    pub token: Address,
    pub window_start: u64,
    pub window_end: u64,
    pub hard_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensReserved {
    pub tokens_for_claiming: i128,
    pub tokens_for_liquidity: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReceived {
    pub depositor: Address,
    pub amount: i128,
    pub depositor_total: i128,
    pub raise_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaiseFinalized {
    pub pool: Address,
    pub native_amount: i128,
    pub token_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaiseCancelled {
    pub owner: Address,
    pub raise_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous: Address,
    pub new_owner: Address,
}

pub fn emit_initialized(
    env: &Env,
    owner: Address,
    token: Address,
    window_start: u64,
    window_end: u64,
    hard_cap: i128,
) {
    let data = RaiseInitialized {
        owner,
        token,
        window_start,
        window_end,
        hard_cap,
    };
    env.events().publish((symbol_short!("init"),), data);
}

pub fn emit_tokens_reserved(env: &Env, tokens_for_claiming: i128, tokens_for_liquidity: i128) {
    let data = TokensReserved {
        tokens_for_claiming,
        tokens_for_liquidity,
    };
    env.events().publish((symbol_short!("reserved"),), data);
}

pub fn emit_deposit(
    env: &Env,
    depositor: Address,
    amount: i128,
    depositor_total: i128,
    raise_total: i128,
) {
    let topics = (symbol_short!("deposit"), depositor.clone());
    let data = DepositReceived {
        depositor,
        amount,
        depositor_total,
        raise_total,
    };
    env.events().publish(topics, data);
}

pub fn emit_finalized(env: &Env, pool: Address, native_amount: i128, token_amount: i128) {
    let data = RaiseFinalized {
        pool,
        native_amount,
        token_amount,
    };
    env.events().publish((symbol_short!("finalize"),), data);
}

pub fn emit_cancelled(env: &Env, owner: Address, raise_total: i128) {
    let data = RaiseCancelled { owner, raise_total };
    env.events().publish((symbol_short!("cancel"),), data);
}

pub fn emit_claimed(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), recipient.clone());
    env.events().publish(topics, Payout { recipient, amount });
}

pub fn emit_refunded(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), recipient.clone());
    env.events().publish(topics, Payout { recipient, amount });
}

pub fn emit_tokens_recovered(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("recover"), recipient.clone());
    env.events().publish(topics, Payout { recipient, amount });
}

pub fn emit_ownership_transferred(env: &Env, previous: Address, new_owner: Address) {
    let data = OwnershipTransferred {
        previous,
        new_owner,
    };
    env.events().publish((symbol_short!("owner"),), data);
}
