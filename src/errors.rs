// ============================================================
// Error messages
// ============================================================

// ── Initialization ──

pub const ERR_INVALID_TOKEN_DISTRIBUTION: &str = "Invalid token distribution";
pub const ERR_MIN_GREATER_THAN_MAX: &str = "Minimum contribution greater than maximum";
pub const ERR_MAX_TOTAL_ZERO: &str = "Maximum total contributions cannot be zero";
pub const ERR_MIN_TOTAL_ABOVE_MAX_TOTAL: &str =
    "Minimum total contributions greater than maximum";
pub const ERR_INVALID_EXCHANGE_RATE: &str = "Invalid exchange rate";
pub const ERR_INVALID_FUNDING_SPLIT: &str = "Invalid funding split";

// ── Contributions ──

pub const ERR_INVALID_DELEGATE: &str = "Invalid delegate";
pub const ERR_NOT_ALLOWED_BY_GATEKEEPER: &str = "Not allowed by gatekeeper";
pub const ERR_EXISTING_CARD_DISABLED: &str = "Contributing for existing card disabled";
pub const ERR_NOT_OWNER: &str = "Not owner of card";
pub const ERR_BELOW_MIN_CONTRIBUTION: &str = "Below minimum contribution";
pub const ERR_ABOVE_MAX_CONTRIBUTION: &str = "Above maximum contribution";
pub const ERR_ZERO_VOTING_POWER: &str = "Contribution yields zero voting power";
pub const ERR_ARITY_MISMATCH: &str = "Arity mismatch";
pub const ERR_INVALID_MESSAGE_VALUE: &str = "Invalid message value";

// ── Lifecycle ──

pub const ERR_WRONG_LIFECYCLE: &str = "Wrong crowdfund lifecycle";
pub const ERR_ONLY_HOST: &str = "Only a party host can finalize early";
pub const ERR_MIN_TOTAL_NOT_REACHED: &str = "Minimum total contributions not reached";

// ── Refunds ──

pub const ERR_ALREADY_BATCH_REFUNDED: &str = "Token already batch refunded when lost";
pub const ERR_UNKNOWN_CARD: &str = "Card does not exist";

// ── Token launch ──

pub const ERR_TOKEN_ALREADY_LAUNCHED: &str = "Token already launched";
pub const ERR_TOKEN_LAUNCH_NOT_CONFIGURED: &str = "Token launch not configured";

/// Failure of a single refund. Batch paths collect these instead of aborting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RefundError {
    WrongLifecycle,
    UnknownCard,
}

impl RefundError {
    pub fn message(&self) -> &'static str {
        match self {
            RefundError::WrongLifecycle => ERR_WRONG_LIFECYCLE,
            RefundError::UnknownCard => ERR_UNKNOWN_CARD,
        }
    }
}
