// Access
pub const ERR_NOT_AUTHORIZED: &str = "Not authorized";
pub const ERR_VOTING_PAUSED: &str = "Voting is paused";
pub const ERR_ALREADY_PAUSED: &str = "Voting already paused";
pub const ERR_NOT_PAUSED: &str = "Voting is not paused";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_TOKEN_REQUIRED: &str = "Governance token required";
pub const ERR_NO_PENDING_TRANSFER: &str = "No pending ownership transfer";

// Token ledger
pub const ERR_WRONG_TOKEN: &str = "Wrong payment token";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient locked balance";

// Lifecycle
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_INVALID_STATE: &str = "Invalid proposal state";
pub const ERR_EXPIRED: &str = "Voting period has expired";
pub const ERR_NOT_YET_EXPIRED: &str = "Voting period has not ended";
pub const ERR_QUORUM_NOT_REACHED: &str = "Quorum not reached";

// Voter ledger
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_NOT_ELIGIBLE: &str = "Not an eligible voter";
pub const ERR_POWER_EXCEEDED: &str = "Voting power exceeded";

// Registry uniqueness and input
pub const ERR_DUPLICATE_COMMITMENT: &str = "Commitment hash already won";
pub const ERR_NAME_IN_USE: &str = "Proposal name already in use";
pub const ERR_TOO_MANY_VOTERS: &str = "Too many voters";
pub const ERR_EMPTY_NAME: &str = "Empty proposal name";
pub const ERR_DEADLINE_OVERFLOW: &str = "Voting deadline overflow";
