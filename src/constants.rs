pub const LOG_FILTER: &str = "RUST_LOG";
pub const HUMAN_LOGGING: &str = "HUMAN_LOGGING";
pub const SERVICE_PORT: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3333;
pub const DAEMON_HOST: &str = "DAEMON_HOST";
pub const DEFAULT_DAEMON_HOST: &str = "127.0.0.1";
pub const DAEMON_PORT: &str = "DAEMON_PORT";
pub const DEFAULT_DAEMON_PORT: u16 = 51925;
pub const DAEMON_USER: &str = "DAEMON_USER";
pub const DEFAULT_DAEMON_USER: &str = "user";
pub const DAEMON_PASSWORD: &str = "DAEMON_PASSWORD";
pub const DEFAULT_DAEMON_PASSWORD: &str = "pass";
pub const DAEMON_USE_TLS: &str = "DAEMON_USE_TLS";
pub const DISPENSE_AMOUNT: &str = "DISPENSE_AMOUNT";
pub const DEFAULT_DISPENSE_AMOUNT: u64 = 50;
pub const STATS_TOTAL_SENT: &str = "STATS_TOTAL_SENT";
/// Reported as `totalsent` on the stats route. Not derived from payout history.
pub const DEFAULT_STATS_TOTAL_SENT: u64 = 100;
pub const TIMEOUT_SECONDS: &str = "TIMEOUT_SECONDS";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const CORS_ENABLED: &str = "CORS_ENABLED";

// Daemon RPC

/// Memo attached to every payout transaction.
pub const PAYOUT_COMMENT: &str = "faucet payout";
/// Account wildcard used when asking the daemon for its balance.
pub const BALANCE_ACCOUNT: &str = "*";
pub const BALANCE_MIN_CONFIRMATIONS: u32 = 0;
pub const RPC_CLIENT_ID: &str = "coin-faucet";

// Response messages

pub const NO_ADDRESS_FOUND: &str = "No address found";
pub const INVALID_ADDRESS_GIVEN: &str = "Invalid address given";
pub const DAEMON_UNAVAILABLE: &str = "Failed to communicate with the ledger daemon";
