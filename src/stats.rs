use crate::{
    config::Config,
    constants::{BALANCE_ACCOUNT, BALANCE_MIN_CONFIRMATIONS},
    daemon::{with_timeout, DaemonError},
    models::StatsResponse,
    SharedDaemon,
};
use std::time::Duration;

pub struct StatsReporter {
    daemon: SharedDaemon,
    total_sent: u64,
    timeout: Duration,
}

impl StatsReporter {
    pub fn new(daemon: SharedDaemon, config: &Config) -> Self {
        Self {
            daemon,
            total_sent: config.stats_total_sent,
            timeout: config.rpc_timeout(),
        }
    }

    /// Reads the daemon's balance across all accounts and its block height.
    /// `totalsent` is the configured value, not a running count.
    pub async fn get_stats(&self) -> Result<StatsResponse, DaemonError> {
        let balance = with_timeout(
            "getbalance",
            self.timeout,
            self.daemon
                .get_balance(BALANCE_ACCOUNT, BALANCE_MIN_CONFIRMATIONS),
        )
        .await?;
        let blocks = with_timeout("getblockcount", self.timeout, self.daemon.get_block_count())
            .await?;

        Ok(StatsResponse {
            balance,
            blocks,
            totalsent: self.total_sent,
        })
    }
}
