use crate::{
    config::Config,
    constants::{INVALID_ADDRESS_GIVEN, NO_ADDRESS_FOUND, PAYOUT_COMMENT},
    daemon::{with_timeout, DaemonError},
    models::{DispenseInput, DispenseResponse},
    SharedDaemon,
};
use std::time::Duration;
use tracing::info;

/// Turns an untrusted address into either a payout or a rejection.
///
/// Repeated requests for the same address are each paid out; there is no
/// record of earlier dispenses.
pub struct AddressDispenser {
    daemon: SharedDaemon,
    payout_amount: u64,
    timeout: Duration,
}

impl AddressDispenser {
    pub fn new(daemon: SharedDaemon, config: &Config) -> Self {
        Self {
            daemon,
            payout_amount: config.dispense_amount,
            timeout: config.rpc_timeout(),
        }
    }

    /// Rejections are returned as `Ok` with the `error` field set; only a
    /// failure to talk to the daemon is an `Err`.
    pub async fn dispense(&self, input: DispenseInput) -> Result<DispenseResponse, DaemonError> {
        let address = match input.address.as_deref() {
            Some(address) if !address.is_empty() => address,
            _ => return Ok(DispenseResponse::rejected(NO_ADDRESS_FOUND)),
        };
        info!("dispense requested for {}", address);

        let is_valid = with_timeout(
            "validateaddress",
            self.timeout,
            self.daemon.validate_address(address),
        )
        .await?;
        if !is_valid {
            return Ok(DispenseResponse::rejected(INVALID_ADDRESS_GIVEN));
        }

        info!("sending {} to {}", self.payout_amount, address);
        let txid = with_timeout(
            "sendtoaddress",
            self.timeout,
            self.daemon.send_to_address(
                address,
                self.payout_amount as f64,
                PAYOUT_COMMENT,
                address,
            ),
        )
        .await?;
        if txid.is_empty() {
            return Err(DaemonError::Protocol(
                "`sendtoaddress` returned an empty transaction id".to_string(),
            ));
        }

        Ok(DispenseResponse::sent(txid, self.payout_amount))
    }
}
