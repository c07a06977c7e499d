use crate::constants::{
    CORS_ENABLED, DAEMON_HOST, DAEMON_PASSWORD, DAEMON_PORT, DAEMON_USER, DAEMON_USE_TLS,
    DEFAULT_DAEMON_HOST, DEFAULT_DAEMON_PASSWORD, DEFAULT_DAEMON_PORT, DEFAULT_DAEMON_USER,
    DEFAULT_DISPENSE_AMOUNT, DEFAULT_PORT, DEFAULT_STATS_TOTAL_SENT, DEFAULT_TIMEOUT_SECONDS,
    DISPENSE_AMOUNT, HUMAN_LOGGING, LOG_FILTER, SERVICE_PORT, STATS_TOTAL_SENT, TIMEOUT_SECONDS,
};
use secrecy::Secret;
use std::{env, str::FromStr, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub human_logging: bool,
    pub service_port: u16,
    pub daemon_host: String,
    pub daemon_port: u16,
    pub daemon_user: String,
    pub daemon_password: Secret<String>,
    pub daemon_use_tls: bool,
    pub dispense_amount: u64,
    pub stats_total_sent: u64,
    /// Upper bound, in seconds, for every single daemon RPC.
    pub timeout: u64,
    pub cors_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: env::var(LOG_FILTER).unwrap_or_default(),
            human_logging: parse_bool(HUMAN_LOGGING, true),
            service_port: parse_number(SERVICE_PORT, DEFAULT_PORT),
            daemon_host: env::var(DAEMON_HOST).unwrap_or_else(|_| DEFAULT_DAEMON_HOST.to_string()),
            daemon_port: parse_number(DAEMON_PORT, DEFAULT_DAEMON_PORT),
            daemon_user: env::var(DAEMON_USER).unwrap_or_else(|_| DEFAULT_DAEMON_USER.to_string()),
            daemon_password: Secret::new(
                env::var(DAEMON_PASSWORD).unwrap_or_else(|_| DEFAULT_DAEMON_PASSWORD.to_string()),
            ),
            daemon_use_tls: parse_bool(DAEMON_USE_TLS, false),
            dispense_amount: nonzero(
                DISPENSE_AMOUNT,
                parse_number(DISPENSE_AMOUNT, DEFAULT_DISPENSE_AMOUNT),
            ),
            stats_total_sent: parse_number(STATS_TOTAL_SENT, DEFAULT_STATS_TOTAL_SENT),
            timeout: parse_number(TIMEOUT_SECONDS, DEFAULT_TIMEOUT_SECONDS),
            cors_enabled: parse_bool(CORS_ENABLED, true),
        }
    }
}

impl Config {
    pub fn daemon_url(&self) -> String {
        let scheme = if self.daemon_use_tls { "https" } else { "http" };
        format!("{}://{}:{}/", scheme, self.daemon_host, self.daemon_port)
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn parse_bool(env_var: &str, default: bool) -> bool {
    env::var_os(env_var)
        .map(|s| {
            s.to_str().unwrap_or_default().parse().unwrap_or_else(|_| {
                panic!(
                    "Expected `true` or `false` to be provided for `{}`",
                    env_var
                )
            })
        })
        .unwrap_or(default)
}

fn parse_number<T: FromStr>(env_var: &str, default: T) -> T {
    match env::var(env_var) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("expected a valid integer for {}", env_var)),
        Err(_) => default,
    }
}

fn nonzero(env_var: &str, value: u64) -> u64 {
    if value == 0 {
        panic!("expected a value greater than zero for {}", env_var);
    }
    value
}
