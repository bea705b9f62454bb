// API client module: a small blocking HTTP client for the beta endpoints.
// Each call is a single request/response; in mock mode the call is served
// by `MockBackend` instead and nothing leaves the process.

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::config::{ClientConfig, Endpoints};
use crate::error::{BetaError, Result};
use crate::mock::MockBackend;
use crate::models::{BetaStats, BetaUserCreate, BetaUserResponse, HealthStatus, ValidationReport};
use crate::{share, validation};

/// Client for the beta registration service. Holds a reqwest blocking
/// client, the resolved configuration and the mock backend used when
/// `mock_mode` is set.
#[derive(Clone)]
pub struct BetaClient {
    client: Client,
    config: ClientConfig,
    mock: MockBackend,
}

impl BetaClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("lawvriksh-beta/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BetaError::unexpected(format!("Failed to build HTTP client: {e}")))?;
        Ok(BetaClient {
            client,
            config,
            mock: MockBackend::default(),
        })
    }

    /// Create a client configured from `LAWVRIKSH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Replace the simulated backend (latency, duplicate rate).
    pub fn with_mock_backend(mut self, mock: MockBackend) -> Self {
        self.mock = mock;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock_mode
    }

    /// Register a beta user by POSTing name and email to `/beta/signup`.
    pub fn register_beta_user(&self, user: &BetaUserCreate) -> Result<BetaUserResponse> {
        info!(name = %user.name, email = %user.email, "Beta registration attempt");

        if self.config.mock_mode {
            return log_failure(self.mock.register(user));
        }

        let url = self.config.url(Endpoints::SIGNUP);
        let resp: BetaUserResponse = self.send(self.client.post(&url).json(user))?;
        info!(email = %resp.email, user_id = resp.user_id, "Beta registration successful");
        Ok(resp)
    }

    pub fn get_beta_stats(&self) -> Result<BetaStats> {
        info!("Fetching beta statistics");

        if self.config.mock_mode {
            return Ok(self.mock.stats());
        }

        let url = self.config.url(Endpoints::STATS);
        let stats: BetaStats = self.send(self.client.get(&url))?;
        info!(
            total = stats.total_beta_users,
            last_24h = stats.users_last_24h,
            last_week = stats.users_last_week,
            status = %stats.status,
            "Beta stats retrieved"
        );
        Ok(stats)
    }

    pub fn check_beta_health(&self) -> Result<HealthStatus> {
        info!("Checking beta service health");

        if self.config.mock_mode {
            return Ok(self.mock.health());
        }

        let url = self.config.url(Endpoints::HEALTH);
        let health: HealthStatus = self.send(self.client.get(&url))?;
        info!(status = %health.status, "Beta service health");
        Ok(health)
    }

    pub fn validate_beta_user_input(&self, user: &BetaUserCreate) -> ValidationReport {
        validation::validate_beta_user_input(user)
    }

    pub fn format_user_name(&self, name: &str) -> String {
        validation::format_user_name(name)
    }

    pub fn generate_beta_share_message(&self, user_name: &str) -> String {
        share::generate_beta_share_message(user_name)
    }

    /// Send a request and decode a JSON body, translating every failure
    /// into a `BetaError` and logging it once.
    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        log_failure(Self::execute(req))
    }

    fn execute<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
        let res = req.send()?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(BetaError::from_response(status.as_u16(), &body));
        }
        res.json::<T>()
            .map_err(|e| BetaError::unexpected(format!("Failed to parse server response: {e}")))
    }
}

/// Log a failed call at error level, real or mocked, and pass it through.
fn log_failure<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Beta API error");
    }
    result
}
