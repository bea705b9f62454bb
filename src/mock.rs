// In-process stand-in for the beta backend, used when mock mode is on so
// the CLI can be demoed without a server.

use std::thread;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use tracing::info;

use crate::error::{BetaError, Result};
use crate::models::{BetaStats, BetaUserCreate, BetaUserResponse, HealthStatus};

pub const WELCOME_MESSAGE: &str =
    "Welcome to LawVriksh Beta! Check your email for login credentials.";
pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "Email already registered. If you're already a member, please use the login page.";
pub const DEFAULT_DUPLICATE_PROBABILITY: f64 = 0.05;

/// Simulated latencies and failure rate of the fake backend.
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub register_delay: Duration,
    pub stats_delay: Duration,
    pub health_delay: Duration,
    /// Chance in [0, 1] that a registration is reported as a duplicate.
    pub duplicate_probability: f64,
}

impl Default for MockBackend {
    fn default() -> Self {
        MockBackend {
            register_delay: Duration::from_millis(1500),
            stats_delay: Duration::from_millis(500),
            health_delay: Duration::from_millis(200),
            duplicate_probability: DEFAULT_DUPLICATE_PROBABILITY,
        }
    }
}

impl MockBackend {
    /// No latency, no random duplicates.
    pub fn instant() -> Self {
        MockBackend {
            register_delay: Duration::ZERO,
            stats_delay: Duration::ZERO,
            health_delay: Duration::ZERO,
            duplicate_probability: 0.0,
        }
    }

    pub fn with_duplicate_probability(mut self, probability: f64) -> Self {
        self.duplicate_probability = sanitize_probability(probability);
        self
    }

    pub fn register(&self, user: &BetaUserCreate) -> Result<BetaUserResponse> {
        info!("Using mock mode for beta registration");
        pause(self.register_delay);

        if !user.email.contains('@') {
            return Err(BetaError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if user.name.trim().chars().count() < 2 {
            return Err(BetaError::Validation("Please enter your full name".to_string()));
        }

        let mut rng = rand::rng();
        if rng.random_bool(sanitize_probability(self.duplicate_probability)) {
            return Err(BetaError::Server {
                status: 400,
                message: DUPLICATE_EMAIL_MESSAGE.to_string(),
            });
        }

        Ok(BetaUserResponse {
            user_id: rng.random_range(1000..10000),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
            is_beta_user: true,
            message: WELCOME_MESSAGE.to_string(),
        })
    }

    pub fn stats(&self) -> BetaStats {
        pause(self.stats_delay);
        BetaStats {
            total_beta_users: 150,
            users_last_24h: 12,
            users_last_week: 45,
            status: "active".to_string(),
        }
    }

    pub fn health(&self) -> HealthStatus {
        pause(self.health_delay);
        HealthStatus {
            status: "healthy".to_string(),
            service: "beta_registration".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Clamp into [0, 1]; NaN and infinities disable duplicates.
fn sanitize_probability(probability: f64) -> f64 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
