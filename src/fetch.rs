use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::github::{fetch_account, AccountData, FetchError};
use crate::scoring::{calculate_report, ScoreReport, ScoringConfig};

/// Fetch an account and score it against `now`.
///
/// Fetch failures short-circuit; the scorer only ever sees complete data.
pub async fn fetch_and_score(
    client: &octocrab::Octocrab,
    username: &str,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<(AccountData, ScoreReport), FetchError> {
    info!(username, "analyzing account");
    let data = fetch_account(client, username).await?;

    debug!(
        repositories = data.repositories.len(),
        events = data.events.len(),
        followers = data.profile.followers,
        "fetched account data"
    );

    let report = calculate_report(&data, scoring, now);
    debug!(total = report.total, tier = %report.tier, "scored account");
    Ok((data, report))
}
