use stockdash_core::{ApiConfig, ApiError, Disclosure, Language, LookupSession, StockApiClient};

use crate::cli::LookupArgs;
use crate::error::CliError;

use super::{CommandOutput, DashboardView};

pub async fn run(
    args: &LookupArgs,
    timeout_ms: Option<u64>,
    language: Language,
    disclosure: Disclosure,
) -> Result<CommandOutput, CliError> {
    let mut config = ApiConfig::from_env()?;
    if let Some(timeout_ms) = timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }

    let mut session = LookupSession::new(StockApiClient::new(config));
    session.search(&args.ticker).await?;
    *session.disclosure_mut() = disclosure;

    let response = session
        .data()
        .ok_or_else(|| ApiError::malformed("lookup completed without data"))?;
    Ok(CommandOutput::Dashboard(DashboardView::build(
        response,
        language,
        session.disclosure(),
    )))
}
