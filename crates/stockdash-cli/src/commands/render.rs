use stockdash_core::{Disclosure, Language, StockApiResponse};

use crate::cli::RenderArgs;
use crate::error::CliError;

use super::{read_input, CommandOutput, DashboardView};

pub fn run(
    args: &RenderArgs,
    language: Language,
    disclosure: Disclosure,
) -> Result<CommandOutput, CliError> {
    let response = StockApiResponse::from_json(&read_input(&args.file)?)?;
    let ticker = response.ticker.clone();
    let response = response.ensure_success(&ticker)?;

    Ok(CommandOutput::Dashboard(DashboardView::build(
        &response, language, disclosure,
    )))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn unsuccessful_saved_response_is_an_api_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("failed.json");
        fs::write(&path, r#"{"success":false,"ticker":"ZZZZ","data":{}}"#).expect("write");

        let error = run(
            &RenderArgs { file: path },
            Language::En,
            Disclosure::collapsed(),
        )
        .expect_err("rejected");
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "Failed to fetch data for ZZZZ (api.rejected)");
    }

    #[test]
    fn broken_saved_response_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let error = run(&RenderArgs { file: path }, Language::En, Disclosure::collapsed())
            .expect_err("bad json");
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn saved_response_renders_without_network() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aapl.json");
        fs::write(
            &path,
            r#"{"success":true,"ticker":"AAPL","data":{
                "dividends":[{"key":"DividendYield","value":"0.0051","block":"dividends","label_en":"Dividend Yield","label_uk":"Дивідендна дохідність","is_primary":true}]
            }}"#,
        )
        .expect("write");

        let output = run(&RenderArgs { file: path }, Language::En, Disclosure::collapsed())
            .expect("render");
        match output {
            CommandOutput::Dashboard(view) => {
                assert_eq!(view.ticker, "AAPL");
                assert_eq!(view.sections.len(), 1);
                assert_eq!(view.sections[0].title, "Dividends");
                assert_eq!(view.sections[0].metrics[0].label, "Dividend Yield");
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }
}
