// ABOUTME: Progress command for liftlog-cli
// ABOUTME: Prints the period summary as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::client::StoreClient;
use liftlog::errors::{AppError, AppResult, ErrorCode};
use liftlog::models::DateKey;
use liftlog::services::ProgressService;
use liftlog_intelligence::progress::Period;

use crate::helpers::display::display_summary;

/// Show the summary for `period` ending at `as_of`
pub async fn show(client: StoreClient, period: Period, as_of: DateKey, json: bool) -> AppResult<()> {
    let summary = ProgressService::new(client).summary(period, as_of).await?;
    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| {
            AppError::new(ErrorCode::SerializationError, "failed to render summary").with_source(e)
        })?;
        println!("{rendered}");
    } else {
        display_summary(&summary);
    }
    Ok(())
}
