use std::pin::Pin;

use rand::Rng;
use serde_json::{json, Value};

use super::tool::{parse_params, Tool};
use crate::error::{Result, ToolError};
use crate::types::params::{TransferSearchParams, DEFAULT_CURRENCY};
use crate::types::response::ToolOutcome;

const TOOL_NAME: &str = "search_transfer_offers";

/// Estimate bounds for a standard sedan transfer, in cents
const ESTIMATE_MIN_CENTS: u32 = 15_000;
const ESTIMATE_MAX_CENTS: u32 = 45_000;

/// Car hire / transfer search, mock variant
///
/// The real Transfers API requires a complex POST body; this tool synthesizes
/// a placeholder offer with an estimated cost and never touches the gateway.
#[derive(Debug, Default)]
pub struct TransferSearchTool;

impl TransferSearchTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TransferSearchTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Estimate car hire / transfer offers between two locations (synthesized pricing)"
    }

    fn parameters_schema(&self) -> Value {
        crate::schemas::params_schema::<TransferSearchParams>()
    }

    fn execute(
        &self,
        parameters: Value,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ToolOutcome>> + Send + '_>> {
        Box::pin(async move {
            let params: TransferSearchParams = parse_params(TOOL_NAME, parameters)?;

            if params.start_location.trim().is_empty() || params.end_location.trim().is_empty() {
                return Err(ToolError::Validation(
                    "Missing start or end location for transfer search".to_string(),
                ));
            }

            let cents = rand::thread_rng().gen_range(ESTIMATE_MIN_CENTS..=ESTIMATE_MAX_CENTS);
            let cost = f64::from(cents) / 100.0;
            let currency = params
                .currency
                .as_deref()
                .filter(|code| !code.is_empty())
                .unwrap_or(DEFAULT_CURRENCY);

            let mut offer = json!({
                "type": "transfer-offer",
                "transferType": "PRIVATE",
                "start": { "location": params.start_location },
                "end": { "location": params.end_location },
                "vehicle": { "category": "ST", "description": "Standard sedan" },
                "quotation": { "monetaryAmount": cost, "currencyCode": currency },
                "estimated": true,
                "notes": "Cost is an estimate for a standard sedan transfer"
            });
            if let Some(date) = params.transfer_date.as_deref().filter(|d| !d.is_empty()) {
                offer["transferDate"] = json!(date);
            }
            if let Some(passengers) = params.passengers {
                offer["passengers"] = json!(passengers);
            }

            Ok(ToolOutcome::Data(json!({ "data": [offer] })))
        })
    }
}
