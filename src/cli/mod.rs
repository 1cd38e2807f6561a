use std::sync::Arc;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::AsyncBufReadExt;
use tracing::info;

use crate::{
    services::{AmadeusClient, AmadeusConfig},
    tools::{FlightSearchTool, HotelSearchTool, TransferSearchTool},
    ToolRouter,
};

/// One request line on the serve protocol
#[derive(Deserialize)]
struct ServeRequest {
    tool: String,
    #[serde(default)]
    params: Option<Value>,
}

/// CLI entry point for the travelwise tool server
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("travelwise")
        .version("0.1.0")
        .about("Travel-search tools (flights, hotels, transfers) backed by the Amadeus Self-Service APIs")
        .arg(
            Arg::new("tool")
                .help("Tool to invoke (see --list)")
                .required_unless_present_any(["list", "serve"])
                .index(1),
        )
        .arg(
            Arg::new("params")
                .short('p')
                .long("params")
                .value_name("JSON")
                .help("Tool parameters as a JSON object")
                .default_value("{}"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List registered tools with their parameter schemas"),
        )
        .arg(
            Arg::new("serve")
                .long("serve")
                .action(ArgAction::SetTrue)
                .help("Serve line-delimited JSON requests on stdin/stdout"),
        )
        .get_matches();

    // Missing credentials stop the process before any tool can run
    let config = AmadeusConfig::from_env()
        .context("Amadeus credentials are required. Set AMADEUS_API_KEY and AMADEUS_API_SECRET")?;
    let router = build_router(config);

    if matches.get_flag("list") {
        let listing = serde_json::to_string_pretty(&router.describe_tools())?;
        println!("{listing}");
        return Ok(());
    }

    if matches.get_flag("serve") {
        return serve(&router).await;
    }

    let tool = matches.get_one::<String>("tool").expect("tool is required");
    let params: Value = serde_json::from_str(matches.get_one::<String>("params").unwrap())
        .context("--params must be a JSON object")?;

    info!(tool = %tool, "invoking tool");
    let response = router.dispatch(tool, params).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Register the travel-search tools against a shared gateway handle
fn build_router(config: AmadeusConfig) -> ToolRouter {
    let gateway = Arc::new(AmadeusClient::new(config));

    let mut router = ToolRouter::new();
    router.register_tool(FlightSearchTool::new(gateway.clone()));
    router.register_tool(HotelSearchTool::new(gateway));
    router.register_tool(TransferSearchTool::new());
    router
}

/// Line protocol: each stdin line is `{"tool": <name>, "params": {...}}`,
/// each stdout line is one tool response. Malformed requests produce an
/// error response on their own line; the loop itself never dies on one.
async fn serve(router: &ToolRouter) -> anyhow::Result<()> {
    info!("serving line-delimited requests on stdin");
    let stdin = tokio::io::stdin();
    let mut lines = tokio::io::BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ServeRequest>(line) {
            Ok(request) => {
                let params = request.params.unwrap_or_else(|| Value::Object(Default::default()));
                router.dispatch(&request.tool, params).await
            }
            Err(err) => {
                serde_json::json!({ "error": format!("Malformed request line: {err}") })
            }
        };

        println!("{response}");
    }

    Ok(())
}
