mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use wade_core::probe;
use wade_core::rpc::{HttpRpcClient, RpcRequest, WalletRpc};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let timeout = args.timeout_secs.map(Duration::from_secs);
    let rpc = HttpRpcClient::new(&args.url, timeout)
        .wrap_err_with(|| format!("while configuring the RPC client for `{}`", args.url))?;

    match args.command {
        cli::Command::Call { method, params } => {
            let params = parse_params(&params)?;
            let response = call_daemon(&rpc, &args.url, &RpcRequest::new(method, params)).await?;
            print_json(&response)?;
        }
        cli::Command::Login {
            address,
            send_secret_key,
            view_secret_key,
        } => {
            let request = RpcRequest::login(&address, &send_secret_key, &view_secret_key);
            let response = call_daemon(&rpc, &args.url, &request).await?;
            print_json(&response)?;
        }
        cli::Command::Balance { token } => {
            let response = call_daemon(&rpc, &args.url, &RpcRequest::get_balance(&token)).await?;
            print_json(&response)?;
        }
        cli::Command::Smoke {
            address,
            send_secret_key,
            view_secret_key,
        } => {
            let outcome = probe::run_smoke(&rpc, &address, &send_secret_key, &view_secret_key)
                .await
                .map_err(|err| {
                    eyre!(format_rpc_call_error(&args.url, &err.to_string()))
                        .wrap_err("while running the smoke sequence against the wallet daemon")
                })?;
            print_json(&outcome.login)?;
            match &outcome.balance {
                Some(balance) => print_json(balance)?,
                None => {
                    tracing::warn!("login returned no session token; getBalance was skipped");
                }
            }
        }
    }

    Ok(())
}

async fn call_daemon(
    rpc: &dyn WalletRpc,
    url: &str,
    request: &RpcRequest,
) -> eyre::Result<Value> {
    rpc.call(request).await.map_err(|err| {
        eyre!(format_rpc_call_error(url, &err.to_string()))
            .wrap_err("while calling the wallet daemon")
    })
}

fn parse_params(raw: &str) -> eyre::Result<serde_json::Map<String, Value>> {
    let value: Value =
        serde_json::from_str(raw).wrap_err("params must be valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(eyre!("params must be a JSON object, got: {other}")),
    }
}

fn print_json(value: &Value) -> eyre::Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("render response JSON")?;
    println!("{rendered}");
    Ok(())
}

fn format_rpc_call_error(rpc_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("RPC call to `{rpc_url}` failed"),
        format!("error: {source_error}"),
    ];

    if source_error.contains("Could not resolve host") || source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("Connection refused")
        || source_error.contains("connection refused")
    {
        lines.push(
            "hint: nothing is listening on that port; verify the wallet daemon is running and \
             the URL port matches its RPC port"
                .into(),
        );
    } else if source_error.contains("timed out") || source_error.contains("timeout") {
        lines.push(
            "hint: the daemon did not answer in time; raise --timeout-secs or check daemon load"
                .into(),
        );
    } else if source_error.contains("invalid JSON") {
        lines.push(
            "hint: the endpoint answered with non-JSON; verify the URL points at the daemon's \
             /json_rpc path and not a web page"
                .into(),
        );
    }

    lines.join("\n")
}
