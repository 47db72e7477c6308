use clap::{Parser, Subcommand};

/// Wade: scripted JSON-RPC probe for a local wallet daemon.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Wallet daemon JSON-RPC URL.
    #[arg(
        long,
        default_value = "http://127.0.0.1:19888/json_rpc",
        env = "WADE_RPC_URL"
    )]
    pub url: String,

    /// Per-request deadline in seconds. Omit for no deadline.
    #[arg(long, env = "WADE_RPC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a single RPC call and print the raw response.
    Call {
        /// Remote method name, e.g. `login` or `getBalance`.
        method: String,

        /// Request params as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
    },

    /// Log in with wallet credentials and print the raw response.
    Login {
        /// Wallet address.
        #[arg(long)]
        address: String,

        /// Spend secret key (hex, passed through untouched).
        #[arg(long)]
        send_secret_key: String,

        /// View secret key (hex, passed through untouched).
        #[arg(long)]
        view_secret_key: String,
    },

    /// Query the balance for an existing session token.
    Balance {
        /// Session token from a previous login.
        #[arg(long)]
        token: String,
    },

    /// Run the login-then-getBalance sequence and print both responses.
    Smoke {
        /// Wallet address.
        #[arg(long)]
        address: String,

        /// Spend secret key (hex, passed through untouched).
        #[arg(long)]
        send_secret_key: String,

        /// View secret key (hex, passed through untouched).
        #[arg(long)]
        view_secret_key: String,
    },
}
