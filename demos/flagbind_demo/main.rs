//! # flagbind demo application
//!
//! A sample CLI that binds trailing `name=value` flags into a nested config
//! struct through the clap adapter. It exists to exercise flagbind by hand.
//!
//! ```sh
//! cargo run --example flagbind_demo -- -- -server-port=443 -db-user=admin
//! RUST_LOG=flagbind=trace cargo run --example flagbind_demo -- --dump -- \
//!     -db-user=admin -server-tags="a; b" -server-upstream=10.0.0.2:8080
//! ```
//!
//! | Feature | Try |
//! |---------|-----|
//! | Defaults | `-- -db-user=admin` |
//! | Required flag | omit `-db-user` |
//! | Allow-list | `-- -db-user=x -server-port=8080` |
//! | Duration | `-- -db-user=x -db-timeout=1m30s` |
//! | Sequence | `-- -db-user=x -server-tags="a; ;b"` |
//! | Custom type | `-- -db-user=x -server-upstream=10.0.0.2:8080` |
//! | JSON value | `-- -db-user=x -server-limits={"rps":5}` |

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use flagbind::{BoxError, Decode, FlagArgs, FlagStruct, Json};

/// flagbind demo: bind `-name=value` flags into a typed config.
#[derive(Parser, Debug)]
#[command(name = "flagbind-demo")]
struct Cli {
    /// Print the bound config as debug output.
    #[arg(long)]
    dump: bool,

    #[command(flatten)]
    flags: FlagArgs,
}

#[derive(FlagStruct, Debug, Default)]
pub struct DemoConfig {
    #[flag("name,default=flagbind-demo")]
    pub name: String,

    #[flag(nested)]
    pub server: ServerConfig,

    #[flag(nested)]
    pub db: DbConfig,
}

#[derive(FlagStruct, Debug, Default)]
pub struct ServerConfig {
    #[flag("server-host,default=127.0.0.1")]
    pub host: String,

    #[flag("server-port,default=80,allowed=80;443")]
    pub port: u16,

    #[flag("server-tags")]
    pub tags: Vec<String>,

    #[flag("server-upstream")]
    pub upstream: Option<Upstream>,

    #[flag("server-limits")]
    pub limits: Json<Limits>,
}

#[derive(FlagStruct, Debug, Default)]
pub struct DbConfig {
    #[flag("db-user,required")]
    pub user: String,

    #[flag("db-timeout,default=5s")]
    pub timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct Limits {
    #[serde(default)]
    pub rps: u32,
}

/// `host:port` of the upstream service.
#[derive(Debug, Default)]
pub struct Upstream {
    pub host: String,
    pub port: u16,
}

impl Decode for Upstream {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        let (host, port) = value
            .rsplit_once(':')
            .ok_or_else(|| format!("expected host:port, got '{value}'"))?;
        self.port = port.parse()?;
        self.host = host.to_string();
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config: DemoConfig = match cli.flags.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.dump {
        println!("{config:#?}");
        return ExitCode::SUCCESS;
    }

    println!("{} listening on {}:{}", config.name, config.server.host, config.server.port);
    println!("db user {} (timeout {:?})", config.db.user, config.db.timeout);
    if !config.server.tags.is_empty() {
        println!("tags: {}", config.server.tags.join(", "));
    }
    if let Some(upstream) = &config.server.upstream {
        println!("upstream: {}:{}", upstream.host, upstream.port);
    }
    println!("rate limit: {} rps", config.server.limits.rps);
    ExitCode::SUCCESS
}
