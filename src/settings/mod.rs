use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs::File};

use dotenv::dotenv;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Var(#[from] env::VarError),
    #[error(transparent)]
    _Parse(#[from] ParseIntError),
}

#[derive(Clone)]
pub struct Storage {
    pub dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./console-data"),
        }
    }
}

impl Storage {
    pub fn env() -> Result<Self> {
        let dir = env::var("STORAGE_DIR")?.into();
        Ok(Self { dir })
    }
}

#[derive(Clone)]
pub struct Assistant {
    pub reply_delay_ms: i64,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
        }
    }
}

impl Assistant {
    pub fn env() -> Result<Self> {
        let reply_delay_ms = env::var("ASSISTANT_REPLY_DELAY_MS")?.parse()?;
        Ok(Self { reply_delay_ms })
    }
}

#[derive(Clone)]
pub struct Config {
    pub storage: Storage,
    pub assistant: Assistant,
}

impl Default for Config {
    fn default() -> Self {
        dotenv().ok();

        let rust_log = env::var("RUST_LOG").unwrap_or("info".into());
        let level = LevelFilter::from_str(&rust_log).unwrap_or(LevelFilter::Info);
        let log_file = env::var("SERVICE_NAME")
            .map(|pkg| format!("{pkg}.log"))
            .unwrap_or("agent_console.log".into());

        CombinedLogger::init(vec![
            TermLogger::new(
                level,
                simplelog::Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ),
            WriteLogger::new(
                level,
                simplelog::Config::default(),
                File::create(log_file).expect("Failed to create log file"),
            ),
        ])
        .expect("Failed to initialize logger");

        Self {
            storage: Storage::env().unwrap_or_default(),
            assistant: Assistant::env().unwrap_or_default(),
        }
    }
}
