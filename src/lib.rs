mod commands {
    pub mod report;
}

pub use commands::report::Report;

mod cli;
mod config;
mod error;
mod github;

pub use config::Config;
pub use error::Error;

pub async fn handle() -> Result<(), Error> {
    let _matches = cli::cli().get_matches();

    let config = Config::from_env()?;
    Report::handle(&config).await
}
