use url::Url;

use crate::error::Error;

#[derive(Debug)]
pub struct Config {
    pub base_url: Url,
    pub access_token: String,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        let access_token =
            std::env::var("GITHUB_ACCESS_TOKEN").map_err(|_| Error::MissingAccessToken)?;

        Ok(Config {
            base_url: Url::parse("https://github.com").unwrap(),
            access_token,
        })
    }
}

pub trait BaseUrlConfig {
    fn base_url(&self) -> &Url;
}

impl BaseUrlConfig for Config {
    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

pub trait AccessTokenConfig {
    fn access_token(&self) -> &str;
}

impl AccessTokenConfig for Config {
    fn access_token(&self) -> &str {
        &self.access_token
    }
}
