use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use super::user::User;

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u32,
    pub title: String,

    #[serde(rename = "html_url")]
    pub url: Url,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,

    pub user: User,
    pub state: State,

    pub base: Ref,
}

#[derive(Debug, Deserialize)]
pub struct Ref {
    pub label: String,
    pub sha: String,

    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}
