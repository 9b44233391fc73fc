mod client;
mod organization;
mod pull_request;
mod repo;
mod user;

pub use client::{Client, PullRequestPages, RepoPages};
pub use pull_request::PullRequest;
pub use repo::Repo;
