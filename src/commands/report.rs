use chrono::{DateTime, Duration, Utc};

use crate::config::{AccessTokenConfig, BaseUrlConfig};
use crate::github::{Client, PullRequest, PullRequestPages, Repo, RepoPages};
use crate::Error;

const ORG_NAME: &str = "isomerpages";
const BASE_BRANCH: &str = "master";
const WINDOW_DAYS: i64 = 90;

// entries are either full names or bare repo names
const EXCLUDED_REPOS: &[&str] = &[
    "isomerpages/isomerpages-template",
    "isomerpages/isomercms-frontend",
    "isomerpages/isomercms-backend",
    "isomerpages/isomer-infra",
    "isomerpages/isomer-tooling",
    "site-creation-backend",
    "isomer-redirection",
];

pub struct Report;

impl Report {
    pub async fn handle<Conf>(config: &Conf) -> Result<(), Error>
    where
        Conf: BaseUrlConfig,
        Conf: AccessTokenConfig + Send + Sync,
    {
        let client = Client::new(config);

        let org = client.get_organization(ORG_NAME).await?;
        println!("Number of repos in org: {}", org.repos_count());

        let cutoff = Utc::now() - Duration::days(WINDOW_DAYS);
        let mut total = 0;

        let mut repo_pages = RepoPages::for_org(ORG_NAME);
        while let Some(repos) = repo_pages.next(&client).await? {
            for repo in repos {
                if is_excluded(&repo) {
                    continue;
                }

                let mut pr_pages = PullRequestPages::closed_for_repo(&repo, BASE_BRANCH);
                while let Some(prs) = pr_pages.next(&client).await? {
                    for pr in prs {
                        let closed_at = match qualifying_closed_at(&pr, cutoff) {
                            Some(closed_at) => closed_at,
                            None => continue,
                        };

                        total += 1;

                        if is_progress_checkpoint(total) {
                            println!("Pull request number #{} was closed on {}", total, closed_at);
                        }
                    }
                }
            }
        }

        println!("Total closed pull requests for the past 3 months: {}", total);

        Ok(())
    }
}

fn is_excluded(repo: &Repo) -> bool {
    EXCLUDED_REPOS
        .iter()
        .any(|name| *name == repo.full_name || *name == repo.name)
}

fn qualifying_closed_at(pr: &PullRequest, cutoff: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match pr.closed_at {
        Some(closed_at) if closed_at >= cutoff => Some(closed_at),
        _ => None,
    }
}

fn is_progress_checkpoint(total: u32) -> bool {
    total > 0 && total % 100 == 0
}
