use chipp_http::{Error, HttpClient};

use crate::config::{AccessTokenConfig, BaseUrlConfig};

use super::organization::Organization;
use super::pull_request::PullRequest;
use super::repo::Repo;

const PER_PAGE: usize = 100;

pub struct Client<'a> {
    inner: HttpClient<'a>,
}

impl Client<'_> {
    pub fn new<'a, Conf>(config: &'a Conf) -> Client<'a>
    where
        Conf: BaseUrlConfig,
        Conf: AccessTokenConfig + Send + Sync,
    {
        let mut base_url = config.base_url().clone();
        base_url.set_host(Some("api.github.com")).unwrap();

        let authorization = format!("Bearer {}", config.access_token());

        let mut inner = HttpClient::new(base_url).unwrap();
        inner.set_default_headers(&[
            ("Authorization", authorization.as_str()),
            ("User-Agent", "prtally"),
        ]);

        Client { inner }
    }
}

impl Client<'_> {
    pub async fn get_organization(&self, login: &str) -> Result<Organization, Error> {
        self.inner.get(vec!["orgs", login]).await
    }
}

/// Forward-only cursor over the repositories of an organization. Yields one
/// page per `next` call; a finished cursor keeps returning `None`.
pub struct RepoPages {
    login: String,
    page: u32,
    done: bool,
}

impl RepoPages {
    pub fn for_org(login: &str) -> RepoPages {
        RepoPages {
            login: login.to_string(),
            page: 1,
            done: false,
        }
    }

    pub async fn next(&mut self, client: &Client<'_>) -> Result<Option<Vec<Repo>>, Error> {
        if self.done {
            return Ok(None);
        }

        let page = self.page.to_string();

        let repos: Vec<Repo> = client
            .inner
            .get_with_params(
                vec!["orgs", self.login.as_str(), "repos"],
                &[("per_page", "100"), ("page", page.as_str())],
            )
            .await?;

        self.page += 1;
        self.done = repos.len() < PER_PAGE;

        if repos.is_empty() {
            Ok(None)
        } else {
            Ok(Some(repos))
        }
    }
}

/// Forward-only cursor over the closed pull requests of a repository,
/// newest updates first, filtered by target branch.
pub struct PullRequestPages {
    owner: String,
    repo: String,
    base: String,
    page: u32,
    done: bool,
}

impl PullRequestPages {
    pub fn closed_for_repo(repo: &Repo, base: &str) -> PullRequestPages {
        PullRequestPages {
            owner: repo.owner.login.clone(),
            repo: repo.name.clone(),
            base: base.to_string(),
            page: 1,
            done: false,
        }
    }

    pub async fn next(&mut self, client: &Client<'_>) -> Result<Option<Vec<PullRequest>>, Error> {
        if self.done {
            return Ok(None);
        }

        let page = self.page.to_string();

        let prs: Vec<PullRequest> = client
            .inner
            .get_with_params(
                vec!["repos", self.owner.as_str(), self.repo.as_str(), "pulls"],
                &[
                    ("state", "closed"),
                    ("sort", "updated"),
                    ("direction", "desc"),
                    ("base", self.base.as_str()),
                    ("per_page", "100"),
                    ("page", page.as_str()),
                ],
            )
            .await?;

        self.page += 1;
        self.done = prs.len() < PER_PAGE;

        if prs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(prs))
        }
    }
}
