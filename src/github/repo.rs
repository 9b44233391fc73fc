use serde::Deserialize;
use url::Url;

use super::user::User;

#[derive(Debug, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: User,
    pub html_url: Url,
    pub private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parsing() {
        let json = serde_json::json!({
            "id": 262143048u64,
            "name": "demo-site",
            "full_name": "isomerpages/demo-site",
            "owner": {
                "login": "isomerpages",
                "id": 40887764u64
            },
            "html_url": "https://github.com/isomerpages/demo-site",
            "private": false
        });

        let repo: Repo = serde_json::from_value(json).unwrap();

        assert_eq!(repo.name, "demo-site");
        assert_eq!(repo.full_name, "isomerpages/demo-site");
        assert_eq!(repo.owner.login, "isomerpages");
        assert!(!repo.private);
    }
}
