use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub login: String,

    pub public_repos: u32,

    // absent when the token can't see private repos
    pub total_private_repos: Option<u32>,
}

impl Organization {
    pub fn repos_count(&self) -> u32 {
        self.public_repos + self.total_private_repos.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repos_count() {
        let org: Organization = serde_json::from_value(serde_json::json!({
            "login": "isomerpages",
            "id": 40887764u64,
            "public_repos": 539u32,
            "total_private_repos": 27u32
        }))
        .unwrap();

        assert_eq!(org.repos_count(), 566);
    }

    #[test]
    fn repos_count_without_private_scope() {
        let org: Organization = serde_json::from_value(serde_json::json!({
            "login": "isomerpages",
            "id": 40887764u64,
            "public_repos": 539u32
        }))
        .unwrap();

        assert_eq!(org.repos_count(), 539);
    }
}
