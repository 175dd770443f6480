use serde::{Deserialize, Serialize};

pub const GITHUB_API_ROOT: &str = "https://api.github.com/repos";

// the only part of the github repository document we care about
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RepoMeta {
    #[serde(default)]
    pub stargazers_count: Option<u64>,
}

// fetch the star count for owner/name; a repository github refuses to describe has no count
pub async fn fetch_repo_stars(repo: &str) -> anyhow::Result<Option<u64>> {
    let resp = gloo_net::http::Request::get(format!("{GITHUB_API_ROOT}/{repo}").as_str())
        .send()
        .await?;

    if !resp.ok() {
        return Ok(None);
    }

    let meta: RepoMeta = resp.json().await?;

    Ok(Some(meta.stargazers_count.unwrap_or(0)))
}
