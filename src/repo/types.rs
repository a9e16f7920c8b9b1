use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One entry of `repos.json`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Repo {
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether the repository index was fetched successfully.
    /// Disabled repositories count as loaded.
    #[serde(skip, default = "default_enabled")]
    pub loaded: bool,
}

fn default_enabled() -> bool {
    true
}

impl Repo {
    pub fn new(name: &str, url: &str, enabled: bool) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            enabled,
            loaded: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RepoList {
    #[serde(default)]
    pub repos: Vec<Repo>,
}

/// A package as listed in a repository index. Only the fields the GUI shows
/// are read; everything else in the index is ignored.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Package {
    #[serde(rename = "name")]
    pub pkg_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Base URL of the repository this package came from
    #[serde(skip)]
    pub repo_url: String,
}

impl Package {
    pub fn new(pkg_name: &str, version: &str, repo_url: &str) -> Self {
        Self {
            pkg_name: pkg_name.to_string(),
            title: pkg_name.to_string(),
            version: version.to_string(),
            repo_url: repo_url.to_string(),
            ..Default::default()
        }
    }

    /// Title if the index has one, otherwise the package name
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.pkg_name
        } else {
            &self.title
        }
    }

    /// `<repoUrl>/packages/<pkg_name>/<file>`
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}/packages/{}/{}", self.repo_url, self.pkg_name, file)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct RepoIndex {
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Repositories and the packages they provide
#[derive(Debug, Default)]
pub struct Get {
    pub repos: Vec<Repo>,
    pub packages: Vec<Rc<Package>>,
}

impl Get {
    pub fn new(repos: Vec<Repo>, packages: Vec<Package>) -> Self {
        Self {
            repos,
            packages: packages.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.repos.iter().any(|repo| repo.enabled)
    }

    pub fn all_loaded(&self) -> bool {
        self.repos.iter().all(|repo| repo.loaded)
    }
}
