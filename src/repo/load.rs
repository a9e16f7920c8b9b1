//! Loading repos.json and each enabled repository's package index

use crate::config::Platform;
use crate::download::Fetch;
use crate::error::StoreError;
use crate::repo::types::{Get, Package, Repo, RepoIndex, RepoList};

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path};

/// Read `<store_dir>/repos.json`, writing one with the platform's default
/// repository when it does not exist yet.
pub fn load_repo_list(store_dir: &Path, platform: Platform) -> Result<Vec<Repo>, StoreError> {
    let path = store_dir.join("repos.json");

    if !path.exists() {
        let list = RepoList {
            repos: vec![Repo::new("Default", platform.default_repo_url(), true)],
        };
        std::fs::create_dir_all(store_dir)?;
        serde_json::to_writer_pretty(File::create(&path)?, &list)?;
        log::info!("Created {} with the default repository", path.display());
        return Ok(list.repos);
    }

    let list: RepoList = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
    Ok(list
        .repos
        .into_iter()
        .map(|mut repo| {
            repo.url = repo.url.trim_end_matches('/').to_string();
            repo.loaded = true;
            repo
        })
        .collect())
}

fn fetch_index(fetcher: &dyn Fetch, repo: &Repo) -> Result<Vec<Package>, StoreError> {
    let body = fetcher.fetch(&format!("{}/repo.json", repo.url))?;
    let index: RepoIndex = serde_json::from_slice(&body)?;
    Ok(index.packages)
}

/// Package names become directories under the image cache, so only a single
/// plain path component is accepted.
fn is_safe_pkg_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Build the package catalog. A repository that cannot be fetched is marked
/// `loaded = false`; the first repository to list a package name wins.
pub fn load_get(store_dir: &Path, platform: Platform, fetcher: &dyn Fetch) -> Get {
    let repos = match load_repo_list(store_dir, platform) {
        Ok(repos) => repos,
        Err(e) => {
            log::error!("Failed to read repos.json: {}", e);
            Vec::new()
        }
    };

    let mut get = Get::default();
    let mut seen = HashSet::new();

    for mut repo in repos {
        if repo.enabled {
            match fetch_index(fetcher, &repo) {
                Ok(packages) => {
                    log::info!("Loaded {} packages from {}", packages.len(), repo.url);
                    for mut package in packages {
                        if !is_safe_pkg_name(&package.pkg_name) {
                            log::warn!("Skipping package with unsafe name {:?} from {}", package.pkg_name, repo.url);
                            continue;
                        }
                        if !seen.insert(package.pkg_name.clone()) {
                            continue;
                        }
                        package.repo_url = repo.url.clone();
                        get.packages.push(package.into());
                    }
                }
                Err(e) => {
                    log::warn!("Failed to load repository {}: {}", repo.url, e);
                    repo.loaded = false;
                }
            }
        }
        get.repos.push(repo);
    }

    get
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::fetch::testing::FakeFetcher;

    const INDEX_A: &str = r#"{"packages":[
        {"name":"appA","title":"App A","version":"1.0","category":"tool","extra":42},
        {"name":"shared","version":"2.0"}
    ]}"#;
    const INDEX_B: &str = r#"{"packages":[{"name":"shared","version":"9.9"},{"name":"appB"}]}"#;

    #[test]
    fn test_creates_default_repo_list() {
        let dir = tempfile::tempdir().unwrap();
        let repos = load_repo_list(dir.path(), Platform::WiiU).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].url, "https://wiiu.cdn.fortheusers.org");
        assert!(dir.path().join("repos.json").exists());
    }

    #[test]
    fn test_loads_enabled_repos_and_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("repos.json"),
            r#"{"repos":[
                {"name":"a","url":"http://a/"},
                {"name":"b","url":"http://b","enabled":true},
                {"name":"c","url":"http://c","enabled":false}
            ]}"#,
        )
        .unwrap();
        let fetcher = FakeFetcher::default()
            .with("http://a/repo.json", INDEX_A.as_bytes())
            .with("http://b/repo.json", INDEX_B.as_bytes());

        let get = load_get(dir.path(), Platform::Switch, &fetcher);

        assert_eq!(get.repos.len(), 3);
        assert!(get.all_loaded());
        let names: Vec<&str> = get.packages.iter().map(|p| p.pkg_name.as_str()).collect();
        assert_eq!(names, vec!["appA", "shared", "appB"]);
        assert_eq!(get.packages[1].version, "2.0");
        assert_eq!(get.packages[0].repo_url, "http://a");
        assert_eq!(get.packages[0].asset_url("icon.png"), "http://a/packages/appA/icon.png");
        assert!(!fetcher.requested().contains(&"http://c/repo.json".to_string()));
    }

    #[test]
    fn test_unreachable_repo_is_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("repos.json"),
            r#"{"repos":[{"url":"http://down"}]}"#,
        )
        .unwrap();

        let get = load_get(dir.path(), Platform::Switch, &FakeFetcher::default());
        assert!(!get.repos[0].loaded);
        assert!(get.any_enabled());
        assert!(get.packages.is_empty());
    }

    #[test]
    fn test_unsafe_package_names_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("repos.json"), r#"{"repos":[{"url":"http://a"}]}"#).unwrap();
        let index = r#"{"packages":[
            {"name":"../escaped"},
            {"name":"/abs/path"},
            {"name":"nested/dir"},
            {"name":"back\\slash"},
            {"name":".."},
            {"name":"."},
            {"name":""},
            {"name":"fine"}
        ]}"#;
        let fetcher = FakeFetcher::default().with("http://a/repo.json", index.as_bytes());

        let get = load_get(dir.path(), Platform::Switch, &fetcher);

        let names: Vec<&str> = get.packages.iter().map(|p| p.pkg_name.as_str()).collect();
        assert_eq!(names, vec!["fine"]);
        assert!(get.all_loaded());
    }

    #[test]
    fn test_safe_name_check() {
        assert!(is_safe_pkg_name("appA"));
        assert!(is_safe_pkg_name("app.v2"));
        assert!(!is_safe_pkg_name("../x"));
        assert!(!is_safe_pkg_name("/etc"));
        assert!(!is_safe_pkg_name("a/b"));
        assert!(!is_safe_pkg_name(".."));
        assert!(!is_safe_pkg_name(""));
    }
}
