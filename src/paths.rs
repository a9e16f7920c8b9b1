use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_RES: LazyLock<PathBuf> = LazyLock::new(|| {
    let localinstall = PathBuf::from("/usr/share/hbstore/res");
    if localinstall.exists() {
        return localinstall;
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("res")))
        .unwrap_or_else(|| PathBuf::from("res"))
});

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string())));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Store data directory: settings, repos.json and the image cache
pub static PATH_STORE: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("hbstore");
    }
    PATH_LOCAL_SHARE.join("hbstore")
});

pub static PATH_CACHE: LazyLock<PathBuf> = LazyLock::new(|| PATH_STORE.join("cache"));
