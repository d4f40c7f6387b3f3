//! Path utilities for the Zellij sandbox, where the host filesystem is mounted
//! under `/host`.

use std::path::PathBuf;

/// File name of the OTLP JSON trace export.
pub const TRACE_FILE_NAME: &str = "zwidgets-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/zwidgets`.
///
/// `/host` points to the cwd of the last focused terminal, or the folder where
/// Zellij was started, so this usually resolves to
/// `~/.local/share/zellij/zwidgets` on the host.
///
/// ```
/// use zwidgets::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zwidgets"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zwidgets")
}

/// Path of the trace export file inside [`get_data_dir`].
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to their `/host` sandbox equivalent.
///
/// ```
/// use zwidgets::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
