use thiserror::Error;
use url::Url;

/// Errors from resolving or validating a post link before it is opened.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Only http, https and file links are handed to the system opener.
    #[error("Unsupported scheme: {0} (only http/https/file allowed)")]
    UnsupportedScheme(String),

    /// A relative link with no base URL to resolve it against.
    #[error("Relative link '{0}' needs a base_url to open")]
    RelativeWithoutBase(String),

    #[error("Post has no link")]
    Empty,
}

/// Check that an absolute URL is safe to pass to the system opener.
///
/// ```
/// use blogdeck::util::validate_url_for_open;
///
/// assert!(validate_url_for_open("https://example.com/blog1.html").is_ok());
/// assert!(validate_url_for_open("javascript:alert(1)").is_err());
/// ```
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" | "file" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}

/// Turn a post's `url` field into an openable absolute URL.
///
/// Absolute links are validated as-is. Relative links such as
/// `blog-pages/blog1.html` are joined onto `base`.
pub fn resolve_post_url(base: Option<&Url>, raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    match Url::parse(raw) {
        Ok(_) => validate_url_for_open(raw),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or_else(|| UrlValidationError::RelativeWithoutBase(raw.to_owned()))?;
            let joined = base.join(raw)?;
            validate_url_for_open(joined.as_str())
        }
        Err(e) => Err(UrlValidationError::InvalidUrl(e)),
    }
}

/// Base URL for a catalog file's directory, used when no `base_url` is configured.
pub fn directory_base_url(catalog_path: &std::path::Path) -> Option<Url> {
    let dir = catalog_path.parent()?;
    let dir = if dir.as_os_str().is_empty() {
        std::env::current_dir().ok()?
    } else if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(dir)
    };
    Url::from_directory_path(dir).ok()
}
