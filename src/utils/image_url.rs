//! Image link normalization and classification.
//!
//! Owners add hotel and room photos by pasting links. Share links from Google
//! Drive do not render in an `<img>` tag, so they are rewritten to the direct
//! download form before being stored:
//!
//! ```text
//! https://drive.google.com/file/d/<ID>/view?usp=sharing
//! https://drive.google.com/open?id=<ID>
//!     -> https://drive.google.com/uc?export=view&id=<ID>
//! ```
//!
//! Normalization is idempotent: a normalized link normalizes to itself.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

static DRIVE_SHARE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)").unwrap());

static DRIVE_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"drive\.google\.com/open\?id=([A-Za-z0-9_-]+)").unwrap());

static IMAGE_EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|svg|bmp)(\?.*)?$").unwrap());

const DRIVE_DIRECT_MARKER: &str = "drive.google.com/uc?export=view";

/// Hosts known to serve images, matched on the host and its subdomains.
pub const IMAGE_HOSTS: &[&str] = &[
    "imgur.com",
    "unsplash.com",
    "cloudinary.com",
    "drive.google.com",
    "amazonaws.com",
    "googleusercontent.com",
];

/// Errors that can occur during image link normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUrlError {
    #[error("Image URL is empty")]
    Empty,

    #[error("Image URL has no http(s) scheme and does not look like a domain")]
    MissingScheme,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL does not point to a recognized image file or image host")]
    NotAnImage,
}

/// How strictly a well-formed link is checked for being an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any http(s) link is accepted; extension and host checks are advisory.
    #[default]
    Permissive,
    /// Link must carry an image extension or come from an [`IMAGE_HOSTS`] host.
    Strict,
}

/// Category of a pasted link, used for the confirmation shown to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlKind {
    GoogleDriveShare,
    GoogleDriveDirect,
    GoogleDrive,
    Imgur,
    Unsplash,
    Cloudinary,
    Other,
}

impl UrlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleDriveShare => "google-drive-share",
            Self::GoogleDriveDirect => "google-drive-direct",
            Self::GoogleDrive => "google-drive",
            Self::Imgur => "imgur",
            Self::Unsplash => "unsplash",
            Self::Cloudinary => "cloudinary",
            Self::Other => "other",
        }
    }

    /// User-facing confirmation text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::GoogleDriveShare => {
                "✓ Google Drive link detected - Auto-converting to direct URL"
            }
            Self::GoogleDriveDirect => "✓ Google Drive direct URL - Ready to use",
            Self::GoogleDrive => "✓ Google Drive URL detected",
            Self::Imgur => "✓ Imgur image detected",
            Self::Unsplash => "✓ Unsplash image detected",
            Self::Cloudinary => "✓ Cloudinary image detected",
            Self::Other => "✓ Image URL added",
        }
    }
}

/// Classifies a raw link. Informational only; does not affect normalization.
pub fn classify_url(raw: &str) -> UrlKind {
    if raw.contains("drive.google.com") {
        if raw.contains("/file/d/") || raw.contains("/open?id=") {
            return UrlKind::GoogleDriveShare;
        }
        if raw.contains("uc?export=view") {
            return UrlKind::GoogleDriveDirect;
        }
        return UrlKind::GoogleDrive;
    }

    if raw.contains("imgur.com") {
        UrlKind::Imgur
    } else if raw.contains("unsplash.com") {
        UrlKind::Unsplash
    } else if raw.contains("cloudinary.com") {
        UrlKind::Cloudinary
    } else {
        UrlKind::Other
    }
}

/// Rewrites Google Drive share links to the direct form.
///
/// Links already in direct form and non-Drive links are returned unchanged.
pub fn convert_google_drive_url(url: &str) -> String {
    if let Some(file_id) = DRIVE_SHARE_REGEX.captures(url).and_then(|c| c.get(1)) {
        return direct_drive_url(file_id.as_str());
    }

    if url.contains(DRIVE_DIRECT_MARKER) {
        return url.to_string();
    }

    if let Some(file_id) = DRIVE_OPEN_REGEX.captures(url).and_then(|c| c.get(1)) {
        return direct_drive_url(file_id.as_str());
    }

    url.to_string()
}

fn direct_drive_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={file_id}")
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn is_image_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    IMAGE_HOSTS
        .iter()
        .any(|known| host == *known || host.ends_with(&format!(".{known}")))
}

/// Checks that `url` is a well-formed absolute http(s) URL that plausibly
/// references an image under the given mode.
///
/// # Errors
///
/// Returns [`ImageUrlError::InvalidFormat`] for unparsable or non-http(s) URLs.
/// Returns [`ImageUrlError::NotAnImage`] in strict mode when neither the
/// extension nor the host identifies an image.
pub fn validate_image_url(url: &str, mode: ValidationMode) -> Result<(), ImageUrlError> {
    let parsed = Url::parse(url).map_err(|e| ImageUrlError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ImageUrlError::InvalidFormat(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    if IMAGE_EXTENSION_REGEX.is_match(url) {
        return Ok(());
    }

    if parsed.host_str().is_some_and(is_image_host) {
        return Ok(());
    }

    match mode {
        ValidationMode::Permissive => Ok(()),
        ValidationMode::Strict => Err(ImageUrlError::NotAnImage),
    }
}

/// Normalizes a pasted image link with [`ValidationMode::Permissive`].
///
/// # Examples
///
/// ```
/// use hotel_stays::utils::image_url::normalize_image_url;
///
/// assert_eq!(
///     normalize_image_url("https://drive.google.com/file/d/ABC123xyz/view?usp=sharing").unwrap(),
///     "https://drive.google.com/uc?export=view&id=ABC123xyz"
/// );
/// assert_eq!(
///     normalize_image_url("example.com/photo.png").unwrap(),
///     "https://example.com/photo.png"
/// );
/// assert!(normalize_image_url("not a url").is_err());
/// ```
pub fn normalize_image_url(raw: &str) -> Result<String, ImageUrlError> {
    normalize_image_url_with(raw, ValidationMode::Permissive)
}

/// Normalizes a pasted image link.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: trimmed; empty input is rejected
/// 2. **Google Drive**: share links rewritten to direct form
/// 3. **Scheme**: `https://` prepended to scheme-less input containing a `.`
/// 4. **Validation**: see [`validate_image_url`]
///
/// The link text is otherwise returned as written; it is not re-serialized.
///
/// # Errors
///
/// Returns [`ImageUrlError::Empty`] for blank input.
/// Returns [`ImageUrlError::MissingScheme`] for scheme-less input without a `.`.
/// Returns the errors of [`validate_image_url`] otherwise.
pub fn normalize_image_url_with(raw: &str, mode: ValidationMode) -> Result<String, ImageUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImageUrlError::Empty);
    }

    let mut url = convert_google_drive_url(trimmed);

    if !has_http_scheme(&url) {
        if !url.contains('.') {
            return Err(ImageUrlError::MissingScheme);
        }
        url = format!("https://{url}");
    }

    validate_image_url(&url, mode)?;

    Ok(url)
}
