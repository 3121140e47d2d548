//! URL validation for external links.
//!
//! The `github` and `linkedin` commands ask the browser to open a new tab.
//! Even though the URLs are compile-time constants, every redirect goes
//! through a domain allowlist so a future content edit cannot introduce an
//! open redirect.

use crate::config::ALLOWED_REDIRECT_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to open
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

/// Validate a URL before opening it in a new tab.
pub fn validate_redirect_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = extract_host(url) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let without_protocol = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("HTTPS://"))
        .or_else(|| url.strip_prefix("HTTP://"))?;

    // Host is the part before the first /, minus any port
    let host_part = without_protocol.split('/').next()?;
    let host = host_part.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

/// Check if a domain is in the allowed list
fn is_domain_allowed(host: &str) -> bool {
    let host_lower = host.to_lowercase();

    ALLOWED_REDIRECT_DOMAINS.iter().any(|allowed| {
        host_lower == *allowed || host_lower.ends_with(&format!(".{}", allowed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GITHUB_URL, LINKEDIN_URL};

    #[test]
    fn test_configured_links_are_allowed() {
        assert!(matches!(
            validate_redirect_url(GITHUB_URL),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_redirect_url(LINKEDIN_URL),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_valid_urls() {
        assert!(matches!(
            validate_redirect_url("https://github.com/user/repo"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_redirect_url("https://www.linkedin.com/in/someone/"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            validate_redirect_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        ));
        assert!(matches!(
            validate_redirect_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        ));
        assert!(matches!(
            validate_redirect_url("https://evil.com/phishing"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://github.com/user"),
            Some("github.com".to_string())
        );
        assert_eq!(
            extract_host("https://www.linkedin.com/in/user"),
            Some("linkedin.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
