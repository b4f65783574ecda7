//! Report references for platforms and dependencies depguide cannot handle.
//!
//! When no install recipe exists for the user's platform, or the platform is
//! not recognised at all, the advisory asks the user to file a report. A
//! [`Reporter`] turns a short summary tag into the link shown to the user.

use crate::error::{DepguideError, Result};

/// Maximum URL length before the summary is truncated.
const MAX_URL_LEN: usize = 2000;

/// Produces a reference (normally a URL) for filing a report.
pub trait Reporter {
    /// Return a reference the user can follow to file a report about `summary`.
    fn report_reference(&self, summary: &str) -> Result<String>;
}

/// Summary tag for a dependency with no recipe on a known platform.
pub fn missing_recipe_summary(key: &str, platform_description: &str) -> String {
    format!("DEP: {}, {}", key, platform_description)
}

/// Summary tag for an unrecognised platform.
pub fn unknown_platform_summary() -> String {
    "DISTRO: Unknown".to_string()
}

/// Builds pre-filled "new issue" links for an issue tracker.
///
/// The summary becomes the `title` query parameter of `new_issue_url`.
#[derive(Debug, Clone, Default)]
pub struct IssueTrackerReporter {
    new_issue_url: Option<String>,
}

impl IssueTrackerReporter {
    /// Create a reporter for the given "new issue" URL.
    pub fn new(new_issue_url: impl Into<String>) -> Self {
        let url = new_issue_url.into();
        Self {
            new_issue_url: Some(url).filter(|u| !u.trim().is_empty()),
        }
    }

    /// A reporter with nowhere to send reports; every request fails.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl Reporter for IssueTrackerReporter {
    fn report_reference(&self, summary: &str) -> Result<String> {
        let base = self
            .new_issue_url
            .as_deref()
            .ok_or_else(|| DepguideError::ReportFailed {
                message: "no report_url configured".to_string(),
            })?;

        tracing::debug!("Building report link for '{}'", summary);
        Ok(build_issue_url(base, summary))
    }
}

/// Reporter that always returns the same reference.
#[derive(Debug, Clone)]
pub struct StaticReporter {
    reference: String,
}

impl StaticReporter {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

impl Reporter for StaticReporter {
    fn report_reference(&self, _summary: &str) -> Result<String> {
        Ok(self.reference.clone())
    }
}

/// Build a pre-filled issue URL.
pub fn build_issue_url(base: &str, title: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    let prefix = format!("{}{}title=", base, separator);
    let budget = MAX_URL_LEN.saturating_sub(prefix.len());

    let mut title = title.to_string();
    while urlencoding::encode(&title).len() > budget && !title.is_empty() {
        let mut cut = title.len() - (title.len() / 10).max(1);
        while !title.is_char_boundary(cut) {
            cut -= 1;
        }
        title.truncate(cut);
    }

    format!("{}{}", prefix, urlencoding::encode(&title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_have_fixed_shape() {
        assert_eq!(
            missing_recipe_summary("bz2", "Arch Linux"),
            "DEP: bz2, Arch Linux"
        );
        assert_eq!(unknown_platform_summary(), "DISTRO: Unknown");
    }

    #[test]
    fn issue_url_percent_encodes_title() {
        let url = build_issue_url("https://example.org/issues/new", "DEP: bz2, Arch Linux");
        assert_eq!(
            url,
            "https://example.org/issues/new?title=DEP%3A%20bz2%2C%20Arch%20Linux"
        );
    }

    #[test]
    fn issue_url_appends_to_existing_query() {
        let url = build_issue_url("https://example.org/new?labels=deps", "x");
        assert_eq!(url, "https://example.org/new?labels=deps&title=x");
    }

    #[test]
    fn issue_url_truncates_long_titles() {
        let url = build_issue_url("https://example.org/new", &"é".repeat(5000));
        assert!(url.len() <= MAX_URL_LEN);
        assert!(url.starts_with("https://example.org/new?title=%C3%A9"));
    }

    #[test]
    fn tracker_reporter_builds_url() {
        let reporter = IssueTrackerReporter::new("https://example.org/issues/new");
        let url = reporter.report_reference("DISTRO: Unknown").unwrap();
        assert!(url.ends_with("title=DISTRO%3A%20Unknown"));
    }

    #[test]
    fn unconfigured_reporter_fails() {
        let err = IssueTrackerReporter::unconfigured()
            .report_reference("DISTRO: Unknown")
            .unwrap_err();
        assert!(matches!(err, DepguideError::ReportFailed { .. }));
        assert!(IssueTrackerReporter::new("  ")
            .report_reference("x")
            .is_err());
    }

    #[test]
    fn static_reporter_ignores_summary() {
        let reporter = StaticReporter::new("https://bugs.example.org");
        assert_eq!(
            reporter.report_reference("anything").unwrap(),
            "https://bugs.example.org"
        );
    }
}
