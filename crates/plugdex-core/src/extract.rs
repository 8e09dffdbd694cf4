//! Candidate link extraction from the plugin directory page.
//!
//! The directory page is unstructured HTML maintained by hand; the only
//! assumption made here is that plugin references appear as anchor
//! elements. An href qualifies as a candidate when it points directly at
//! a repository (`scheme://host/owner/name` with a host containing
//! `github.com` and no further path segments) and does not reference the
//! directory publisher's own account.

use once_cell::sync::Lazy;
use regex::Regex;

/// A raw anchor target scraped from the directory page. Transient: it
/// only lives until the reference is resolved or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReference {
    /// The anchor's href attribute, exactly as written on the page.
    pub href: String,
}

#[allow(clippy::expect_used)]
static ANCHOR_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*["']([^"']+)["']"#).expect("anchor pattern compiles")
});

#[allow(clippy::expect_used)]
static REPOSITORY_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+://[^/]*github\.com/[\w-]+/[\w-]+$").expect("repository pattern compiles")
});

/// Scans `html` for anchor elements and yields every href that points at
/// a hosted repository, excluding links that mention `publisher`.
///
/// The returned iterator is lazy and restartable: each call re-parses the
/// document from scratch, and nothing is cached between calls.
///
/// ```
/// use plugdex_core::extract::extract_candidates;
///
/// let html = r#"<a href="https://github.com/F4-Group/dokku-apt">APT</a>
///               <a href="https://github.com/progrium/dokku">dokku itself</a>"#;
/// let refs: Vec<_> = extract_candidates(html, "progrium").collect();
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].href, "https://github.com/F4-Group/dokku-apt");
/// ```
pub fn extract_candidates<'a>(
    html: &'a str,
    publisher: &'a str,
) -> impl Iterator<Item = CandidateReference> + 'a {
    ANCHOR_HREF.captures_iter(html).filter_map(move |caps| {
        let href = caps.get(1)?.as_str();
        if REPOSITORY_REF.is_match(href) && !href.contains(publisher) {
            Some(CandidateReference {
                href: href.to_string(),
            })
        } else {
            None
        }
    })
}
