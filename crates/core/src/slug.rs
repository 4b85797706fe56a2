//! Public app slug validation and generation.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::CoreError;

pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 63;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Validate a slug: lowercase alphanumerics separated by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() < MIN_SLUG_LEN || slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be between {MIN_SLUG_LEN} and {MAX_SLUG_LEN} characters, got {}",
            slug.len()
        )));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and single hyphens"
        )));
    }
    Ok(())
}

/// Derive a slug from an app name. Non-ASCII letters are dropped.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out.truncate(MAX_SLUG_LEN - 5);
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Slug from a name plus a short random suffix, e.g. `my-course-x7k2`.
pub fn generate_slug<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let suffix: String = (0..4)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    let base = slugify(name);
    if base.is_empty() {
        format!("app-{suffix}")
    } else {
        format!("{base}-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn validate_slug_accepts_valid() {
        assert!(validate_slug("my-course").is_ok());
        assert!(validate_slug("abc").is_ok());
        assert!(validate_slug("ebook-2024").is_ok());
    }

    #[test]
    fn validate_slug_rejects_invalid() {
        assert!(validate_slug("ab").is_err());
        assert!(validate_slug("My-Course").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn slugify_normalizes_names() {
        assert_eq!(slugify("My Great Course!"), "my-great-course");
        assert_eq!(slugify("  Receitas  Fit "), "receitas-fit");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn generated_slugs_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for name in ["Demo", "", "A very long name ".repeat(10).as_str(), "ÁÉÍ"] {
            let slug = generate_slug(name, &mut rng);
            assert!(validate_slug(&slug).is_ok(), "invalid slug {slug}");
        }
    }
}
