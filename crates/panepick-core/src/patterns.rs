//! The pattern table: named regexes with overlap priorities.
//!
//! Patterns are declared in a fixed order. That order is significant twice:
//! it is the per-line scan order during extraction, and the final tie-break
//! when two same-length, same-priority matches collide (the earlier-declared
//! pattern's match was inserted first and is kept).
//!
//! Priorities are small integers where lower means stronger. Any candidate
//! whose pattern name is missing from the table compares at
//! [`DEFAULT_PRIORITY`], which is weaker than every declared entry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatternError;

/// Priority used for candidates whose pattern is not in the table.
pub const DEFAULT_PRIORITY: u8 = 15;

/// A named pattern with its compiled regex and overlap priority.
///
/// A pattern with exactly one capture group yields candidates from the
/// captured range rather than the whole match; `MARKDOWN_URL` uses this to
/// surface the URL out of `[label](url)`.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    name: String,
    regex: Regex,
    priority: u8,
}

impl PatternSpec {
    /// Compile a pattern. Fails if the regex source is invalid.
    pub fn new(name: &str, source: &str, priority: u8) -> Result<Self, PatternError> {
        let regex = Regex::new(source).map_err(|source| PatternError::InvalidRegex {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            regex,
            priority,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }
}

/// An ordered, immutable collection of patterns.
///
/// Built once at startup and passed explicitly into the matcher; there is no
/// mutable global state.
#[derive(Debug, Clone)]
pub struct PatternSet {
    specs: Vec<PatternSpec>,
}

impl PatternSet {
    /// Build a set from already-compiled specs, rejecting duplicate names.
    pub fn new(specs: Vec<PatternSpec>) -> Result<Self, PatternError> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(PatternError::DuplicateName(spec.name.clone()));
            }
        }
        Ok(Self { specs })
    }

    /// Compile a `(name, regex, priority)` table into a set.
    pub fn compile(table: &[(&str, &str, u8)]) -> Result<Self, PatternError> {
        let specs = table
            .iter()
            .map(|(name, source, priority)| PatternSpec::new(name, source, *priority))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(specs)
    }

    /// The built-in pattern table.
    pub fn builtin() -> &'static PatternSet {
        static BUILTIN_SET: Lazy<PatternSet> = Lazy::new(|| {
            PatternSet::compile(BUILTIN)
                .expect("built-in pattern table compiles")
        });
        &BUILTIN_SET
    }

    /// Patterns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternSpec> {
        self.specs.iter()
    }

    /// Priority for a pattern name; unknown names get [`DEFAULT_PRIORITY`].
    pub fn priority(&self, name: &str) -> u8 {
        self.specs
            .iter()
            .find(|spec| spec.name == name)
            .map_or(DEFAULT_PRIORITY, |spec| spec.priority)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// The built-in table, most specific patterns first.
///
/// FILE_PATH is deliberately last and weakest: it allows spaces inside
/// interior directory segments, so it produces the loosest matches and must
/// lose every overlap it does not win on length alone.
const BUILTIN: &[(&str, &str, u8)] = &[
    (
        "URL",
        r#"(?:https?|ftp|ssh|file)://[^\s'")>]+|git@[^\s'"]+:[^\s'")>]+"#,
        1,
    ),
    (
        "GITHUB_REPO",
        r#"(?:https://|git@|ssh@)github\.com[:/][A-Za-z0-9_.-]+/[^\s'")>]+"#,
        2,
    ),
    ("MARKDOWN_URL", r"\[[^\]]*\]\(([^)]+)\)", 3),
    ("DIFF_SUMMARY", r"diff --git a/\S+ b/\S+", 4),
    ("DIFF_A", r"--- a/\S+", 4),
    ("DIFF_B", r"\+\+\+ b/\S+", 4),
    ("EMAIL", r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}", 5),
    (
        "UUID",
        r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b",
        6,
    ),
    ("DOCKER_SHA", r"sha256:[0-9a-f]{64}", 6),
    ("IPFS_HASH", r"\bQm[1-9A-HJ-NP-Za-km-z]{44}\b", 6),
    (
        "IPV6",
        r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}(?:%[0-9A-Za-z]+)?|[0-9a-fA-F:]*::[0-9a-fA-F:]*[0-9a-fA-F](?:%[0-9A-Za-z]+)?",
        7,
    ),
    ("MAC_ADDRESS", r"\b[0-9a-fA-F]{2}(?:[:-][0-9a-fA-F]{2}){5}\b", 7),
    ("IP_ADDRESS", r"\b\d{1,3}(?:\.\d{1,3}){3}(?::\d{1,5})?\b", 8),
    ("HEX_ADDRESS", r"0x[0-9a-fA-F]+", 9),
    ("HEX_COLOR", r"#[0-9a-fA-F]{6}\b", 9),
    ("LARGE_NUMBER", r"\b\d{4,}\b", 12),
    ("GIT_COMMIT", r"\b[0-9a-f]{7,40}\b", 13),
    (
        "FILE_PATH",
        r"(?:[A-Za-z]:|[\w.@$~-]+)?(?:/[^/:\n]*)*/[^/\s:]+",
        14,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(name: &str) -> &'static Regex {
        PatternSet::builtin()
            .iter()
            .find(|spec| spec.name() == name)
            .map(PatternSpec::regex)
            .unwrap()
    }

    fn matches(name: &str, haystack: &str) -> bool {
        regex(name).is_match(haystack)
    }

    #[test]
    fn builtin_compiles_with_unique_names() {
        let set = PatternSet::builtin();
        assert_eq!(set.len(), BUILTIN.len());
        for (i, spec) in set.iter().enumerate() {
            assert!(
                !set.iter().take(i).any(|other| other.name() == spec.name()),
                "duplicate pattern name {}",
                spec.name()
            );
            assert!(spec.priority() < DEFAULT_PRIORITY);
        }
    }

    #[test]
    fn invalid_regex_is_a_setup_error() {
        let err = PatternSet::compile(&[("BROKEN", "(", 1)]).unwrap_err();
        assert!(matches!(err, PatternError::InvalidRegex { .. }));
    }

    #[test]
    fn duplicate_name_is_a_setup_error() {
        let err = PatternSet::compile(&[("A", "x", 1), ("A", "y", 2)]).unwrap_err();
        assert!(matches!(err, PatternError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn unknown_pattern_gets_default_priority() {
        let set = PatternSet::builtin();
        assert_eq!(set.priority("NO_SUCH_PATTERN"), DEFAULT_PRIORITY);
        assert_eq!(set.priority("URL"), 1);
    }

    #[test]
    fn url_pattern() {
        assert!(matches("URL", "https://example.com"));
        assert!(matches("URL", "http://test.org/path"));
        assert!(matches("URL", "git@github.com:user/repo.git"));
        assert!(matches("URL", "ssh://user@server.com/path"));
        assert!(matches("URL", "ftp://ftp.example.com/file"));
        assert!(matches("URL", "file:///home/user/file"));

        assert!(!matches("URL", "not-a-url"));
        assert!(!matches("URL", "mailto:user@example.com"));
    }

    #[test]
    fn github_repo_pattern() {
        assert!(matches("GITHUB_REPO", "https://github.com/user/repo"));
        assert!(matches("GITHUB_REPO", "git@github.com:user/repo.git"));
        assert!(matches("GITHUB_REPO", "ssh@github.com:user/repo"));
        assert!(matches("GITHUB_REPO", "https://github.com/user/repo.git"));

        assert!(!matches("GITHUB_REPO", "https://gitlab.com/user/repo"));
        assert!(!matches("GITHUB_REPO", "github.com/user/repo"));
    }

    #[test]
    fn markdown_url_captures_the_url() {
        let caps = regex("MARKDOWN_URL")
            .captures("[Link](https://example.com)")
            .unwrap();
        assert_eq!(&caps[1], "https://example.com");

        assert!(matches("MARKDOWN_URL", "[Text](./relative/path)"));
        assert!(matches("MARKDOWN_URL", "[Text](x)"));
        assert!(!matches("MARKDOWN_URL", "[Empty]()"));
        assert!(!matches("MARKDOWN_URL", "[No closing paren](https://example.com"));
        assert!(!matches("MARKDOWN_URL", "No brackets(https://example.com)"));
    }

    #[test]
    fn email_pattern() {
        assert!(matches("EMAIL", "user@example.com"));
        assert!(matches("EMAIL", "test.user+tag@domain.co.uk"));
        assert!(matches("EMAIL", "user123@test-domain.org"));
        assert!(matches("EMAIL", "33030965+tizee@users.noreply.github.com"));

        assert!(!matches("EMAIL", "invalid.email"));
        assert!(!matches("EMAIL", "@example.com"));
        assert!(!matches("EMAIL", "user@"));
    }

    #[test]
    fn git_commit_pattern() {
        assert!(matches("GIT_COMMIT", "commit a1b2c3d"));
        assert!(matches("GIT_COMMIT", "a1b2c3d4e5f6789"));
        assert!(matches(
            "GIT_COMMIT",
            "abc123def456789012345678901234567890abcd"
        ));

        assert!(!matches("GIT_COMMIT", "abc123"));
        assert!(!matches("GIT_COMMIT", "g1b2c3d4e5f6789"));
        assert!(!matches("GIT_COMMIT", "123456"));
    }

    #[test]
    fn ip_address_pattern() {
        assert!(matches("IP_ADDRESS", "192.168.1.1"));
        assert!(matches("IP_ADDRESS", "10.0.0.1"));
        assert!(matches("IP_ADDRESS", "255.255.255.255"));
        // the pattern does not validate octet ranges
        assert!(matches("IP_ADDRESS", "999.999.999.999"));
        assert!(matches("IP_ADDRESS", "192.168.1.1:8080"));
        assert!(matches("IP_ADDRESS", "127.0.0.1:80"));
        assert!(matches("IP_ADDRESS", "192.168.1.1.1"));

        assert!(!matches("IP_ADDRESS", "192.168.1"));
        assert!(!matches("IP_ADDRESS", "192.168"));
    }

    #[test]
    fn ipv6_pattern() {
        assert!(matches("IPV6", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(matches("IPV6", "2001:db8:85a3::8a2e:370:7334"));
        assert!(matches("IPV6", "::1"));
        assert!(matches("IPV6", "fe80::1%lo0"));
        // "::a" inside is a valid compressed form
        assert!(matches("IPV6", "not::an::ipv6"));

        assert!(!matches("IPV6", "192.168.1.1"));
        assert!(!matches("IPV6", "plain text"));
    }

    #[test]
    fn ipv6_compressed_matches_whole_address() {
        let m = regex("IPV6").find("addr 2001:db8:85a3::8a2e:370:7334 up").unwrap();
        assert_eq!(m.as_str(), "2001:db8:85a3::8a2e:370:7334");
        let m = regex("IPV6").find("fe80::1%lo0").unwrap();
        assert_eq!(m.as_str(), "fe80::1%lo0");
    }

    #[test]
    fn mac_address_pattern() {
        assert!(matches("MAC_ADDRESS", "00:11:22:33:44:55"));
        assert!(matches("MAC_ADDRESS", "aa-bb-cc-dd-ee-ff"));
        assert!(matches("MAC_ADDRESS", "AA:BB:CC:DD:EE:FF"));
        assert!(matches("MAC_ADDRESS", "00:11:22:33:44:55:66"));

        assert!(!matches("MAC_ADDRESS", "00:11:22:33:44"));
        assert!(!matches("MAC_ADDRESS", "gg:11:22:33:44:55"));
    }

    #[test]
    fn uuid_pattern() {
        assert!(matches("UUID", "550e8400-e29b-41d4-a716-446655440000"));
        assert!(matches("UUID", "6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
        assert!(matches("UUID", "00000000-0000-0000-0000-000000000000"));
        assert!(matches("UUID", "550e8400-e29b-41d4-a716-446655440000-extra"));

        assert!(!matches("UUID", "550e8400-e29b-41d4-a716"));
        assert!(!matches("UUID", "550e8400-e29b-41d4-a716-44665544000g"));
    }

    #[test]
    fn hex_color_pattern() {
        assert!(matches("HEX_COLOR", "#ff0000"));
        assert!(matches("HEX_COLOR", "#00FF00"));
        assert!(matches("HEX_COLOR", "#123abc"));

        assert!(!matches("HEX_COLOR", "#ff00"));
        assert!(!matches("HEX_COLOR", "#ff0000aa"));
        assert!(!matches("HEX_COLOR", "#gggggg"));
        assert!(!matches("HEX_COLOR", "ff0000"));
    }

    #[test]
    fn hex_address_pattern() {
        assert!(matches("HEX_ADDRESS", "0xdeadbeef"));
        assert!(matches("HEX_ADDRESS", "0x12345678"));
        assert!(matches("HEX_ADDRESS", "0xABCDEF"));

        assert!(!matches("HEX_ADDRESS", "0xgggg"));
        assert!(!matches("HEX_ADDRESS", "deadbeef"));
        assert!(!matches("HEX_ADDRESS", "0x"));
    }

    #[test]
    fn large_number_pattern() {
        assert!(matches("LARGE_NUMBER", "123456789"));
        assert!(matches("LARGE_NUMBER", "1234"));
        assert!(matches("LARGE_NUMBER", "999999999999"));

        assert!(!matches("LARGE_NUMBER", "123"));
        assert!(!matches("LARGE_NUMBER", "12a34"));
    }

    #[test]
    fn docker_sha_pattern() {
        let hex64: String = "abcdef1234567890".repeat(4);
        assert!(matches("DOCKER_SHA", &format!("sha256:{hex64}")));

        assert!(!matches("DOCKER_SHA", "sha256:abc123"));
        assert!(!matches("DOCKER_SHA", &format!("md5:{hex64}")));
        assert!(!matches("DOCKER_SHA", &hex64));
    }

    #[test]
    fn ipfs_hash_pattern() {
        assert!(matches(
            "IPFS_HASH",
            "QmYwAPJzv5CZsnAzt8auVNDE7yFbZcyZLfbqUJnRDvfYKL"
        ));
        assert!(matches(
            "IPFS_HASH",
            "QmT78zSuBmuS2z925AEH9pSq8mBzfCUfpEqKTcEejqkfKe"
        ));

        assert!(!matches("IPFS_HASH", "QmTooShort"));
        assert!(!matches("IPFS_HASH", "NotQmHash"));
        assert!(!matches(
            "IPFS_HASH",
            "QmYwAPJzv5CZsnAzt8auVNDE7yFbZcyZLfbqUJnRDvfYKL123"
        ));
    }

    #[test]
    fn diff_patterns() {
        assert!(matches("DIFF_SUMMARY", "diff --git a/file.txt b/file.txt"));
        assert!(matches("DIFF_A", "--- a/old_file.txt"));
        assert!(matches("DIFF_B", "+++ b/new_file.txt"));

        assert!(!matches("DIFF_SUMMARY", "diff --git file.txt"));
        assert!(!matches("DIFF_A", "--- old_file.txt"));
        assert!(!matches("DIFF_B", "+++ new_file.txt"));
    }

    #[test]
    fn file_path_pattern() {
        assert!(matches("FILE_PATH", "/home/user/document.txt"));
        assert!(matches("FILE_PATH", "./relative/path/file.py"));
        assert!(matches("FILE_PATH", "~/Documents/file.pdf"));
        assert!(matches("FILE_PATH", "/usr/local/bin/command"));
        assert!(matches("FILE_PATH", "src/main.rs"));

        // spaces are allowed inside interior directory segments
        assert!(matches("FILE_PATH", "/home/user/My Documents/file.txt"));
        assert!(matches("FILE_PATH", "./path with spaces/file.py"));
        assert!(matches("FILE_PATH", "src/test files/main.rs"));
        assert!(matches("FILE_PATH", "/path/with  multiple/spaces"));
        assert!(matches("FILE_PATH", "/path/ space at start/file"));
        assert!(matches("FILE_PATH", "/path/space at end /file"));
        assert!(matches(
            "FILE_PATH",
            "/Users/john/Library/Application Support/MyApp/config.json"
        ));
        assert!(matches("FILE_PATH", "C:/Program Files (x86)/Software/app.exe"));

        assert!(!matches("FILE_PATH", "just-a-filename"));
        assert!(!matches("FILE_PATH", "no-slash-here"));
    }

    #[test]
    fn file_path_final_segment_stops_at_spaces() {
        let m = regex("FILE_PATH").find("see /var/log/syslog for details").unwrap();
        assert_eq!(m.as_str(), "/var/log/syslog");
    }
}
