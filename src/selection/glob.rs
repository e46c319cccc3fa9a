use regex::Regex;

use crate::selection::artifact_ref::{ArtifactRef, WILDCARD};

/// A single glob segment: `*` matches any run of characters (including none), everything
///  else matches literally and case-sensitively.
#[derive(Debug, Clone)]
pub enum GlobPattern {
    Any,
    Exact(String),
    Wildcard(Regex),
}
impl GlobPattern {
    pub fn new(glob: &str) -> GlobPattern {
        if glob == WILDCARD {
            return GlobPattern::Any;
        }
        if !glob.contains('*') {
            return GlobPattern::Exact(glob.to_string());
        }

        let body = glob.split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        match Regex::new(&format!("^(?s:{})$", body)) {
            Ok(regex) => GlobPattern::Wildcard(regex),
            Err(_) => GlobPattern::Exact(glob.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            GlobPattern::Any => true,
            GlobPattern::Exact(s) => s == value,
            GlobPattern::Wildcard(regex) => regex.is_match(value),
        }
    }
}

/// An [ArtifactRef] pattern with its four segments compiled for matching.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    group_id: GlobPattern,
    artifact_id: GlobPattern,
    artifact_type: GlobPattern,
    classifier: GlobPattern,
}
impl ArtifactPattern {
    pub fn new(pattern: &ArtifactRef) -> ArtifactPattern {
        ArtifactPattern {
            group_id: GlobPattern::new(&pattern.group_id),
            artifact_id: GlobPattern::new(&pattern.artifact_id),
            artifact_type: GlobPattern::new(&pattern.artifact_type),
            classifier: GlobPattern::new(&pattern.classifier),
        }
    }

    pub fn parse(pattern: &str) -> ArtifactPattern {
        ArtifactPattern::new(&ArtifactRef::parse_pattern(pattern))
    }

    /// All four segments have to match
    pub fn matches(&self, concrete: &ArtifactRef) -> bool {
        self.group_id.matches(&concrete.group_id)
            && self.artifact_id.matches(&concrete.artifact_id)
            && self.artifact_type.matches(&concrete.artifact_type)
            && self.classifier.matches(&concrete.classifier)
    }
}

/// One-shot matching of a pattern against a concrete reference
pub fn matches(pattern: &ArtifactRef, concrete: &ArtifactRef) -> bool {
    ArtifactPattern::new(pattern).matches(concrete)
}

#[cfg(test)]
mod test {
    use rstest::*;
    use super::*;

    #[rstest]
    #[case::wildcard_matches_anything("*", "org.example", true)]
    #[case::wildcard_matches_empty("*", "", true)]
    #[case::literal("org.example", "org.example", true)]
    #[case::literal_mismatch("org.example", "org.other", false)]
    #[case::literal_is_anchored("org", "org.example", false)]
    #[case::prefix("org.example*", "org.example.jetty", true)]
    #[case::prefix_exact("org.example*", "org.example", true)]
    #[case::prefix_mismatch("org.example*", "org.other", false)]
    #[case::suffix("*-tests", "core-tests", true)]
    #[case::infix("test-*-it", "test-core-it", true)]
    #[case::infix_mismatch("test-*-it", "test-core", false)]
    #[case::multiple_wildcards("*core*", "my-core-lib", true)]
    #[case::case_sensitive("Core", "core", false)]
    #[case::dot_is_literal("a.b", "axb", false)]
    #[case::regex_chars_are_literal("a+(b)", "a+(b)", true)]
    #[case::question_mark_is_literal("a?c", "abc", false)]
    #[case::empty_matches_empty("", "", true)]
    #[case::empty_does_not_match_value("", "x", false)]
    fn test_glob(#[case] glob: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(GlobPattern::new(glob).matches(value), expected);
    }

    fn concrete(group_id: &str, artifact_id: &str, artifact_type: &str, classifier: &str) -> ArtifactRef {
        ArtifactRef::new(Some(group_id), Some(artifact_id), Some(artifact_type), Some(classifier))
    }

    #[rstest]
    #[case::group_wildcard("org.example:*", concrete("org.example", "core", "jar", ""), true)]
    #[case::group_wildcard_other_group("org.example:*", concrete("org.other", "core", "jar", ""), false)]
    #[case::group_only("org.example", concrete("org.example", "core", "zip", "dist"), true)]
    #[case::default_include("org.example*", concrete("org.example.sub", "core", "jar", ""), true)]
    #[case::type_mismatch("org.example:core:zip", concrete("org.example", "core", "jar", ""), false)]
    #[case::classifier_match("*:*:*:tests", concrete("org.example", "core", "test-jar", "tests"), true)]
    #[case::classifier_mismatch("*:*:*:tests", concrete("org.example", "core", "jar", ""), false)]
    #[case::blank_pattern_matches_blank_group("", concrete("", "core", "jar", ""), true)]
    #[case::blank_pattern_rejects_group("", concrete("org.example", "core", "jar", ""), false)]
    #[case::artifact_prefix("*:test-*", concrete("org.example", "test-utils", "jar", ""), true)]
    fn test_artifact_pattern(#[case] pattern: &str, #[case] concrete: ArtifactRef, #[case] expected: bool) {
        assert_eq!(ArtifactPattern::parse(pattern).matches(&concrete), expected);
        assert_eq!(matches(&ArtifactRef::parse_pattern(pattern), &concrete), expected);
    }
}
