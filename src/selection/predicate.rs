use tracing::trace;

use crate::maven::coordinates::{MavenArtifact, MavenGroupId};
use crate::selection::artifact_ref::ArtifactRef;
use crate::selection::artifact_set::ArtifactSelectionSet;
use crate::selection::glob::ArtifactPattern;

/// Accepts an artifact if it matches any include (or there are no includes) and no exclude.
///
/// Build one per BOM generation: without an explicit selection set the default include is
///  derived from the generating project's group, so instances must not outlive that project.
#[derive(Debug, Clone)]
pub struct SelectionPredicate {
    includes: Vec<ArtifactPattern>,
    excludes: Vec<ArtifactPattern>,
}
impl SelectionPredicate {
    pub fn new(artifact_set: &ArtifactSelectionSet) -> SelectionPredicate {
        SelectionPredicate {
            includes: artifact_set.includes.iter().map(|p| ArtifactPattern::parse(p)).collect(),
            excludes: artifact_set.excludes.iter().map(|p| ArtifactPattern::parse(p)).collect(),
        }
    }

    /// Uses the configured selection set, falling back to `<project group>*` if there is none
    pub fn for_project(artifact_set: Option<&ArtifactSelectionSet>, project_group: &MavenGroupId) -> SelectionPredicate {
        match artifact_set {
            Some(set) => Self::new(set),
            None => Self::new(&ArtifactSelectionSet::default_for_group(project_group)),
        }
    }

    /// An absent reference is never accepted
    pub fn test(&self, artifact_ref: Option<&ArtifactRef>) -> bool {
        let Some(artifact_ref) = artifact_ref else {
            return false;
        };

        let included = self.includes.is_empty() || Self::any_matches(&self.includes, artifact_ref);
        let result = included && !Self::any_matches(&self.excludes, artifact_ref);
        trace!("{} is {}", artifact_ref, if result { "selected" } else { "not selected" });
        result
    }

    pub fn accepts(&self, artifact: &MavenArtifact) -> bool {
        self.test(Some(&ArtifactRef::from(artifact)))
    }

    /// Keeps the accepted artifacts, in their original order
    pub fn filter(&self, candidates: &[MavenArtifact]) -> Vec<MavenArtifact> {
        candidates.iter()
            .filter(|a| self.accepts(a))
            .cloned()
            .collect()
    }

    fn any_matches(patterns: &[ArtifactPattern], artifact_ref: &ArtifactRef) -> bool {
        patterns.iter().any(|p| p.matches(artifact_ref))
    }
}

#[cfg(test)]
mod test {
    use rstest::*;
    use super::*;

    fn set(includes: &[&str], excludes: &[&str]) -> ArtifactSelectionSet {
        let mut result = ArtifactSelectionSet::default();
        includes.iter().for_each(|p| result.add_include(*p));
        excludes.iter().for_each(|p| result.add_exclude(*p));
        result
    }

    fn artifact(group_id: &str, artifact_id: &str, artifact_type: &str, classifier: &str) -> MavenArtifact {
        MavenArtifact::new(group_id, artifact_id, "1.0", artifact_type, classifier)
    }

    #[rstest]
    #[case::empty_accepts_all(set(&[], &[]), artifact("anything", "at-all", "zip", "x"), true)]
    #[case::empty_accepts_blank(set(&[], &[]), artifact("", "", "", ""), true)]
    #[case::included(set(&["org.x*"], &[]), artifact("org.x", "a", "jar", ""), true)]
    #[case::not_included(set(&["org.x*"], &[]), artifact("org.y", "b", "jar", ""), false)]
    #[case::any_include(set(&["org.x*", "org.y:b"], &[]), artifact("org.y", "b", "jar", ""), true)]
    #[case::excluded(set(&["org.x*"], &["*:test-*"]), artifact("org.x", "test-utils", "jar", ""), false)]
    #[case::exclude_without_include(set(&[], &["org.y"]), artifact("org.y", "b", "jar", ""), false)]
    #[case::exclude_only_other(set(&[], &["org.y"]), artifact("org.x", "a", "jar", ""), true)]
    #[case::exclude_wins(set(&["org.x:a"], &["org.x:a"]), artifact("org.x", "a", "jar", ""), false)]
    #[case::exclude_by_classifier(set(&["org.x"], &["*:*:*:sources"]), artifact("org.x", "a", "jar", "sources"), false)]
    #[case::exclude_by_classifier_keeps_unclassified(set(&["org.x"], &["*:*:*:sources"]), artifact("org.x", "a", "jar", ""), true)]
    fn test_accepts(#[case] set: ArtifactSelectionSet, #[case] artifact: MavenArtifact, #[case] expected: bool) {
        assert_eq!(SelectionPredicate::new(&set).accepts(&artifact), expected);
    }

    #[test]
    fn test_absent_reference_is_rejected() {
        assert!(!SelectionPredicate::new(&ArtifactSelectionSet::default()).test(None));
    }

    #[test]
    fn test_default_selection_uses_project_group() {
        let predicate = SelectionPredicate::for_project(None, &MavenGroupId("org.x".to_string()));
        assert!(predicate.accepts(&artifact("org.x", "a", "jar", "")));
        assert!(predicate.accepts(&artifact("org.x.sub", "a", "jar", "")));
        assert!(!predicate.accepts(&artifact("org.y", "b", "jar", "")));
    }

    #[test]
    fn test_configured_selection_ignores_project_group() {
        let configured = set(&["org.y*"], &[]);
        let predicate = SelectionPredicate::for_project(Some(&configured), &MavenGroupId("org.x".to_string()));
        assert!(!predicate.accepts(&artifact("org.x", "a", "jar", "")));
        assert!(predicate.accepts(&artifact("org.y", "b", "jar", "")));
    }

    #[test]
    fn test_filter_keeps_order_and_duplicates() {
        let candidates = vec![
            artifact("org.x", "b", "jar", ""),
            artifact("org.y", "c", "jar", ""),
            artifact("org.x", "a", "jar", ""),
            artifact("org.x", "b", "jar", ""),
        ];
        let filtered = SelectionPredicate::new(&set(&["org.x"], &[])).filter(&candidates);
        assert_eq!(filtered, vec![candidates[0].clone(), candidates[2].clone(), candidates[3].clone()]);
    }
}
