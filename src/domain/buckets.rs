use super::commit::AnalyzedCommit;
use super::version::Severity;

/// Analyzed commits grouped by severity
///
/// All four buckets always exist; each keeps the order in which commits were
/// analyzed. `dropped` counts commits that matched no grammar or rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketedCommits {
    pub major: Vec<AnalyzedCommit>,
    pub minor: Vec<AnalyzedCommit>,
    pub patch: Vec<AnalyzedCommit>,
    pub none: Vec<AnalyzedCommit>,
    pub dropped: usize,
}

impl BucketedCommits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, severity: Severity) -> &[AnalyzedCommit] {
        match severity {
            Severity::Major => &self.major,
            Severity::Minor => &self.minor,
            Severity::Patch => &self.patch,
            Severity::None => &self.none,
        }
    }

    /// Append a commit to the bucket of its own severity
    pub fn push(&mut self, commit: AnalyzedCommit) {
        let bucket = match commit.severity {
            Severity::Major => &mut self.major,
            Severity::Minor => &mut self.minor,
            Severity::Patch => &mut self.patch,
            Severity::None => &mut self.none,
        };
        bucket.push(commit);
    }

    /// Most severe non-empty bucket among major, minor and patch
    pub fn highest(&self) -> Option<Severity> {
        [Severity::Major, Severity::Minor, Severity::Patch]
            .into_iter()
            .find(|severity| !self.get(*severity).is_empty())
    }

    /// True if any commit warrants a version change
    pub fn has_release_changes(&self) -> bool {
        self.highest().is_some()
    }

    /// Number of classified commits across all buckets
    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len() + self.patch.len() + self.none.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All classified commits, bucket by bucket in priority order
    pub fn iter(&self) -> impl Iterator<Item = &AnalyzedCommit> {
        Severity::PRIORITY
            .into_iter()
            .flat_map(move |severity| self.get(severity).iter())
    }
}
