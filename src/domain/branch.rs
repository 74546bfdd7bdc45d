/// Build environment the release is computed for: the branch and commit
/// being built and whether the build is for a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub branch: String,
    pub commit: String,
    pub is_pull_request: bool,
}

impl BuildContext {
    /// Create a build context for a regular (non pull request) build
    pub fn new(branch: impl Into<String>, commit: impl Into<String>) -> Self {
        BuildContext {
            branch: branch.into(),
            commit: commit.into(),
            is_pull_request: false,
        }
    }

    /// Mark the build as a pull request build
    pub fn pull_request(mut self, is_pull_request: bool) -> Self {
        self.is_pull_request = is_pull_request;
        self
    }
}
