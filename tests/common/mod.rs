#![allow(dead_code)]

use std::path::Path;

use git2::{ObjectType, Repository};
use tempfile::TempDir;

/// Throwaway git repository on the `main` branch
pub struct TestRepo {
    dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }
        repo.set_head("refs/heads/main")
            .expect("Could not point HEAD at main");

        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit an empty tree on top of HEAD, returning the commit hash
    pub fn commit(&self, message: &str) -> String {
        let sig = self.repo.signature().expect("Could not get sig");
        let tree_id = self
            .repo
            .index()
            .expect("Could not get index")
            .write_tree()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
            .to_string()
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self.head_object();
        self.repo
            .tag_lightweight(name, &head, false)
            .expect("Could not create tag");
    }

    /// Annotated tag on HEAD
    pub fn annotated_tag(&self, name: &str) {
        let head = self.head_object();
        let sig = self.repo.signature().expect("Could not get sig");
        self.repo
            .tag(name, &head, &sig, &format!("Release {}", name), false)
            .expect("Could not create annotated tag");
    }

    /// Detach HEAD at the current commit
    pub fn detach(&self) {
        let oid = self.head_object().id();
        self.repo.set_head_detached(oid).expect("Could not detach HEAD");
    }

    fn head_object(&self) -> git2::Object<'_> {
        self.repo
            .head()
            .expect("Could not read HEAD")
            .peel(ObjectType::Commit)
            .expect("HEAD is not a commit")
    }
}
