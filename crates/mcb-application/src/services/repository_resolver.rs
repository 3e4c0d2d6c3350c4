//! DB-first repository resolution with auto-registration.
use std::sync::Arc;

use mcb_domain::entities::repository::{Repository, VcsType};
use mcb_domain::error::Result;
use mcb_domain::ports::repositories::VcsEntityRepository;
use mcb_domain::value_objects::project_context::{ProjectContext, normalize_repo_url};

/// DB-first project resolution: checks registered repositories before falling back to git.
pub struct RepositoryResolver {
    vcs_repo: Arc<dyn VcsEntityRepository>,
    project_ctx: ProjectContext,
}

impl RepositoryResolver {
    /// Create a resolver that detects the current git repository context.
    pub fn new(vcs_repo: Arc<dyn VcsEntityRepository>) -> Self {
        Self {
            vcs_repo,
            project_ctx: ProjectContext::resolve(),
        }
    }

    /// Create a resolver with a custom project context (for testing or custom setups).
    pub fn with_context(
        vcs_repo: Arc<dyn VcsEntityRepository>,
        project_ctx: ProjectContext,
    ) -> Self {
        Self {
            vcs_repo,
            project_ctx,
        }
    }

    /// Resolve `project_id` from DB or fall back to git-derived value.
    pub async fn resolve_project_id(&self, org_id: &str) -> String {
        match self.try_resolve(org_id).await {
            Ok(Some(id)) => id,
            _ => self.project_ctx.project_id.clone(),
        }
    }

    /// Resolve `project_id` and auto-register the repository if not yet known.
    pub async fn resolve_and_register(&self, org_id: &str) -> Result<String> {
        if let Some(id) = self.try_resolve(org_id).await? {
            return Ok(id);
        }

        let project_id = &self.project_ctx.project_id;

        if !Self::is_registerable(project_id) {
            return Ok(project_id.clone());
        }

        if self.project_ctx.is_submodule {
            return self.resolve_submodule(org_id).await;
        }

        self.register_repository(org_id, project_id, project_id)
            .await?;
        Ok(project_id.clone())
    }

    async fn try_resolve(&self, org_id: &str) -> Result<Option<String>> {
        let normalized_url = &self.project_ctx.project_id;
        if !Self::is_registerable(normalized_url) {
            return Ok(None);
        }

        let repo = self
            .vcs_repo
            .find_repository_by_url(org_id, normalized_url)
            .await?;
        Ok(repo.map(|r| r.project_id))
    }

    async fn resolve_submodule(&self, org_id: &str) -> Result<String> {
        let parent_url = self
            .project_ctx
            .superproject_id
            .as_deref()
            .unwrap_or("default");

        if !Self::is_registerable(parent_url) {
            return Ok(self.project_ctx.project_id.clone());
        }

        let parent_project_id = match self
            .vcs_repo
            .find_repository_by_url(org_id, parent_url)
            .await?
        {
            Some(parent_repo) => parent_repo.project_id,
            None => {
                self.register_repository(org_id, parent_url, parent_url)
                    .await?;
                parent_url.to_string()
            }
        };

        self.register_repository(org_id, &parent_project_id, &self.project_ctx.project_id)
            .await?;
        Ok(parent_project_id)
    }

    async fn register_repository(&self, org_id: &str, project_id: &str, url: &str) -> Result<()> {
        self.vcs_repo.ensure_org_and_project(project_id).await?;

        let name = url.rsplit('/').next().unwrap_or(url).to_string();
        let local_path = Self::git_toplevel().unwrap_or_default();
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        let repo = Repository {
            id: uuid::Uuid::new_v4().to_string(),
            org_id: org_id.to_string(),
            project_id: project_id.to_string(),
            name,
            url: normalize_repo_url(url),
            local_path,
            vcs_type: VcsType::Git,
            created_at: now,
            updated_at: now,
        };

        // INSERT OR IGNORE semantics: if another request already registered
        // this exact (org_id, project_id, name) combo, the unique constraint
        // rejects the duplicate harmlessly.
        let _ = self.vcs_repo.create_repository(&repo).await;
        Ok(())
    }

    fn is_registerable(project_id: &str) -> bool {
        project_id.contains('/') && project_id != "default"
    }

    fn git_toplevel() -> Option<String> {
        let output = std::process::Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if path.is_empty() { None } else { Some(path) }
    }
}
