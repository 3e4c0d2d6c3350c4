//!
//! **Documentation**: [docs/modules/domain.md#testing-utilities](../../../docs/modules/domain.md#testing-utilities)
//!
//! Centralized test utilities for the entire workspace.
//! All crates MUST import shared test types from here instead of defining them locally.

/// Centralized test result type for all test functions across the workspace.
///
/// Use this instead of defining per-file `type TestResult` aliases.
///
/// # Example
/// ```rust,ignore
/// use mcb_domain::test_utils::TestResult;
///
/// #[test]
/// fn my_test() -> TestResult {
///     let value = some_fallible_fn()?;
///     assert_eq!(value, 42);
///     Ok(())
/// }
/// ```
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Centralized workspace root
// ---------------------------------------------------------------------------

/// Returns the workspace root directory by traversing up from the crate manifest dir.
///
/// Each crate sits at `<workspace>/crates/<crate>`, so 2 ancestors up is the workspace root.
/// Returns an error instead of panicking for composability with `TestResult`.
///
/// # Example
/// ```rust,ignore
/// use mcb_domain::test_utils::workspace_root;
///
/// let root = workspace_root()?;
/// assert!(root.join("Cargo.toml").exists());
/// ```
///
/// # Errors
///
/// Returns an error if `CARGO_MANIFEST_DIR` has fewer than 2 parent directories.
pub fn workspace_root() -> TestResult<std::path::PathBuf> {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .ok_or_else(|| {
            "workspace root not found (CARGO_MANIFEST_DIR has fewer than 2 parents)".into()
        })
        .map(std::path::Path::to_path_buf)
}

// ---------------------------------------------------------------------------
// Common test identity constants
// ---------------------------------------------------------------------------

/// Default test organization ID — use across all crates for consistency.
pub const TEST_ORG_ID: &str = "test-org";

/// Default test project ID.
pub const TEST_PROJECT_ID: &str = "test-project";

/// Default test session ID.
pub const TEST_SESSION_ID: &str = "test-session";

/// Default test user email.
pub const TEST_USER_EMAIL: &str = "test@example.com";

/// Default test timestamp (`2023-11-14T22:13:20Z`).
pub const TEST_TIMESTAMP: i64 = 1_700_000_000;

use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Extended test constants (migrated from mcb-server/tests/utils/test_fixtures)
// ---------------------------------------------------------------------------

/// Default test repository name.
pub const TEST_REPO_NAME: &str = "test-repo";

/// Default embedding dimensions (`FastEmbed` BGE-small-en-v1.5).
pub const TEST_EMBEDDING_DIMENSIONS: usize = 384;

/// Organization A identifier for multi-tenant tests.
pub const TEST_ORG_ID_A: &str = "test-org-a";

/// Organization B identifier for multi-tenant tests.
pub const TEST_ORG_ID_B: &str = "test-org-b";

/// Default golden-test collection name.
pub const GOLDEN_COLLECTION: &str = "mcb_golden_test";

/// Expected files in `sample_codebase` for search assertions.
pub const SAMPLE_CODEBASE_FILES: &[&str] = &[
    "embedding.rs",
    "vector_store.rs",
    "handlers.rs",
    "cache.rs",
    "di.rs",
    "error.rs",
    "chunking.rs",
];

// ---------------------------------------------------------------------------
// Workspace / codebase helpers (migrated from mcb-server/tests/utils/test_fixtures)
// ---------------------------------------------------------------------------

/// Create a temporary codebase directory with sample code files.
///
/// Returns `(TempDir, PathBuf)` — keep `TempDir` alive for the test.
#[must_use]
pub fn create_temp_codebase() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let codebase_path = temp_dir.path().to_path_buf();

    std::fs::write(
        codebase_path.join("lib.rs"),
        "//! Sample library\npub fn hello() {\n    println!(\"Hello, world!\");\n}\n",
    )
    .expect("Failed to write lib.rs");

    std::fs::write(
        codebase_path.join("main.rs"),
        "fn main() {\n    mylib::hello();\n}\n",
    )
    .expect("Failed to write main.rs");

    let src_dir = codebase_path.join("src");
    std::fs::create_dir_all(&src_dir).expect("Failed to create src directory");

    std::fs::write(
        src_dir.join("utils.rs"),
        "pub fn helper() -> String {\n    \"helper\".to_string()\n}\n",
    )
    .expect("Failed to write utils.rs");

    (temp_dir, codebase_path)
}

// ---------------------------------------------------------------------------
// External service availability detection
// ---------------------------------------------------------------------------

/// Skip a test early (with `Ok(())`) when the named external service is not
/// configured in `config/tests.toml` under `[test_services]`.
///
/// Usage at the top of any `-> TestResult` test function:
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_foo() -> TestResult {
///     require_service!("milvus");
///     // ... rest of the test
/// }
/// ```
#[macro_export]
macro_rules! require_service {
    ($service:expr) => {
        if $crate::utils::tests::services_config::test_service_url($service).is_none() {
            eprintln!("⏭ Skipping: {} not available", $service);
            return Ok(());
        }
    };
}
