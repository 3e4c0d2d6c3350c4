//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md)
//!
//! Language identifier constants -- Single Source of Truth
//!
//! All language string identifiers used across the codebase.

/// JavaScript language identifier
pub const LANG_JAVASCRIPT: &str = "javascript";
/// TypeScript language identifier
pub const LANG_TYPESCRIPT: &str = "typescript";
/// Python language identifier
pub const LANG_PYTHON: &str = "python";
/// Rust language identifier
pub const LANG_RUST: &str = "rust";
/// Go language identifier
pub const LANG_GO: &str = "go";
/// Java language identifier
pub const LANG_JAVA: &str = "java";
/// C language identifier
pub const LANG_C: &str = "c";
/// C++ language identifier
pub const LANG_CPP: &str = "cpp";
/// C# language identifier
pub const LANG_CSHARP: &str = "csharp";
/// Ruby language identifier
pub const LANG_RUBY: &str = "ruby";
/// PHP language identifier
pub const LANG_PHP: &str = "php";
/// Swift language identifier
pub const LANG_SWIFT: &str = "swift";
/// Kotlin language identifier
pub const LANG_KOTLIN: &str = "kotlin";
/// Unknown/unsupported language identifier
pub const LANG_UNKNOWN: &str = "unknown";
