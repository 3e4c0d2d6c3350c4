mod codebase_tests;
mod memory_tests;
mod repository_tests;
