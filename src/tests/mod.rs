
mod concurrent_tests;
