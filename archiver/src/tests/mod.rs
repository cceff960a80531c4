pub mod fixtures;
pub mod oauth_tests;
