mod auth_tests;
mod export_tests;
mod patio_tests;
mod search_tests;
