pub mod edge_tests;
pub mod proxy_tests;
pub mod search_page_tests;
