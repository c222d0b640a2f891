mod api_tests;
mod email_tests;
