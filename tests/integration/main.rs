mod campaign_tests;
mod template_tests;
mod transactional_tests;
