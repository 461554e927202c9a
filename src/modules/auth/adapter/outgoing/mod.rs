pub mod google_oauth_client;
pub mod jwt;
pub mod redis_refresh_token_store;
