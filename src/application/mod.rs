/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Client facade owning the session and the request executor
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Aggregation of paginated collection endpoints
pub mod pagination;
/// Service implementations on the client
pub mod services;
