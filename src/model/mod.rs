/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP request executor with Basic auth and response validation
pub mod http;
/// Write models sent to the API
pub mod requests;
/// Response envelopes and shape normalization
pub mod responses;
/// Serde helpers for timestamps, emails and list references
pub mod utils;
