/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Session state: base URL, credentials and login flag
pub mod state;

pub use state::{Credentials, Session};
