/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Campaign models
pub mod campaign;
/// Mailing list and list membership models
pub mod list;
/// Subscriber models
pub mod subscriber;
/// Template models
pub mod template;
