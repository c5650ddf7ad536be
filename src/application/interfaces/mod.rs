/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Mailing list service interface
pub mod list;
/// Subscriber service interface
pub mod subscriber;
/// Campaign service interface
pub mod campaign;
/// Template service interface
pub mod template;
/// Transactional email service interface
pub mod transactional;
