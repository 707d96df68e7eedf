/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP request helper
pub mod http;
/// Rate series kept in the metrics backend
pub mod metric;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
