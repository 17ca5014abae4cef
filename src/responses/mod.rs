pub mod errors;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use errors::{error_to_response, html_error_response, ResultResp};
pub use html::html_response;
pub use redirect::{clear_session_cookie, redirect_response, session_cookie};
pub use xlsx::xlsx_response;
