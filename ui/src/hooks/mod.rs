pub mod use_fetch;
pub mod use_request;
pub mod use_require_session;
pub mod use_title;

pub use use_fetch::{FetchHandle, Requester, use_fetch};
pub use use_request::{RequestHandle, use_request};
pub use use_require_session::use_require_session;
pub use use_title::use_title;
