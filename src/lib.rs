//! Human-readable descriptions for HTTP status codes.
//!
//! ```
//! use status_messages::{create_status, get_status_message};
//!
//! assert_eq!(
//!     get_status_message(404, Some("Try again later.")),
//!     "Not Found: The requested resource could not be found. Try again later."
//! );
//! assert_eq!(create_status(999, None).status_code, 999);
//! ```

pub mod http;

pub use http::class::StatusClass;
pub use http::error::StatusError;
pub use http::registry::StatusRegistry;
pub use http::result::StatusResult;
pub use http::status::Status;
pub use http::{FALLBACK_MESSAGE, create_status, get_status_message};
