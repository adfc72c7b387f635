pub mod class;
pub mod error;
pub mod registry;
pub mod result;
pub mod status;

use crate::http::registry::StatusRegistry;
use crate::http::result::StatusResult;

/// Used for every code the registry doesn't know.
pub const FALLBACK_MESSAGE: &str = "Unknown Status Code: An unexpected error occurred.";

/// Description for `status_code`, followed by `custom_message` when one is
/// given. Unknown codes get [`FALLBACK_MESSAGE`]. An empty custom message is
/// the same as none, so the result never ends in a stray space.
pub fn get_status_message(status_code: i64, custom_message: Option<&str>) -> String {
    let base = StatusRegistry::lookup(status_code).unwrap_or_else(|| {
        log::trace!("no description for status code {}, using fallback", status_code);
        FALLBACK_MESSAGE
    });

    match custom_message {
        Some(custom) if !custom.is_empty() => format!("{} {}", base, custom),
        _ => base.to_string(),
    }
}

pub fn create_status(status_code: i64, custom_message: Option<&str>) -> StatusResult {
    StatusResult {
        status_code,
        message: get_status_message(status_code, custom_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::status::Status;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_known_codes_return_description() {
        init_logger();
        for status in StatusRegistry::iter() {
            assert_eq!(
                get_status_message(i64::from(status.code_num), None),
                status.description
            );
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        init_logger();
        for code in [999, 0, -1, 70_000] {
            assert_eq!(get_status_message(code, None), FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_custom_message_appended_with_single_space() {
        assert_eq!(
            get_status_message(404, Some("Try again later.")),
            "Not Found: The requested resource could not be found. Try again later."
        );
        assert_eq!(
            get_status_message(404, None),
            "Not Found: The requested resource could not be found."
        );
    }

    #[test]
    fn test_empty_custom_message_is_ignored() {
        assert_eq!(get_status_message(404, Some("")), Status::NOT_FOUND.description);
        assert_eq!(get_status_message(12, Some("")), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_custom_message_kept_verbatim() {
        assert_eq!(
            get_status_message(200, Some("  padded ")),
            "OK: The request has succeeded.   padded "
        );
    }

    #[test]
    fn test_create_status() {
        assert_eq!(
            create_status(201, None),
            StatusResult {
                status_code: 201,
                message: "Created: The request has been fulfilled and a new resource has been created."
                    .to_string(),
            }
        );
        assert_eq!(
            create_status(999, Some("oops")),
            StatusResult {
                status_code: 999,
                message: "Unknown Status Code: An unexpected error occurred. oops".to_string(),
            }
        );
    }

    #[test]
    fn test_create_status_echoes_code() {
        assert_eq!(create_status(-42, None).status_code, -42);
        assert_eq!(create_status(i64::MAX, None).status_code, i64::MAX);
    }
}
