use crate::http::class::StatusClass;
use crate::http::error::StatusError;
use crate::http::registry::StatusRegistry;
use std::fmt;
use std::str::FromStr;

/// A registered HTTP status: its numeric code and the
/// `"<Reason Phrase>: <explanation>"` description handed out to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    pub code_num: u16,
    pub description: &'static str,
}

impl Status {
    pub const CONTINUE: Status = Status {
        code_num: 100,
        description: "Continue: The server has received the request headers and the client should proceed to send the request body.",
    };
    pub const SWITCHING_PROTOCOLS: Status = Status {
        code_num: 101,
        description: "Switching Protocols: The server is switching protocols as requested by the client.",
    };
    pub const PROCESSING: Status = Status {
        code_num: 102,
        description: "Processing: The server has received and is processing the request, but no response is available yet.",
    };
    pub const OK: Status = Status {
        code_num: 200,
        description: "OK: The request has succeeded.",
    };
    pub const CREATED: Status = Status {
        code_num: 201,
        description: "Created: The request has been fulfilled and a new resource has been created.",
    };
    pub const ACCEPTED: Status = Status {
        code_num: 202,
        description: "Accepted: The request has been accepted for processing, but the processing is not yet complete.",
    };
    pub const NON_AUTHORITATIVE_INFORMATION: Status = Status {
        code_num: 203,
        description: "Non-Authoritative Information: The request was successful but the information is from a third-party source.",
    };
    pub const NO_CONTENT: Status = Status {
        code_num: 204,
        description: "No Content: The server successfully processed the request, but is not returning any content.",
    };
    pub const RESET_CONTENT: Status = Status {
        code_num: 205,
        description: "Reset Content: The server successfully processed the request, but the client should reset the view.",
    };
    pub const PARTIAL_CONTENT: Status = Status {
        code_num: 206,
        description: "Partial Content: The server is delivering only part of the resource due to a range header sent by the client.",
    };
    pub const MULTI_STATUS: Status = Status {
        code_num: 207,
        description: "Multi-Status: The message body contains a number of separate response codes, depending on the request.",
    };
    pub const ALREADY_REPORTED: Status = Status {
        code_num: 208,
        description: "Already Reported: The members of a DAV binding have already been enumerated in a previous part of the response.",
    };
    pub const IM_USED: Status = Status {
        code_num: 226,
        description: "IM Used: The server has fulfilled a request for a resource using the IMS request header.",
    };
    pub const MULTIPLE_CHOICES: Status = Status {
        code_num: 300,
        description: "Multiple Choices: There are multiple options for the resource that the client may follow.",
    };
    pub const MOVED_PERMANENTLY: Status = Status {
        code_num: 301,
        description: "Moved Permanently: The resource has been permanently moved to a new location.",
    };
    pub const FOUND: Status = Status {
        code_num: 302,
        description: "Found: The resource is temporarily located at a different URI.",
    };
    pub const SEE_OTHER: Status = Status {
        code_num: 303,
        description: "See Other: The response to the request can be found under a different URI using the GET method.",
    };
    pub const NOT_MODIFIED: Status = Status {
        code_num: 304,
        description: "Not Modified: The resource has not been modified since the last request.",
    };
    pub const USE_PROXY: Status = Status {
        code_num: 305,
        description: "Use Proxy: The requested resource must be accessed through a proxy.",
    };
    pub const SWITCH_PROXY: Status = Status {
        code_num: 306,
        description: "Switch Proxy: No longer used. Originally meant to specify a proxy that should be used.",
    };
    pub const TEMPORARY_REDIRECT: Status = Status {
        code_num: 307,
        description: "Temporary Redirect: The resource resides temporarily under a different URI.",
    };
    pub const PERMANENT_REDIRECT: Status = Status {
        code_num: 308,
        description: "Permanent Redirect: The resource has been permanently moved to a new URI.",
    };
    pub const BAD_REQUEST: Status = Status {
        code_num: 400,
        description: "Bad Request: The server could not understand the request due to invalid syntax.",
    };
    pub const UNAUTHORIZED: Status = Status {
        code_num: 401,
        description: "Unauthorized: Authentication is required to access this resource.",
    };
    pub const PAYMENT_REQUIRED: Status = Status {
        code_num: 402,
        description: "Payment Required: Reserved for future use; not yet implemented.",
    };
    pub const FORBIDDEN: Status = Status {
        code_num: 403,
        description: "Forbidden: You do not have permission to access this resource.",
    };
    pub const NOT_FOUND: Status = Status {
        code_num: 404,
        description: "Not Found: The requested resource could not be found.",
    };
    pub const METHOD_NOT_ALLOWED: Status = Status {
        code_num: 405,
        description: "Method Not Allowed: The request method is not supported for the requested resource.",
    };
    pub const NOT_ACCEPTABLE: Status = Status {
        code_num: 406,
        description: "Not Acceptable: The requested resource is capable of generating only content not acceptable according to the Accept headers sent in the request.",
    };
    pub const PROXY_AUTHENTICATION_REQUIRED: Status = Status {
        code_num: 407,
        description: "Proxy Authentication Required: The client must first authenticate itself with the proxy.",
    };
    pub const REQUEST_TIMEOUT: Status = Status {
        code_num: 408,
        description: "Request Timeout: The server timed out waiting for the request.",
    };
    pub const CONFLICT: Status = Status {
        code_num: 409,
        description: "Conflict: The request could not be completed due to a conflict with the current state of the resource.",
    };
    pub const GONE: Status = Status {
        code_num: 410,
        description: "Gone: The requested resource is no longer available and will not be available again.",
    };
    pub const LENGTH_REQUIRED: Status = Status {
        code_num: 411,
        description: "Length Required: The server refuses to accept the request without a defined Content-Length header.",
    };
    pub const PRECONDITION_FAILED: Status = Status {
        code_num: 412,
        description: "Precondition Failed: One or more conditions in the request header fields were evaluated and found to be false.",
    };
    pub const PAYLOAD_TOO_LARGE: Status = Status {
        code_num: 413,
        description: "Payload Too Large: The request entity is larger than the server is willing or able to process.",
    };
    pub const URI_TOO_LONG: Status = Status {
        code_num: 414,
        description: "URI Too Long: The URI provided was too long for the server to process.",
    };
    pub const UNSUPPORTED_MEDIA_TYPE: Status = Status {
        code_num: 415,
        description: "Unsupported Media Type: The request entity has a media type which the server or resource does not support.",
    };
    pub const RANGE_NOT_SATISFIABLE: Status = Status {
        code_num: 416,
        description: "Range Not Satisfiable: The server cannot provide the requested range of bytes.",
    };
    pub const EXPECTATION_FAILED: Status = Status {
        code_num: 417,
        description: "Expectation Failed: The server cannot meet the requirements of the Expect request-header field.",
    };
    pub const IM_A_TEAPOT: Status = Status {
        code_num: 418,
        description: "I’m a teapot: Any attempt to instruct a teapot to do something it cannot do will result in a “418 I’m a teapot” error response.",
    };
    pub const MISDIRECTED_REQUEST: Status = Status {
        code_num: 421,
        description: "Misdirected Request: The request was directed at a server that is not able to produce a response.",
    };
    pub const UNPROCESSABLE_ENTITY: Status = Status {
        code_num: 422,
        description: "Unprocessable Entity: The request was well-formed but was unable to be followed due to semantic errors.",
    };
    pub const LOCKED: Status = Status {
        code_num: 423,
        description: "Locked: The resource that is being accessed is locked.",
    };
    pub const FAILED_DEPENDENCY: Status = Status {
        code_num: 424,
        description: "Failed Dependency: The request failed due to a failure in a previous request.",
    };
    pub const UPGRADE_REQUIRED: Status = Status {
        code_num: 426,
        description: "Upgrade Required: The client should switch to a different protocol.",
    };
    pub const PRECONDITION_REQUIRED: Status = Status {
        code_num: 428,
        description: "Precondition Required: The origin server requires the request to be conditional.",
    };
    pub const TOO_MANY_REQUESTS: Status = Status {
        code_num: 429,
        description: "Too Many Requests: The user has sent too many requests in a given amount of time.",
    };
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: Status = Status {
        code_num: 431,
        description: "Request Header Fields Too Large: The server is unwilling to process the request because its header fields are too large.",
    };
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: Status = Status {
        code_num: 451,
        description: "Unavailable For Legal Reasons: The user requested an illegal resource, such as a web page censored by a legal authority.",
    };
    pub const INTERNAL_SERVER_ERROR: Status = Status {
        code_num: 500,
        description: "Internal Server Error: The server encountered an unexpected condition that prevented it from fulfilling the request.",
    };
    pub const NOT_IMPLEMENTED: Status = Status {
        code_num: 501,
        description: "Not Implemented: The server does not support the functionality required to fulfill the request.",
    };
    pub const BAD_GATEWAY: Status = Status {
        code_num: 502,
        description: "Bad Gateway: The server received an invalid response from an upstream server.",
    };
    pub const SERVICE_UNAVAILABLE: Status = Status {
        code_num: 503,
        description: "Service Unavailable: The server is currently unable to handle the request due to a temporary overload or maintenance of the server.",
    };
    pub const GATEWAY_TIMEOUT: Status = Status {
        code_num: 504,
        description: "Gateway Timeout: The server did not receive a timely response from an upstream server.",
    };
    pub const HTTP_VERSION_NOT_SUPPORTED: Status = Status {
        code_num: 505,
        description: "HTTP Version Not Supported: The server does not support the HTTP protocol version that was used in the request.",
    };
    pub const VARIANT_ALSO_NEGOTIATES: Status = Status {
        code_num: 506,
        description: "Variant Also Negotiates: The server has an internal configuration error: transparent content negotiation for the request results in a circular reference.",
    };
    pub const INSUFFICIENT_STORAGE: Status = Status {
        code_num: 507,
        description: "Insufficient Storage: The server is unable to store the representation needed to complete the request.",
    };
    pub const LOOP_DETECTED: Status = Status {
        code_num: 508,
        description: "Loop Detected: The server detected an infinite loop while processing the request.",
    };
    pub const NOT_EXTENDED: Status = Status {
        code_num: 510,
        description: "Not Extended: Further extensions to the request are required for the server to fulfill it.",
    };

    /// Every registered status, ascending by code.
    pub const ALL: [Status; 60] = [
        Status::CONTINUE,
        Status::SWITCHING_PROTOCOLS,
        Status::PROCESSING,
        Status::OK,
        Status::CREATED,
        Status::ACCEPTED,
        Status::NON_AUTHORITATIVE_INFORMATION,
        Status::NO_CONTENT,
        Status::RESET_CONTENT,
        Status::PARTIAL_CONTENT,
        Status::MULTI_STATUS,
        Status::ALREADY_REPORTED,
        Status::IM_USED,
        Status::MULTIPLE_CHOICES,
        Status::MOVED_PERMANENTLY,
        Status::FOUND,
        Status::SEE_OTHER,
        Status::NOT_MODIFIED,
        Status::USE_PROXY,
        Status::SWITCH_PROXY,
        Status::TEMPORARY_REDIRECT,
        Status::PERMANENT_REDIRECT,
        Status::BAD_REQUEST,
        Status::UNAUTHORIZED,
        Status::PAYMENT_REQUIRED,
        Status::FORBIDDEN,
        Status::NOT_FOUND,
        Status::METHOD_NOT_ALLOWED,
        Status::NOT_ACCEPTABLE,
        Status::PROXY_AUTHENTICATION_REQUIRED,
        Status::REQUEST_TIMEOUT,
        Status::CONFLICT,
        Status::GONE,
        Status::LENGTH_REQUIRED,
        Status::PRECONDITION_FAILED,
        Status::PAYLOAD_TOO_LARGE,
        Status::URI_TOO_LONG,
        Status::UNSUPPORTED_MEDIA_TYPE,
        Status::RANGE_NOT_SATISFIABLE,
        Status::EXPECTATION_FAILED,
        Status::IM_A_TEAPOT,
        Status::MISDIRECTED_REQUEST,
        Status::UNPROCESSABLE_ENTITY,
        Status::LOCKED,
        Status::FAILED_DEPENDENCY,
        Status::UPGRADE_REQUIRED,
        Status::PRECONDITION_REQUIRED,
        Status::TOO_MANY_REQUESTS,
        Status::REQUEST_HEADER_FIELDS_TOO_LARGE,
        Status::UNAVAILABLE_FOR_LEGAL_REASONS,
        Status::INTERNAL_SERVER_ERROR,
        Status::NOT_IMPLEMENTED,
        Status::BAD_GATEWAY,
        Status::SERVICE_UNAVAILABLE,
        Status::GATEWAY_TIMEOUT,
        Status::HTTP_VERSION_NOT_SUPPORTED,
        Status::VARIANT_ALSO_NEGOTIATES,
        Status::INSUFFICIENT_STORAGE,
        Status::LOOP_DETECTED,
        Status::NOT_EXTENDED,
    ];

    /// The reason phrase, e.g. `Not Found`.
    pub fn reason(&self) -> &'static str {
        self.description
            .split_once(": ")
            .map_or(self.description, |(reason, _)| reason)
    }

    pub fn explanation(&self) -> &'static str {
        self.description
            .split_once(": ")
            .map_or("", |(_, explanation)| explanation)
    }

    /// `None` when `code_num` is outside 100..=599, which only a hand-built
    /// `Status` can be.
    pub fn class(&self) -> Option<StatusClass> {
        StatusClass::of(i64::from(self.code_num))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code_num, self.reason())
    }
}

impl TryFrom<i64> for Status {
    type Error = StatusError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        StatusRegistry::get(code)
            .copied()
            .ok_or(StatusError::Unknown(code))
    }
}

impl FromStr for Status {
    type Err = StatusError;

    /// Accepts only the canonical decimal spelling, same as
    /// [`StatusRegistry::lookup_key`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i64 = s
            .parse()
            .ok()
            .filter(|code: &i64| code.to_string() == s)
            .ok_or_else(|| StatusError::InvalidCode(s.to_string()))?;
        Status::try_from(code)
    }
}
