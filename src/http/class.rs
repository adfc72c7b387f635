use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Response class, taken from the hundreds digit of a status code.
#[derive(EnumString, IntoStaticStr, EnumIter, Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum StatusClass {
    #[strum(serialize = "informational")]
    Informational,
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "redirection")]
    Redirection,
    #[strum(serialize = "client-error")]
    ClientError,
    #[strum(serialize = "server-error")]
    ServerError,
}

impl StatusClass {
    /// `None` for anything outside 100..=599.
    pub fn of(code: i64) -> Option<StatusClass> {
        match code {
            100..=199 => Some(StatusClass::Informational),
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusClass::ClientError | StatusClass::ServerError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_of_boundaries() {
        assert_eq!(StatusClass::of(99), None);
        assert_eq!(StatusClass::of(100), Some(StatusClass::Informational));
        assert_eq!(StatusClass::of(299), Some(StatusClass::Success));
        assert_eq!(StatusClass::of(300), Some(StatusClass::Redirection));
        assert_eq!(StatusClass::of(451), Some(StatusClass::ClientError));
        assert_eq!(StatusClass::of(599), Some(StatusClass::ServerError));
        assert_eq!(StatusClass::of(600), None);
        assert_eq!(StatusClass::of(-404), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(StatusClass::ClientError.to_string(), "client-error");
        let name: &'static str = StatusClass::Informational.into();
        assert_eq!(name, "informational");

        for class in StatusClass::iter() {
            assert_eq!(StatusClass::from_str(&class.to_string()).unwrap(), class);
        }
        assert!(StatusClass::from_str("ClientError").is_err());
    }

    #[test]
    fn test_is_error() {
        let errors: Vec<_> = StatusClass::iter().filter(StatusClass::is_error).collect();
        assert_eq!(errors, vec![StatusClass::ClientError, StatusClass::ServerError]);
    }
}
