//! Routes of the viewer shell.

use std::fmt;

const PASTE_PREFIX: &str = "paste";

/// Where the shell is pointed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Paste {
        id: String,
    },
}

impl Route {
    /// Route for a paste, or `Home` when `id` is blank.
    pub fn paste(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.trim().is_empty() {
            Self::Home
        } else {
            Self::Paste { id }
        }
    }

    /// Parse an absolute path such as `/` or `/paste/{id}`.
    ///
    /// Unknown paths resolve to [`Route::Home`]. The identifier segment is
    /// percent-decoded; a trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(PASTE_PREFIX), Some(raw_id), None) => match urlencoding::decode(raw_id) {
                Ok(id) => Self::paste(id.into_owned()),
                Err(_) => Self::Home,
            },
            _ => Self::Home,
        }
    }

    /// Interpret free-form user input as a route.
    ///
    /// Input starting with `/` is parsed as a path; anything else is a bare
    /// identifier.
    pub fn from_user_input(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with('/') {
            Self::parse(input)
        } else {
            Self::paste(input)
        }
    }

    /// Absolute path of this route with the identifier percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Paste { id } => format!("/{}/{}", PASTE_PREFIX, urlencoding::encode(id)),
        }
    }

    pub fn paste_id(&self) -> Option<&str> {
        match self {
            Self::Paste { id } => Some(id.as_str()),
            Self::Home => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parses_home_and_paste_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/paste/abc-123"), Route::paste("abc-123"));
        assert_eq!(Route::parse("/paste/abc-123/"), Route::paste("abc-123"));
    }

    #[test]
    fn unknown_or_empty_paths_fall_back_home() {
        assert_eq!(Route::parse("/paste/"), Route::Home);
        assert_eq!(Route::parse("/paste/a/b"), Route::Home);
        assert_eq!(Route::parse("/settings"), Route::Home);
        assert_eq!(Route::paste("   "), Route::Home);
    }

    #[test]
    fn path_round_trips_awkward_identifiers() {
        let route = Route::paste("a b/c");
        assert_eq!(route.path(), "/paste/a%20b%2Fc");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn user_input_accepts_ids_and_paths() {
        assert_eq!(Route::from_user_input("  abc "), Route::paste("abc"));
        assert_eq!(Route::from_user_input("/paste/xyz"), Route::paste("xyz"));
        assert_eq!(Route::from_user_input(""), Route::Home);
    }
}
