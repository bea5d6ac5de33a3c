//! Validated href text.

use std::fmt;
use std::str::FromStr;

use http::Uri;

/// An href, validated on construction and kept exactly as written.
///
/// Validation goes through [`http::Uri`], which accepts absolute URIs,
/// authority-form references, and relative references. `http::Uri`
/// cannot represent an RFC 3986 fragment, so the parsed form is not
/// stored; serialization and display use the original text, and
/// `#fragment` suffixes survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href {
    text: String,
}

impl Href {
    /// The href exactly as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Href {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uri>()?;
        Ok(Href { text: s.to_owned() })
    }
}

impl From<Uri> for Href {
    fn from(uri: Uri) -> Self {
        Href {
            text: uri.to_string(),
        }
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_text_verbatim() {
        let href: Href = "http://api.x.io/orders/42#summary".parse().unwrap();
        assert_eq!(href.as_str(), "http://api.x.io/orders/42#summary");
        assert_eq!(href.to_string(), "http://api.x.io/orders/42#summary");

        let href: Href = "http://localhost:80".parse().unwrap();
        assert_eq!(href.as_str(), "http://localhost:80");
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!("::".parse::<Href>().is_err());
        assert!("".parse::<Href>().is_err());
    }

    #[test]
    fn test_relative_and_authority_forms() {
        for text in ["/", "/fizzbuzz?number=1", "uri"] {
            let href: Href = text.parse().unwrap();
            assert_eq!(href.as_str(), text);
        }
    }

    #[test]
    fn test_from_uri() {
        let uri: Uri = "http://api.x.io/orders/42".parse().unwrap();
        assert_eq!(Href::from(uri).as_str(), "http://api.x.io/orders/42");
    }
}
