use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid URL scheme {protocol:?}: expected a letter followed by letters, digits, '+', '-' or '.'")]
    InvalidProtocol { protocol: String },
}

/// Which literals the paired tokenizer recognizes.
///
/// The escaper must agree with the tokenizer: a scheme the tokenizer accepts
/// but the escaper does not know about produces markdown that re-parses into
/// a link. Deserialized options (missing keys take the defaults) skip scheme
/// validation until [`EscapeOptions::validated`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EscapeOptions {
    protocols: Vec<String>,
    www: bool,
    email: bool,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        Self {
            protocols: vec!["http".into(), "https".into(), "ftp".into()],
            www: true,
            email: true,
        }
    }
}

pub(crate) fn scheme_regex() -> &'static Regex {
    static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    SCHEME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*$").expect("Invalid scheme regex"))
}

impl EscapeOptions {
    /// Options for the given schemes (stored lowercase).
    pub fn new<I, S>(protocols: I, www: bool, email: bool) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized = Vec::new();
        for protocol in protocols {
            let protocol = protocol.into();
            if !scheme_regex().is_match(&protocol) {
                return Err(OptionsError::InvalidProtocol { protocol });
            }
            let protocol = protocol.to_ascii_lowercase();
            if !normalized.contains(&protocol) {
                normalized.push(protocol);
            }
        }
        Ok(Self {
            protocols: normalized,
            www,
            email,
        })
    }

    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }

    pub fn www(&self) -> bool {
        self.www
    }

    pub fn email(&self) -> bool {
        self.email
    }

    /// Re-validate options that came in through deserialization.
    pub fn validated(self) -> Result<Self, OptionsError> {
        Self::new(self.protocols, self.www, self.email)
    }

    pub(crate) fn longest_protocol(&self) -> usize {
        self.protocols.iter().map(String::len).max().unwrap_or(0)
    }
}
