use clap::ValueEnum;
use std::fmt;

/// How the value's quotes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Quote {
    /// `\"value\"`, survives one more pass through a shell.
    #[default]
    Escaped,
    /// `"value"`
    Plain,
}

/// A preprocessor definition, rendered as `-D KEY=\"value\"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub key: &'static str,
    pub value: String,
    pub quote: Quote,
}

impl Definition {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Definition {
            key,
            value: value.into(),
            quote: Quote::default(),
        }
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote {
            Quote::Escaped => write!(f, "-D {}=\\\"{}\\\"", self.key, self.value),
            Quote::Plain => write!(f, "-D {}=\"{}\"", self.key, self.value),
        }
    }
}
