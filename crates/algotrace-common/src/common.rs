//! Small enums shared between the printer, the instrumenter options and the CLI.

use serde::{Deserialize, Serialize};

/// Line terminator used when regenerating source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineKind {
    #[default]
    Lf,
    Crlf,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}
