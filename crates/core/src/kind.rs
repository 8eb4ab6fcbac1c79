use core::str::FromStr;

use crate::StoreError;

/// Closed set of collections exposed by the API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Users,
    Posts,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Users, Kind::Posts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Users => "users",
            Kind::Posts => "posts",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = StoreError;

    /// Names are matched exactly; `Users` or ` users` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Kind::Users),
            "posts" => Ok(Kind::Posts),
            other => Err(StoreError::unknown_kind(other)),
        }
    }
}
