use std::fmt;
use std::str::FromStr;
use crate::cache::enums::redis_mode::RedisMode;

impl RedisMode {
    pub const ALL: [RedisMode; 3] = [RedisMode::standalone, RedisMode::cluster, RedisMode::ring];

    pub fn as_str(&self) -> &'static str {
        match self {
            RedisMode::standalone => "standalone",
            RedisMode::cluster => "cluster",
            RedisMode::ring => "ring",
        }
    }

    /// The accepted values, as listed in error messages.
    pub fn allowed() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|mode| mode.as_str()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for RedisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedisMode {
    type Err = String;

    /// Case-sensitive; only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|mode| mode.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}
