use std::fmt;

/// Post-processing transform applied to a looked-up value.
///
/// Parsing never fails: any name other than `upper`, `lower` or `dump`
/// (including the empty string) means "no transform".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// Return the value's textual form unchanged.
    #[default]
    None,
    /// Uppercase a string value.
    Upper,
    /// Lowercase a string value.
    Lower,
    /// Render `type(length) => literal` for inspection.
    Dump,
}

impl Modifier {
    pub fn parse(name: &str) -> Self {
        match name {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            "dump" => Self::Dump,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Dump => "dump",
        }
    }
}

impl From<&str> for Modifier {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<Option<&str>> for Modifier {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
