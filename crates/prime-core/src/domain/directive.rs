//! Forced-GPU directive parsing.

use crate::error::OffloadError;
use std::fmt;

/// How the caller asked for a GPU to be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuDirective {
    /// Offload selection is left to the user or the driver.
    Disabled,
    /// Device 0 on a laptop PRIME layout.
    Integrated,
    /// Device 1 on a laptop PRIME layout.
    PrimeDiscrete,
    /// An explicit lowercase `vendor:device` identifier.
    DeviceId(String),
    /// A position in the probed device list.
    Index(usize),
}

impl GpuDirective {
    /// Parse a raw directive. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, OffloadError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(Self::Disabled);
        }

        if value.eq_ignore_ascii_case("integrated") {
            return Ok(Self::Integrated);
        }
        if value.eq_ignore_ascii_case("prime-discrete") {
            return Ok(Self::PrimeDiscrete);
        }
        if value.contains(':') {
            return Ok(Self::DeviceId(value.to_ascii_lowercase()));
        }

        value
            .parse::<usize>()
            .map(Self::Index)
            .map_err(|_| OffloadError::MalformedDirective {
                value: value.to_string(),
            })
    }

    /// Role directives are subject to the offload policy; explicit ones are not.
    pub const fn is_role(&self) -> bool {
        matches!(self, Self::Integrated | Self::PrimeDiscrete)
    }
}

impl fmt::Display for GpuDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str(""),
            Self::Integrated => f.write_str("integrated"),
            Self::PrimeDiscrete => f.write_str("prime-discrete"),
            Self::DeviceId(id) => f.write_str(id),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_disabled() {
        assert_eq!(GpuDirective::parse(""), Ok(GpuDirective::Disabled));
        assert_eq!(GpuDirective::parse("   "), Ok(GpuDirective::Disabled));
    }

    #[test]
    fn test_parse_roles() {
        assert_eq!(GpuDirective::parse("integrated"), Ok(GpuDirective::Integrated));
        assert_eq!(GpuDirective::parse("Prime-Discrete"), Ok(GpuDirective::PrimeDiscrete));
        assert!(GpuDirective::Integrated.is_role());
        assert!(!GpuDirective::Index(0).is_role());
    }

    #[test]
    fn test_parse_device_id_is_lowercased() {
        assert_eq!(
            GpuDirective::parse("10DE:25A2"),
            Ok(GpuDirective::DeviceId("10de:25a2".to_string()))
        );
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(GpuDirective::parse("2"), Ok(GpuDirective::Index(2)));
        assert_eq!(GpuDirective::parse(" 0\n"), Ok(GpuDirective::Index(0)));
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let err = GpuDirective::parse("discrete").unwrap_err();
        assert_eq!(
            err,
            OffloadError::MalformedDirective {
                value: "discrete".to_string()
            }
        );
        assert!(GpuDirective::parse("-1").is_err());
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(GpuDirective::PrimeDiscrete.to_string(), "prime-discrete");
        assert_eq!(GpuDirective::Index(3).to_string(), "3");
    }
}
