//! Transport profiles accepted by the routing upstream.

use std::str::FromStr;

use crate::http::error::GatewayError;

/// Travel mode used by the routing upstream to select its road network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteProfile {
    Driving,
    Walking,
    Cycling,
    Motorcycle,
}

impl RouteProfile {
    /// Path segment form, as the upstream expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteProfile::Driving => "driving",
            RouteProfile::Walking => "walking",
            RouteProfile::Cycling => "cycling",
            RouteProfile::Motorcycle => "motorcycle",
        }
    }
}

impl FromStr for RouteProfile {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(RouteProfile::Driving),
            "walking" => Ok(RouteProfile::Walking),
            "cycling" => Ok(RouteProfile::Cycling),
            "motorcycle" => Ok(RouteProfile::Motorcycle),
            _ => Err(GatewayError::InvalidProfile),
        }
    }
}

impl std::fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_supported_profiles() {
        assert_eq!("driving".parse::<RouteProfile>().unwrap(), RouteProfile::Driving);
        assert_eq!("walking".parse::<RouteProfile>().unwrap(), RouteProfile::Walking);
        assert_eq!("cycling".parse::<RouteProfile>().unwrap(), RouteProfile::Cycling);
        assert_eq!(
            "motorcycle".parse::<RouteProfile>().unwrap(),
            RouteProfile::Motorcycle
        );
    }

    #[test]
    fn test_rejects_unknown_profile() {
        assert!("flying".parse::<RouteProfile>().is_err());
        assert!("".parse::<RouteProfile>().is_err());
    }

    #[test]
    fn test_is_case_sensitive() {
        assert!("Driving".parse::<RouteProfile>().is_err());
    }

    #[test]
    fn test_round_trips_to_path_segment() {
        assert_eq!(RouteProfile::Cycling.as_str(), "cycling");
        assert_eq!(RouteProfile::Motorcycle.to_string(), "motorcycle");
    }
}
