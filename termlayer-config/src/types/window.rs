//! Window launch and appearance types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Launch Types
// ============================================================================

/// Window state on launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LaunchMode {
    /// Normal window at the initial size (default)
    #[default]
    Default,
    /// Maximized window
    Maximized,
    /// Fullscreen window
    Fullscreen,
    /// Focus mode (no tab row or title bar)
    Focus,
    /// Maximized window in focus mode
    MaximizedFocus,
}

/// Initial window position, written as `"x,y"` in settings.
///
/// Either coordinate may be omitted (`",200"`, `"100,"`, `""`), in which case
/// the window system picks that coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LaunchPosition {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl LaunchPosition {
    pub const fn new(x: Option<i64>, y: Option<i64>) -> Self {
        Self { x, y }
    }
}

impl FromStr for LaunchPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() > 2 {
            return Err(format!("expected \"x,y\", found \"{s}\""));
        }

        let coordinate = |part: Option<&&str>| -> Result<Option<i64>, String> {
            match part {
                None => Ok(None),
                Some(text) if text.is_empty() => Ok(None),
                Some(text) => text
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|e| format!("invalid coordinate \"{text}\": {e}")),
            }
        };

        Ok(Self {
            x: coordinate(parts.first())?,
            y: coordinate(parts.get(1))?,
        })
    }
}

impl TryFrom<String> for LaunchPosition {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LaunchPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(x) = self.x {
            write!(f, "{x}")?;
        }
        f.write_str(",")?;
        if let Some(y) = self.y {
            write!(f, "{y}")?;
        }
        Ok(())
    }
}

impl From<LaunchPosition> for String {
    fn from(value: LaunchPosition) -> Self {
        value.to_string()
    }
}

// ============================================================================
// Appearance Types
// ============================================================================

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementTheme {
    /// Follow the operating system theme (default)
    #[default]
    System,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_position_parse() {
        assert_eq!(
            "100,200".parse::<LaunchPosition>().unwrap(),
            LaunchPosition::new(Some(100), Some(200))
        );
        assert_eq!(
            ",200".parse::<LaunchPosition>().unwrap(),
            LaunchPosition::new(None, Some(200))
        );
        assert_eq!(
            " -5 , ".parse::<LaunchPosition>().unwrap(),
            LaunchPosition::new(Some(-5), None)
        );
        assert_eq!(
            "".parse::<LaunchPosition>().unwrap(),
            LaunchPosition::default()
        );
        assert!("1,2,3".parse::<LaunchPosition>().is_err());
        assert!("left,top".parse::<LaunchPosition>().is_err());
    }

    #[test]
    fn test_launch_position_display() {
        assert_eq!(LaunchPosition::new(Some(10), Some(20)).to_string(), "10,20");
        assert_eq!(LaunchPosition::new(None, Some(20)).to_string(), ",20");
        assert_eq!(LaunchPosition::default().to_string(), ",");
    }

    #[test]
    fn test_launch_position_serde() {
        let pos: LaunchPosition = serde_json::from_str("\"7,8\"").unwrap();
        assert_eq!(pos, LaunchPosition::new(Some(7), Some(8)));
        assert!(serde_json::from_str::<LaunchPosition>("[7, 8]").is_err());
        assert_eq!(serde_json::to_string(&pos).unwrap(), "\"7,8\"");
    }

    #[test]
    fn test_enum_json_names() {
        let mode: LaunchMode = serde_json::from_str("\"maximizedFocus\"").unwrap();
        assert_eq!(mode, LaunchMode::MaximizedFocus);
        let theme: ElementTheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, ElementTheme::Dark);
        assert!(serde_json::from_str::<ElementTheme>("\"Dark\"").is_err());
    }
}
