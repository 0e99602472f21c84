//! Key chord parser.
//!
//! Parses key strings like "ctrl+shift+t" into [`KeyChord`] values. Parsing is
//! case-insensitive and the canonical rendering is lower-case with modifiers in
//! `ctrl+alt+shift+win` order, so `"Shift+Ctrl+T"` and `"ctrl+shift+t"` name the
//! same chord.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Set of active modifiers for a key chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub win: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.win)
    }
}

/// Keys that are spelled out by name rather than by the character they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
    /// Function keys F1-F24
    Function(u8),
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Escape,
    Menu,
    Plus,
    Minus,
    /// Number pad digits 0-9
    Numpad(u8),
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedKey::Function(n) => write!(f, "f{n}"),
            NamedKey::Numpad(n) => write!(f, "numpad{n}"),
            NamedKey::Enter => f.write_str("enter"),
            NamedKey::Tab => f.write_str("tab"),
            NamedKey::Space => f.write_str("space"),
            NamedKey::Backspace => f.write_str("backspace"),
            NamedKey::Delete => f.write_str("delete"),
            NamedKey::Insert => f.write_str("insert"),
            NamedKey::Home => f.write_str("home"),
            NamedKey::End => f.write_str("end"),
            NamedKey::PageUp => f.write_str("pgup"),
            NamedKey::PageDown => f.write_str("pgdn"),
            NamedKey::Up => f.write_str("up"),
            NamedKey::Down => f.write_str("down"),
            NamedKey::Left => f.write_str("left"),
            NamedKey::Right => f.write_str("right"),
            NamedKey::Escape => f.write_str("esc"),
            NamedKey::Menu => f.write_str("menu"),
            NamedKey::Plus => f.write_str("plus"),
            NamedKey::Minus => f.write_str("minus"),
            NamedKey::NumpadAdd => f.write_str("numpad_plus"),
            NamedKey::NumpadSubtract => f.write_str("numpad_minus"),
            NamedKey::NumpadMultiply => f.write_str("numpad_multiply"),
            NamedKey::NumpadDivide => f.write_str("numpad_divide"),
            NamedKey::NumpadDecimal => f.write_str("numpad_period"),
        }
    }
}

/// The actual key (either a character or a named key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParsedKey {
    /// A single character key, stored lower-case (e.g., 'a', '1', ',')
    Character(char),
    /// A named key (e.g., F1, Enter, Escape)
    Named(NamedKey),
}

/// A parsed key chord (modifiers + key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl KeyChord {
    pub fn new(modifiers: Modifiers, key: ParsedKey) -> Self {
        Self { modifiers, key }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.modifiers.ctrl {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        if self.modifiers.win {
            parts.push("win".to_string());
        }

        match &self.key {
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(n.to_string()),
        }

        write!(f, "{}", parts.join("+"))
    }
}

impl FromStr for KeyChord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_chord(s)
    }
}

impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_key_chord(&text).map_err(serde::de::Error::custom)
    }
}

/// Parse a key chord string into a KeyChord.
///
/// Supported format: "modifier+modifier+key"
///
/// Modifiers:
/// - `ctrl`, `control`
/// - `alt`
/// - `shift`
/// - `win`, `super`, `cmd`, `meta`
///
/// Keys:
/// - Single characters: `a`, `1`, `,`, etc.
/// - Named keys: `f1`-`f24`, `enter`, `esc`, `space`, `tab`, `plus`, `numpad0`, etc.
pub fn parse_key_chord(s: &str) -> Result<KeyChord, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key chord".to_string()));
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        if part.is_empty() {
            return Err(ParseError(format!(
                "Empty key in chord '{}' (use 'plus' for the + key)",
                s
            )));
        }

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "win" | "super" | "cmd" | "meta" => {
                modifiers.win = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError(
                "Key chord ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(KeyChord { modifiers, key })
}

/// Parse a key string into a ParsedKey.
fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if let Some(named) = parse_named_key(s) {
        return Ok(ParsedKey::Named(named));
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(ParsedKey::Character(fold_case(c)));
    }

    Err(ParseError(format!("Unknown key: '{}'", s)))
}

/// Lowercase a key character, keeping it as is when its lowercase form is
/// more than one character.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Parse a named key (case-insensitive).
fn parse_named_key(s: &str) -> Option<NamedKey> {
    let lower = s.to_lowercase();

    if let Some(n) = lower.strip_prefix("numpad")
        && let Ok(digit) = n.parse::<u8>()
    {
        return (digit <= 9).then_some(NamedKey::Numpad(digit));
    }
    if let Some(n) = lower.strip_prefix('f')
        && let Ok(number) = n.parse::<u8>()
    {
        return (1..=24).contains(&number).then_some(NamedKey::Function(number));
    }

    match lower.as_str() {
        "enter" | "return" => Some(NamedKey::Enter),
        "tab" => Some(NamedKey::Tab),
        "space" => Some(NamedKey::Space),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pgup" | "pageup" => Some(NamedKey::PageUp),
        "pgdn" | "pagedown" => Some(NamedKey::PageDown),
        "up" => Some(NamedKey::Up),
        "down" => Some(NamedKey::Down),
        "left" => Some(NamedKey::Left),
        "right" => Some(NamedKey::Right),
        "esc" | "escape" => Some(NamedKey::Escape),
        "app" | "menu" => Some(NamedKey::Menu),
        "plus" => Some(NamedKey::Plus),
        "minus" => Some(NamedKey::Minus),
        "numpad_plus" | "numpad_add" => Some(NamedKey::NumpadAdd),
        "numpad_minus" | "numpad_subtract" => Some(NamedKey::NumpadSubtract),
        "numpad_multiply" => Some(NamedKey::NumpadMultiply),
        "numpad_divide" => Some(NamedKey::NumpadDivide),
        "numpad_period" | "numpad_decimal" => Some(NamedKey::NumpadDecimal),
        _ => None,
    }
}
