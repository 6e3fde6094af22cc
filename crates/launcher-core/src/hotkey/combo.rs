//! Hotkey combinations
//!
//! A combination is a modifier set plus one key, written the same way the
//! platform hotkey parsers accept it: `Ctrl+Alt+O`.

use std::fmt;
use std::str::FromStr;

/// Modifier keys, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ctrl" | "control" => Ok(Modifier::Ctrl),
            "alt" | "option" => Ok(Modifier::Alt),
            "shift" => Ok(Modifier::Shift),
            "super" | "cmd" | "command" | "meta" | "win" => Ok(Modifier::Super),
            _ => Err(format!("Unknown modifier: {s}")),
        }
    }
}

/// Named keys that are not a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Space,
    Enter,
    Tab,
    Escape,
}

impl NamedKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedKey::Space => "Space",
            NamedKey::Enter => "Enter",
            NamedKey::Tab => "Tab",
            NamedKey::Escape => "Escape",
        }
    }
}

/// The non-modifier part of a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `A`-`Z` or `0`-`9`, stored uppercase
    Char(char),
    /// `F1`-`F24`
    Function(u8),
    Named(NamedKey),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Function(n) => write!(f, "F{n}"),
            Key::Named(named) => f.write_str(named.as_str()),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let mut chars = upper.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_alphanumeric()
        {
            return Ok(Key::Char(c));
        }

        match upper.as_str() {
            "SPACE" => return Ok(Key::Named(NamedKey::Space)),
            "ENTER" | "RETURN" => return Ok(Key::Named(NamedKey::Enter)),
            "TAB" => return Ok(Key::Named(NamedKey::Tab)),
            "ESC" | "ESCAPE" => return Ok(Key::Named(NamedKey::Escape)),
            _ => {}
        }

        if let Some(n) = upper.strip_prefix('F').and_then(|n| n.parse::<u8>().ok())
            && (1..=24).contains(&n)
        {
            return Ok(Key::Function(n));
        }

        Err(format!("Unknown key: {s}"))
    }
}

/// A modifier set plus a key, e.g. `Ctrl+Alt+O`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotkeyCombo {
    modifiers: Vec<Modifier>,
    key: Key,
}

impl HotkeyCombo {
    /// Modifiers are sorted and deduplicated, so `Alt+Ctrl` equals `Ctrl+Alt`.
    /// Character keys are uppercased.
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        let mut modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        modifiers.sort();
        modifiers.dedup();
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_uppercase()),
            other => other,
        };
        Self { modifiers, key }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> Key {
        self.key
    }
}

impl fmt::Display for HotkeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for HotkeyCombo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let Some((key, modifiers)) = parts.split_last() else {
            return Err("Empty hotkey".into());
        };
        if key.is_empty() {
            return Err(format!("Missing key in hotkey: {s}"));
        }

        let modifiers = modifiers
            .iter()
            .map(|m| m.parse::<Modifier>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HotkeyCombo::new(modifiers, key.parse()?))
    }
}
