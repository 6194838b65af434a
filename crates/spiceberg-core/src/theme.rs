#![forbid(unsafe_code)]

//! Theme palettes and the page-global style variables they drive.
//!
//! A [`Theme`] is an immutable bundle of colour strings. The set of themes
//! is a fixed [`ThemeTable`]; lookups with an unknown key return `None` and
//! callers treat that as a no-op.

use std::fmt;

/// Page-global CSS custom property written by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVar {
    PrimaryBg,
    SecondaryBg,
    Accent,
    TextPrimary,
    TextSecondary,
    Glow,
    Particle,
}

impl ThemeVar {
    /// Every variable, in the order they are applied.
    pub const ALL: [Self; 7] = [
        Self::PrimaryBg,
        Self::SecondaryBg,
        Self::Accent,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::Glow,
        Self::Particle,
    ];

    /// CSS custom property name, including the leading `--`.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::PrimaryBg => "--primary-bg",
            Self::SecondaryBg => "--secondary-bg",
            Self::Accent => "--accent-color",
            Self::TextPrimary => "--text-primary",
            Self::TextSecondary => "--text-secondary",
            Self::Glow => "--glow-color",
            Self::Particle => "--particle-color",
        }
    }
}

impl fmt::Display for ThemeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Named colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub key: &'static str,
    /// Human-readable name shown in the theme indicator.
    pub name: &'static str,
    pub primary_bg: &'static str,
    pub secondary_bg: &'static str,
    pub accent: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub glow: &'static str,
    pub particle: &'static str,
}

impl Theme {
    #[must_use]
    pub const fn value(&self, var: ThemeVar) -> &'static str {
        match var {
            ThemeVar::PrimaryBg => self.primary_bg,
            ThemeVar::SecondaryBg => self.secondary_bg,
            ThemeVar::Accent => self.accent,
            ThemeVar::TextPrimary => self.text_primary,
            ThemeVar::TextSecondary => self.text_secondary,
            ThemeVar::Glow => self.glow,
            ThemeVar::Particle => self.particle,
        }
    }

    /// `(variable, value)` pairs in application order.
    pub fn vars(&self) -> impl Iterator<Item = (ThemeVar, &'static str)> + '_ {
        ThemeVar::ALL.into_iter().map(|var| (var, self.value(var)))
    }

    /// Glow shadow applied to particles rendered in this theme.
    #[must_use]
    pub fn particle_shadow(&self) -> String {
        format!("0 0 10px {}", self.particle)
    }
}

pub const TRUFFLE: Theme = Theme {
    key: "truffle",
    name: "Midnight Truffle",
    primary_bg: "#0a0a0a",
    secondary_bg: "#1a1a1a",
    accent: "#d4af37",
    text_primary: "#ffffff",
    text_secondary: "#b0b0b0",
    glow: "rgba(212, 175, 55, 0.3)",
    particle: "#d4af37",
};

pub const SAFFRON: Theme = Theme {
    key: "saffron",
    name: "Sunset Saffron",
    primary_bg: "#1a0f0a",
    secondary_bg: "#2d1f14",
    accent: "#ff6b35",
    text_primary: "#fff8f0",
    text_secondary: "#ffb088",
    glow: "rgba(255, 107, 53, 0.4)",
    particle: "#ff6b35",
};

pub const OCEAN: Theme = Theme {
    key: "ocean",
    name: "Ocean Pearl",
    primary_bg: "#001a33",
    secondary_bg: "#003366",
    accent: "#00d9ff",
    text_primary: "#e6f7ff",
    text_secondary: "#80d4ff",
    glow: "rgba(0, 217, 255, 0.4)",
    particle: "#00d9ff",
};

pub const EMBER: Theme = Theme {
    key: "ember",
    name: "Ember & Smoke",
    primary_bg: "#1a0505",
    secondary_bg: "#330a0a",
    accent: "#ff4500",
    text_primary: "#fff0f0",
    text_secondary: "#ff9980",
    glow: "rgba(255, 69, 0, 0.4)",
    particle: "#ff4500",
};

/// Fixed table of themes, looked up by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTable {
    themes: Vec<Theme>,
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeTable {
    /// The four palettes the landing page ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![TRUFFLE, SAFFRON, OCEAN, EMBER])
    }

    /// Build a table; later entries with a duplicate key are dropped.
    #[must_use]
    pub fn new(themes: Vec<Theme>) -> Self {
        let mut unique: Vec<Theme> = Vec::with_capacity(themes.len());
        for theme in themes {
            if !unique.iter().any(|t| t.key == theme.key) {
                unique.push(theme);
            }
        }
        Self { themes: unique }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|t| t.key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_themes() {
        let table = ThemeTable::builtin();
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            ["truffle", "saffron", "ocean", "ember"]
        );
    }

    #[test]
    fn lookup_unknown_key_is_none() {
        assert!(ThemeTable::builtin().get("nonexistent").is_none());
    }

    #[test]
    fn vars_cover_every_css_property_once() {
        let names: Vec<_> = OCEAN.vars().map(|(var, _)| var.css_name()).collect();
        assert_eq!(
            names,
            [
                "--primary-bg",
                "--secondary-bg",
                "--accent-color",
                "--text-primary",
                "--text-secondary",
                "--glow-color",
                "--particle-color",
            ]
        );
    }

    #[test]
    fn value_maps_each_slot() {
        assert_eq!(EMBER.value(ThemeVar::Accent), "#ff4500");
        assert_eq!(EMBER.value(ThemeVar::Glow), "rgba(255, 69, 0, 0.4)");
        assert_eq!(SAFFRON.value(ThemeVar::TextSecondary), "#ffb088");
    }

    #[test]
    fn particle_shadow_uses_particle_colour() {
        assert_eq!(TRUFFLE.particle_shadow(), "0 0 10px #d4af37");
    }

    #[test]
    fn duplicate_keys_keep_first_entry() {
        let shadow = Theme {
            name: "Shadow Truffle",
            ..TRUFFLE
        };
        let table = ThemeTable::new(vec![TRUFFLE, shadow]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("truffle").map(|t| t.name), Some("Midnight Truffle"));
    }
}
