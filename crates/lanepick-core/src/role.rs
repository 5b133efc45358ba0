// Roles, tier badges and play-style intents.

use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A lane assignment. Each role owns one section in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    /// Marksman lane, labelled "ADC".
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Menu label, also used as the store section name.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "ADC",
            Role::Support => "Support",
        }
    }

    /// Key used by the statistics site for this role's table.
    pub fn site_key(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUPPORT",
        }
    }

    pub fn section(&self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Strength classification shown as a badge on the tier list, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Op,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Tier {
    pub const ALL: [Tier; 6] = [Tier::Op, Tier::One, Tier::Two, Tier::Three, Tier::Four, Tier::Five];

    /// Suffix of the badge image name, e.g. `OP` for `...-OP.png`.
    pub fn badge(&self) -> &'static str {
        match self {
            Tier::Op => "OP",
            Tier::One => "1",
            Tier::Two => "2",
            Tier::Three => "3",
            Tier::Four => "4",
            Tier::Five => "5",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}

// ---------------------------------------------------------------------------
// Play style
// ---------------------------------------------------------------------------

/// How "meta" the player wants the pick to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayStyle {
    Tryhard,
    Moderate,
    Feeder,
    Any,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 4] = [
        PlayStyle::Tryhard,
        PlayStyle::Moderate,
        PlayStyle::Feeder,
        PlayStyle::Any,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayStyle::Tryhard => "Tryhard",
            PlayStyle::Moderate => "Not too troll",
            PlayStyle::Feeder => "Feed my ass off",
            PlayStyle::Any => "Just hit me with something, fam",
        }
    }

    /// The fixed tier subset accepted for this intent. Never empty.
    pub fn tiers(&self) -> &'static [Tier] {
        match self {
            PlayStyle::Tryhard => &[Tier::Op, Tier::One],
            PlayStyle::Moderate => &[Tier::Two, Tier::Three],
            PlayStyle::Feeder => &[Tier::Four, Tier::Five],
            PlayStyle::Any => &Tier::ALL,
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
