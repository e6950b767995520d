//! Team and tag identification, plus per-team data storage.
//!
//! ## Team
//!
//! The two playing sides, red and blue.
//!
//! ## Tag
//!
//! The hidden identity of a board word. Red and blue tags belong to the
//! matching team; neutral and assassin tags belong to nobody.
//!
//! ## TeamMap
//!
//! Per-team data storage indexable by `Team`. Backed by two plain fields,
//! since Codenames always has exactly two teams.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two playing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn enemy(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// The board tag owned by this team.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Team::Red => Tag::Red,
            Team::Blue => Tag::Blue,
        }
    }

    /// Both teams, red first.
    pub fn both() -> impl Iterator<Item = Team> {
        [Team::Red, Team::Blue].into_iter()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// Hidden identity of a board word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Red,
    Blue,
    Neutral,
    Assassin,
}

impl Tag {
    /// The team that owns this tag, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Tag::Red => Some(Team::Red),
            Tag::Blue => Some(Team::Blue),
            Tag::Neutral | Tag::Assassin => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Red => write!(f, "red"),
            Tag::Blue => write!(f, "blue"),
            Tag::Neutral => write!(f, "neutral"),
            Tag::Assassin => write!(f, "assassin"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use codenames_engine::core::{Team, TeamMap};
///
/// let mut turns: TeamMap<u32> = TeamMap::with_value(0);
/// turns[Team::Blue] += 1;
///
/// assert_eq!(turns[Team::Red], 0);
/// assert_eq!(turns[Team::Blue], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMap<T> {
    red: T,
    blue: T,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            red: factory(Team::Red),
            blue: factory(Team::Blue),
        }
    }

    /// Create a new TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Team, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::Red, &self.red), (Team::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
