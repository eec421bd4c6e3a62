//! Team registry
//!
//! Holds the rating state of every team seen so far. Teams are never
//! registered up front: the first lookup of an unknown identifier creates it
//! with default state.

use crate::types::{TeamId, TeamState, DEFAULT_RATING};
use std::collections::HashMap;

/// Mapping from team identifier to team state
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRegistry {
    teams: HashMap<TeamId, TeamState>,
    initial_rating: f64,
}

impl TeamRegistry {
    /// Create an empty registry whose new teams start at `initial_rating`
    pub fn new(initial_rating: f64) -> Self {
        Self {
            teams: HashMap::new(),
            initial_rating,
        }
    }

    /// Rating given to teams created by this registry
    pub fn initial_rating(&self) -> f64 {
        self.initial_rating
    }

    /// Take a team out of the registry, creating default state if it does
    /// not exist yet
    ///
    /// Returns the team and whether it was created by this call. The team is
    /// absent from the registry until it is handed back with [`store`].
    ///
    /// [`store`]: TeamRegistry::store
    pub fn take_or_create(&mut self, team_id: &str) -> (TeamState, bool) {
        match self.teams.remove(team_id) {
            Some(team) => (team, false),
            None => (TeamState::new(team_id, self.initial_rating), true),
        }
    }

    /// Get a team's current state
    pub fn get(&self, team_id: &str) -> Option<&TeamState> {
        self.teams.get(team_id)
    }

    /// Store a team's state, replacing any previous entry for the same name
    pub fn store(&mut self, team: TeamState) {
        self.teams.insert(team.name.clone(), team);
    }

    /// Check whether a team has been seen
    pub fn contains(&self, team_id: &str) -> bool {
        self.teams.contains_key(team_id)
    }

    /// Iterate over all teams in no particular order
    pub fn teams(&self) -> impl Iterator<Item = &TeamState> {
        self.teams.values()
    }

    /// Get total number of teams
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Consume the registry, returning every team state
    pub fn into_teams(self) -> Vec<TeamState> {
        self.teams.into_values().collect()
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_RATING)
    }
}
