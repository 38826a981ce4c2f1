use serde::{Deserialize, Serialize};

/// An extracurricular activity and its current roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityModel {
    pub description: String,
    pub schedule: String,          // Human-readable time window, never parsed
    pub max_participants: u32,     // Advisory only, signups are not capped
    pub participants: Vec<String>, // Emails in signup order
}

impl ActivityModel {
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Get the current number of participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Check if an email is on this activity's roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append an email to the roster, keeping emails unique
    pub fn add_participant(&mut self, email: String) {
        if !self.has_participant(&email) {
            self.participants.push(email);
        }
    }

    /// Remove one occurrence of an email, returning whether it was present
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}
