//! Member domain entity

use chrono::{DateTime, Utc};

/// Role string marking administrators.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Travel-preference survey a member fills in once; drives curated listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    /// Preferred travel season (e.g. "summer", "winter")
    pub season: String,
    /// Preferred trip theme (e.g. "healing", "activity")
    pub theme: String,
    /// Who the member usually travels with (e.g. "family", "solo")
    pub companion: String,
}

impl Survey {
    /// Survey value a curation target selects. The target set is open;
    /// unknown targets select nothing.
    pub fn value_for(&self, target: &str) -> Option<&str> {
        match target {
            "season" => Some(&self.season),
            "theme" => Some(&self.theme),
            "companion" => Some(&self.companion),
            _ => None,
        }
    }
}

/// Registered member account
#[derive(Debug, Clone)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Role set; contains [`ADMIN_ROLE`] for administrators
    pub roles: Vec<String>,
    /// Soft-delete flag; deleted members stay in storage
    pub deleted: bool,
    pub survey: Option<Survey>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
    }

    /// Adds the admin role; does nothing if already present.
    pub fn grant_admin(&mut self) {
        if !self.is_admin() {
            self.roles.push(ADMIN_ROLE.to_string());
        }
    }

    /// Removes the admin role; does nothing if absent.
    pub fn revoke_admin(&mut self) {
        self.roles.retain(|r| r != ADMIN_ROLE);
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member {
            id: 1,
            email: "traveler@example.com".into(),
            name: "Traveler".into(),
            password_hash: "hash".into(),
            roles: vec!["USER".into()],
            deleted: false,
            survey: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn grant_admin_adds_role_once() {
        let mut m = sample_member();
        m.grant_admin();
        m.grant_admin();
        assert!(m.is_admin());
        assert_eq!(m.roles.iter().filter(|r| *r == ADMIN_ROLE).count(), 1);
    }

    #[test]
    fn revoke_admin_is_noop_without_role() {
        let mut m = sample_member();
        m.revoke_admin();
        assert!(!m.is_admin());
        assert_eq!(m.roles, vec!["USER".to_string()]);
    }

    #[test]
    fn revoke_admin_removes_role() {
        let mut m = sample_member();
        m.grant_admin();
        m.revoke_admin();
        assert!(!m.is_admin());
    }
}
