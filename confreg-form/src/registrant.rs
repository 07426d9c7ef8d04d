//! Registrant identity fields
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobRole {
    #[default]
    Developer,
    Designer,
    Analyst,
    Engineer,
    Educator,
    Student,
    /// Sentinel that reveals the free-text role field.
    Other,
}

impl JobRole {
    pub const ALL: [Self; 7] = [
        Self::Developer,
        Self::Designer,
        Self::Analyst,
        Self::Engineer,
        Self::Educator,
        Self::Student,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Designer => "designer",
            Self::Analyst => "analyst",
            Self::Engineer => "engineer",
            Self::Educator => "educator",
            Self::Student => "student",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn is_other(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(Self::Developer),
            "designer" => Ok(Self::Designer),
            "analyst" => Ok(Self::Analyst),
            "engineer" => Ok(Self::Engineer),
            "educator" => Ok(Self::Educator),
            "student" => Ok(Self::Student),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistrantInfo {
    pub name: String,
    pub email: String,
    pub job_role: JobRole,
    /// Free-text role, meaningful only when `job_role` is [`JobRole::Other`].
    #[serde(default)]
    pub other_role: String,
}

impl RegistrantInfo {
    /// The role as it would appear on a badge: the free-text entry for
    /// the "other" sentinel, the role id otherwise.
    #[must_use]
    pub fn role_description(&self) -> &str {
        if self.job_role.is_other() {
            self.other_role.trim()
        } else {
            self.job_role.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_role_round_trips_through_strings() {
        for role in JobRole::ALL {
            assert_eq!(role.as_str().parse::<JobRole>(), Ok(role));
        }
        assert_eq!("astronaut".parse::<JobRole>(), Err(()));
    }

    #[test]
    fn role_description_prefers_free_text_for_other() {
        let mut info = RegistrantInfo {
            job_role: JobRole::Other,
            other_role: " Tech Writer ".to_string(),
            ..RegistrantInfo::default()
        };
        assert_eq!(info.role_description(), "Tech Writer");
        info.job_role = JobRole::Educator;
        assert_eq!(info.role_description(), "educator");
    }
}
