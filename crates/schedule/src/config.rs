use models::{role::Role, time_slot::TimeSlotProfile};
use std::env;

/// Role of the viewer the projection is computed for
pub const ROLE_VAR: &str = "SCHEDULE_ROLE";
/// Teacher id of the viewer, needed to decide which lessons they may mark
pub const TEACHER_ID_VAR: &str = "SCHEDULE_TEACHER_ID";
/// Fallback period table, `web` or `mobile`
pub const TIME_SLOTS_VAR: &str = "SCHEDULE_TIME_SLOTS";

/// Settings for the command-line projection
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub role: Role,
    pub teacher_id: Option<u32>,
    pub time_slot_profile: TimeSlotProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: Role::Student,
            teacher_id: None,
            time_slot_profile: TimeSlotProfile::Web,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, unset or blank variables
    /// keeping their defaults
    ///
    /// # Returns
    /// The configuration, or an error naming the variable that failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(role) = get(ROLE_VAR) {
            config.role = role
                .parse::<Role>()
                .map_err(|e| format!("Invalid {ROLE_VAR}: {e}"))?;
        }

        if let Some(teacher_id) = get(TEACHER_ID_VAR) {
            let id = teacher_id
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid {TEACHER_ID_VAR} '{teacher_id}': {e}"))?;
            config.teacher_id = Some(id);
        }

        if let Some(profile) = get(TIME_SLOTS_VAR) {
            config.time_slot_profile = profile
                .trim()
                .parse::<TimeSlotProfile>()
                .map_err(|_| format!("Invalid {TIME_SLOTS_VAR} '{profile}': expected web or mobile"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Ok(Config::default()));
        assert_eq!(
            Config::from_lookup(lookup(&[(ROLE_VAR, "  ")])),
            Ok(Config::default())
        );
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup(&[
            (ROLE_VAR, "teacher"),
            (TEACHER_ID_VAR, " 42 "),
            (TIME_SLOTS_VAR, "Mobile"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                role: Role::Teacher,
                teacher_id: Some(42),
                time_slot_profile: TimeSlotProfile::Mobile,
            }
        );
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[(ROLE_VAR, "janitor")])).unwrap_err();
        assert!(err.contains(ROLE_VAR), "{err}");

        let err = Config::from_lookup(lookup(&[(TEACHER_ID_VAR, "abc")])).unwrap_err();
        assert!(err.contains(TEACHER_ID_VAR), "{err}");

        let err = Config::from_lookup(lookup(&[(TIME_SLOTS_VAR, "tablet")])).unwrap_err();
        assert!(err.contains(TIME_SLOTS_VAR), "{err}");
    }
}
