use crate::options::{EngineOption, OptionType};
use std::str::FromStr;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $option_type:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        option: EngineOption { name: $name, option_type: $option_type },
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn update_from_option(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $($name => self.$field.update(value),)*
                    _ => Err(format!("Unknown option: {}", name)),
                }
            }

            pub fn describe(&self) -> Vec<String> {
                vec![$(self.$field.describe(),)*]
            }
        }
    };
}

define_config!(
    // Added when the candidate move itself captures something
    (capture_penalty: i32, "Capture Penalty", OptionType::Spin { min: 0, max: 1000 }, 10),
    // Added when the candidate move leaves the opponent in check
    (check_penalty: i32, "Check Penalty", OptionType::Spin { min: 0, max: 1000 }, 20),
    // Added when the candidate move delivers checkmate
    (checkmate_penalty: i32, "Checkmate Penalty", OptionType::Spin { min: 0, max: 10000 }, 100),
    // Subtracted once for every opponent reply that captures
    (hanging_reply_bonus: i32, "Hanging Reply Bonus", OptionType::Spin { min: 0, max: 1000 }, 50),
);

impl EngineConfig {
    /// Apply a `Name=value` assignment, as given on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), String> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("Expected <Name>=<value>, got '{}'", assignment))?;
        self.update_from_option(name.trim(), value.trim())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub option: EngineOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        self.option.option_type.validate(value)?;

        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.option
            .option_type
            .describe(self.option.name, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.capture_penalty.value, 10);
        assert_eq!(config.check_penalty.value, 20);
        assert_eq!(config.checkmate_penalty.value, 100);
        assert_eq!(config.hanging_reply_bonus.value, 50);
    }

    #[test]
    fn test_update_from_option() {
        let mut config = EngineConfig::default();
        config.update_from_option("Check Penalty", "35").unwrap();
        assert_eq!(config.check_penalty.value, 35);
    }

    #[test]
    fn test_update_rejects_bad_input() {
        let mut config = EngineConfig::default();
        assert!(config.update_from_option("Check Penalty", "-5").is_err());
        assert!(config.update_from_option("Check Penalty", "lots").is_err());
        assert!(config.update_from_option("Tempo Bonus", "5").is_err());
        assert_eq!(config.check_penalty.value, 20);
    }

    #[test]
    fn test_apply_assignment() {
        let mut config = EngineConfig::default();
        config.apply_assignment("Hanging Reply Bonus = 75").unwrap();
        assert_eq!(config.hanging_reply_bonus.value, 75);
        assert!(config.apply_assignment("Hanging Reply Bonus").is_err());
    }

    #[test]
    fn test_describe_lists_every_option() {
        let lines = EngineConfig::default().describe();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Capture Penalty = 10 (min 0, max 1000)");
        assert!(lines[2].starts_with("Checkmate Penalty = 100"));
    }
}
