#[derive(Debug, Clone)]
pub struct EngineOption {
    pub name: &'static str,
    pub option_type: OptionType,
}

#[derive(Debug, Clone)]
pub enum OptionType {
    Spin { min: i32, max: i32 },
}

impl OptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            OptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid integer '{}': {}", value, e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
        }
    }

    pub fn describe<T>(&self, name: &str, current_value: &T) -> String
    where
        T: ToString,
    {
        match self {
            OptionType::Spin { min, max } => format!(
                "{} = {} (min {}, max {})",
                name,
                current_value.to_string(),
                min,
                max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_validation() {
        let spin = OptionType::Spin { min: 0, max: 100 };
        assert!(spin.validate("0").is_ok());
        assert!(spin.validate(" 100 ").is_ok());
        assert!(spin.validate("101").is_err());
        assert!(spin.validate("-1").is_err());
        assert!(spin.validate("ten").is_err());
    }

    #[test]
    fn test_describe() {
        let spin = OptionType::Spin { min: 0, max: 1000 };
        assert_eq!(
            spin.describe("Check Penalty", &20),
            "Check Penalty = 20 (min 0, max 1000)"
        );
    }
}
