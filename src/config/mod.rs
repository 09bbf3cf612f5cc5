pub mod toml_config;

pub use toml_config::PlanConfig;

#[cfg(feature = "cli")]
use crate::domain::model::Meal;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "walrus-feeder")]
#[command(about = "Feed a walrus and see what stays down")]
pub struct CliConfig {
    #[arg(long, default_value = "Wally")]
    pub name: String,

    /// NAME for walrus food, NAME:inedible for anything else
    #[arg(long, value_delimiter = ',')]
    pub feed: Vec<Meal>,

    #[arg(long, help = "Load walrus and meals from a TOML feeding plan")]
    pub plan: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolve the walrus name and meals, preferring the plan file when one is given.
    pub fn resolve(&self) -> Result<(String, Vec<Meal>)> {
        match &self.plan {
            Some(path) => {
                let plan = PlanConfig::from_file(path)?;
                plan.validate()?;
                Ok((plan.walrus_name().to_string(), plan.meals()))
            }
            None => Ok((self.name.clone(), self.feed.clone())),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.plan.is_none() {
            validate_non_empty_string("name", &self.name)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::model::MealKind;
    use crate::domain::ports::Food;
    use crate::utils::error::FeedError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn plan_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_parse_feed_arguments() {
        let config = CliConfig::try_parse_from([
            "walrus-feeder",
            "--name",
            "Wally",
            "--feed",
            "herring,rock:inedible",
            "--feed",
            "clam",
        ])
        .unwrap();

        assert_eq!(config.feed.len(), 3);
        assert!(!config.feed[1].is_walrus_food());
        let (name, meals) = config.resolve().unwrap();
        assert_eq!(name, "Wally");
        assert_eq!(meals[2].name(), "clam");
    }

    #[test]
    fn test_bad_meal_kind_is_rejected() {
        assert!(CliConfig::try_parse_from(["walrus-feeder", "--feed", "rock:mineral"]).is_err());
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let config = CliConfig::try_parse_from(["walrus-feeder", "--name", " "]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plan_replaces_name_and_feed() {
        let file = plan_file(
            r#"
[walrus]
name = "Wendell"

[[meals]]
name = "herring"

[[meals]]
name = "boot"
kind = "inedible"
"#,
        );
        let path = file.path().to_str().unwrap();

        let config = CliConfig::try_parse_from([
            "walrus-feeder",
            "--plan",
            path,
            "--name",
            "Other",
            "--feed",
            "x",
        ])
        .unwrap();
        assert!(config.validate().is_ok());

        let (name, meals) = config.resolve().unwrap();
        assert_eq!(name, "Wendell");
        assert_eq!(
            meals,
            vec![
                Meal::new("herring", MealKind::Walrus),
                Meal::new("boot", MealKind::Inedible),
            ]
        );
    }

    #[test]
    fn test_plan_with_blank_walrus_name_is_rejected() {
        let file = plan_file("[walrus]\nname = \"   \"\n");
        let path = file.path().to_str().unwrap();

        let config = CliConfig::try_parse_from(["walrus-feeder", "--plan", path]).unwrap();
        assert!(matches!(
            config.resolve(),
            Err(FeedError::InvalidConfigValueError { .. })
        ));
    }
}
