use crate::domain::model::{Meal, MealKind};
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{validate_non_empty_names, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub walrus: WalrusConfig,
    #[serde(default)]
    pub meals: Vec<MealConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalrusConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealConfig {
    pub name: String,
    #[serde(default)]
    pub kind: MealKind,
}

impl PlanConfig {
    /// 從 TOML 檔案載入餵食計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析餵食計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedError::PlanParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${WALRUS_NAME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FeedError::PlanParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn walrus_name(&self) -> &str {
        &self.walrus.name
    }

    pub fn meals(&self) -> Vec<Meal> {
        self.meals
            .iter()
            .map(|meal| Meal::new(meal.name.trim(), meal.kind))
            .collect()
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("walrus.name", &self.walrus.name)?;
        validate_non_empty_names("meals", self.meals.iter().map(|m| m.name.as_str()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Food;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_plan() {
        let toml_content = r#"
[walrus]
name = "Wally"

[[meals]]
name = "herring"

[[meals]]
name = "rock"
kind = "inedible"
"#;

        let plan = PlanConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(plan.walrus_name(), "Wally");

        let meals = plan.meals();
        assert_eq!(meals.len(), 2);
        assert!(meals[0].is_walrus_food());
        assert!(!meals[1].is_walrus_food());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_plan_without_meals() {
        let plan = PlanConfig::from_toml_str("[walrus]\nname = \"Wally\"\n").unwrap();
        assert!(plan.meals().is_empty());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let toml_content = r#"
[walrus]
name = "Wally"

[[meals]]
name = "granite"
kind = "mineral"
"#;
        assert!(matches!(
            PlanConfig::from_toml_str(toml_content),
            Err(FeedError::PlanParseError { .. })
        ));
    }

    #[test]
    fn test_blank_names_fail_validation() {
        let plan = PlanConfig::from_toml_str("[walrus]\nname = \"  \"\n").unwrap();
        assert!(plan.validate().is_err());

        let toml_content = r#"
[walrus]
name = "Wally"

[[meals]]
name = ""
"#;
        let plan = PlanConfig::from_toml_str(toml_content).unwrap();
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WALRUS_FEEDER_TEST_NAME", "Wendell");
        let toml_content = r#"
[walrus]
name = "${WALRUS_FEEDER_TEST_NAME}"

[[meals]]
name = "${WALRUS_FEEDER_UNSET_VAR}"
"#;
        let plan = PlanConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(plan.walrus_name(), "Wendell");
        assert_eq!(plan.meals[0].name, "${WALRUS_FEEDER_UNSET_VAR}");
    }

    #[test]
    fn test_plan_meals_survive_cli_form() {
        let toml_content = r#"
[walrus]
name = "Wally"

[[meals]]
name = "kelp:inedible"

[[meals]]
name = "a:b"

[[meals]]
name = "m8:bolt"
kind = "inedible"
"#;
        let plan = PlanConfig::from_toml_str(toml_content).unwrap();
        for meal in plan.meals() {
            let reparsed: Meal = meal.to_string().parse().unwrap();
            assert_eq!(reparsed, meal);
        }
        assert!(plan.meals()[0].is_walrus_food());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[walrus]\nname = \"Wally\"\n\n[[meals]]\nname = \"clam\"").unwrap();

        let plan = PlanConfig::from_file(file.path()).unwrap();
        assert_eq!(plan.meals()[0].name(), "clam");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PlanConfig::from_file("/definitely/not/here/plan.toml");
        assert!(matches!(result, Err(FeedError::IoError(_))));
    }
}
