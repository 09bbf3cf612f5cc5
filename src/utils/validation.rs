use crate::utils::error::{FeedError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry must pass `validate_non_empty_string`; the field name carries the index.
pub fn validate_non_empty_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for (idx, name) in names.into_iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, idx), name)?;
    }
    Ok(())
}
