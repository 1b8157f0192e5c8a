use crate::utils::error::{GraphError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(GraphError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GraphError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(_) => Err(GraphError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension. Allowed: {}",
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(GraphError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GraphError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 去除前後空白後檢查必填欄位，回傳修剪過的值
pub fn require_input<'a>(label: &str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GraphError::validation(format!("{} is required", label)));
    }
    Ok(trimmed)
}

/// Parses a ticket price typed by the user. Only finite numbers are accepted.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = require_input("Price", raw)?;
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(GraphError::validation(format!(
            "Price '{}' is not a valid number",
            trimmed
        ))),
    }
}

pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(GraphError::validation(format!(
            "Price '{}' is not a valid number",
            price
        )));
    }
    Ok(())
}

pub fn validate_distinct_endpoints(origin: &str, destination: &str) -> Result<()> {
    if origin == destination {
        return Err(GraphError::validation(
            "Origin and destination cannot be the same",
        ));
    }
    Ok(())
}
