use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

pub struct Validator;

fn base_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9.\-]+(:\d{1,5})?(/[A-Za-z0-9._~\-/]*)?$")
            .expect("base URL pattern is valid")
    })
}

impl Validator {
    pub fn validate_page_size(page_size: usize) -> Result<(), AppError> {
        if page_size == 0 {
            return Err(AppError::InvalidInput(
                "Page size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_record_id(id: i64) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Record ID must be positive, got {}",
                id
            )));
        }
        Ok(())
    }

    pub fn validate_base_url(url: &str) -> Result<(), AppError> {
        if !base_url_pattern().is_match(url.trim()) {
            return Err(AppError::InvalidInput(format!(
                "Invalid backend URL: {}",
                url
            )));
        }
        Ok(())
    }
}
