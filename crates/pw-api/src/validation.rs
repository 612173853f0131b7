use crate::error::ApiError;

const MAX_ID_LEN: usize = 64;

/// Validate an entity id taken from a path or query string
///
/// # Examples
/// ```
/// use pw_api::validation::validate_entity_id;
///
/// assert!(validate_entity_id("i1").is_ok());
/// assert!(validate_entity_id("../etc").is_err());
/// ```
pub fn validate_entity_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::Validation("Id cannot be empty".to_string()));
    }

    if id.len() > MAX_ID_LEN {
        return Err(ApiError::Validation(format!(
            "Id is too long (max {MAX_ID_LEN} characters)"
        )));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::Validation(format!(
            "Invalid id: '{id}'. Only letters, digits, '-' and '_' are allowed"
        )));
    }

    Ok(())
}
