use super::error::PersonError;
use super::requests::CreatePersonRequest;

/// Checks that a creation payload carries a non-empty name and number.
///
/// No format rules are applied here; those belong to the store schema.
pub fn validate_create_request(request: &CreatePersonRequest) -> Result<(), PersonError> {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

    if present(&request.name) && present(&request.number) {
        Ok(())
    } else {
        Err(PersonError::MissingField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, number: Option<&str>) -> CreatePersonRequest {
        CreatePersonRequest {
            name: name.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(
            validate_create_request(&request(Some("Ada"), Some("123"))),
            Ok(())
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate_create_request(&request(None, Some("123"))),
            Err(PersonError::MissingField)
        );
    }

    #[test]
    fn test_missing_number() {
        assert_eq!(
            validate_create_request(&request(Some("Ada"), None)),
            Err(PersonError::MissingField)
        );
    }

    #[test]
    fn test_empty_strings_are_missing() {
        assert_eq!(
            validate_create_request(&request(Some(""), Some("123"))),
            Err(PersonError::MissingField)
        );
        assert_eq!(
            validate_create_request(&request(Some("Ada"), Some(""))),
            Err(PersonError::MissingField)
        );
    }

    #[test]
    fn test_number_format_is_not_checked() {
        assert_eq!(
            validate_create_request(&request(Some("A"), Some("not a number"))),
            Ok(())
        );
    }
}
