//! Input validation for the advisory service

use rust_decimal::Decimal;

/// Longest accepted location string, in characters
pub const MAX_LOCATION_CHARS: usize = 100;

/// Image content types the classifier accepts
pub const SUPPORTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Validate and normalize a free-text location such as "Mumbai, Maharashtra"
pub fn validate_location(location: &str) -> Result<String, &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location must not be empty");
    }
    if trimmed.chars().count() > MAX_LOCATION_CHARS {
        return Err("Location must be at most 100 characters");
    }
    Ok(trimmed.to_string())
}

/// Validate an orchard area in square feet
pub fn validate_area(area_sq_ft: Decimal) -> Result<(), &'static str> {
    if area_sq_ft <= Decimal::ZERO {
        return Err("Area must be greater than zero");
    }
    Ok(())
}

/// Validate an uploaded leaf image by content type and size
pub fn validate_image(
    content_type: Option<&str>,
    size_bytes: usize,
    max_bytes: usize,
) -> Result<(), &'static str> {
    let content_type = content_type
        .map(|c| c.trim().to_ascii_lowercase())
        .ok_or("Image content type is required")?;

    if !SUPPORTED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err("Image must be a JPEG or PNG file");
    }
    if size_bytes == 0 {
        return Err("Image file is empty");
    }
    if size_bytes > max_bytes {
        return Err("Image file is too large");
    }
    Ok(())
}

/// Check that a humidity reading is a valid percentage
pub fn validate_humidity(humidity_percent: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity_percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_location() {
        assert_eq!(
            validate_location("  Mumbai, Maharashtra "),
            Ok("Mumbai, Maharashtra".to_string())
        );
        assert!(validate_location("").is_err());
        assert!(validate_location("   ").is_err());
        assert!(validate_location(&"a".repeat(101)).is_err());
        assert!(validate_location(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_area() {
        assert!(validate_area(Decimal::from(1000)).is_ok());
        assert!(validate_area(Decimal::new(5, 1)).is_ok());
        assert!(validate_area(Decimal::ZERO).is_err());
        assert!(validate_area(Decimal::from(-10)).is_err());
    }

    #[test]
    fn test_validate_image() {
        assert!(validate_image(Some("image/jpeg"), 1024, 4096).is_ok());
        assert!(validate_image(Some("IMAGE/PNG"), 1024, 4096).is_ok());
        assert!(validate_image(Some("image/gif"), 1024, 4096).is_err());
        assert!(validate_image(None, 1024, 4096).is_err());
        assert!(validate_image(Some("image/png"), 0, 4096).is_err());
        assert!(validate_image(Some("image/png"), 4097, 4096).is_err());
    }

    #[test]
    fn test_validate_humidity() {
        assert!(validate_humidity(0).is_ok());
        assert!(validate_humidity(100).is_ok());
        assert!(validate_humidity(-1).is_err());
        assert!(validate_humidity(101).is_err());
    }

    proptest! {
        #[test]
        fn prop_location_is_trimmed(core in "[A-Za-z][A-Za-z ,]{0,40}[A-Za-z]", pad in 0usize..5) {
            let padded = format!("{}{}{}", " ".repeat(pad), core, "\t".repeat(pad));
            prop_assert_eq!(validate_location(&padded), Ok(core.clone()));
        }

        #[test]
        fn prop_humidity_accepts_percentages_only(h in -200i32..300) {
            prop_assert_eq!(validate_humidity(h).is_ok(), (0..=100).contains(&h));
        }
    }
}
