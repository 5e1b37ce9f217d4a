
/// Validation rules that do not touch the database
pub mod validation_tests {
    use crate::{author, publisher};

    #[test]
    fn publisher_name_starting_with_digit_is_rejected() {
        let err = publisher::validate_name("123 New Publisher").unwrap_err();
        assert_eq!(err.to_string(), "validation error: Name cannot start with a number");
    }

    #[test]
    fn publisher_name_with_inner_digits_is_accepted() {
        assert!(publisher::validate_name("Publisher 6").is_ok());
        assert!(publisher::validate_name("").is_err());
    }

    #[test]
    fn author_names_are_required() {
        assert!(author::validate_names("Frank", "Herbert").is_ok());
        assert!(author::validate_names("", "Herbert").is_err());
        assert!(author::validate_names("Frank", " ").is_err());
    }
}
