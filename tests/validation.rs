#[cfg(test)]
mod tests {
    use taskmate::libs::messages::Message;
    use taskmate::libs::validate;

    #[test]
    fn test_title_empty_after_trimming_is_rejected() {
        assert!(matches!(validate::title(""), Err(Message::TitleRequired)));
        assert!(matches!(validate::title("   "), Err(Message::TitleRequired)));
    }

    #[test]
    fn test_title_is_trimmed_and_length_checked() {
        assert_eq!(validate::title("  Buy milk  ").unwrap(), "Buy milk");

        let max = validate::title(&"a".repeat(1000)).unwrap();
        assert_eq!(max.len(), 1000);
        assert!(matches!(validate::title(&"a".repeat(1001)), Err(Message::TitleTooLong(1000))));
    }

    #[test]
    fn test_description_length_limit() {
        assert!(validate::description(&"d".repeat(10000)).is_ok());
        assert!(matches!(
            validate::description(&"d".repeat(10001)),
            Err(Message::DescriptionTooLong(10000))
        ));
    }

    #[test]
    fn test_password_minimum_length_boundary() {
        assert!(matches!(validate::password(""), Err(Message::PasswordRequired)));
        assert!(matches!(validate::password("1234567"), Err(Message::PasswordTooShort(8))));
        assert!(validate::password("12345678").is_ok());
    }

    #[test]
    fn test_password_confirmation_mismatch_has_field_message() {
        assert!(matches!(
            validate::password_confirmation("password1", "password2"),
            Err(Message::PasswordMismatch)
        ));
        assert!(validate::password_confirmation("password1", "password1").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate::email("user@example.com").is_ok());
        assert!(validate::email("first.last@sub.example.co").is_ok());

        assert!(matches!(validate::email(""), Err(Message::EmailRequired)));
        assert!(matches!(validate::email("no-at-sign"), Err(Message::EmailInvalid)));
        assert!(matches!(validate::email("user@nodot"), Err(Message::EmailInvalid)));
        assert!(matches!(validate::email("@example.com"), Err(Message::EmailInvalid)));
        assert!(matches!(validate::email("two@@example.com"), Err(Message::EmailInvalid)));
        assert!(matches!(validate::email("user @example.com"), Err(Message::EmailInvalid)));
        assert!(matches!(validate::email("user@example."), Err(Message::EmailInvalid)));
    }
}
