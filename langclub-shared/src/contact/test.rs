use super::*;

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn blank_fields_are_rejected_in_order() {
    assert_eq!(
        form("  ", "a@b.c", "hi").validate(),
        Err(ContactFormError::MissingName)
    );
    assert_eq!(
        form("Ravi", "", "hi").validate(),
        Err(ContactFormError::MissingEmail)
    );
    assert_eq!(
        form("Ravi", "a@b.c", "\n\t").validate(),
        Err(ContactFormError::MissingMessage)
    );
}

#[test]
fn malformed_addresses_are_rejected() {
    for bad in ["ravi", "@club.org", "ravi@", "ravi@club", "ra vi@club.org", "a@b@c.d", "ravi@.org"] {
        assert_eq!(
            form("Ravi", bad, "hi").validate(),
            Err(ContactFormError::MalformedEmail),
            "{bad}"
        );
    }
}

#[test]
fn valid_form_is_trimmed() {
    let valid = form(" Ravi ", " ravi@club.org ", " Hello! ").validate().unwrap();
    assert_eq!(valid.name(), "Ravi");
    assert_eq!(valid.email(), "ravi@club.org");
    assert_eq!(valid.message(), "Hello!");
}

#[test]
fn relay_gets_exactly_the_contract_fields() {
    let valid = form("Ravi", "ravi@club.org", "Hello").validate().unwrap();
    let fields = valid.relay_fields();
    let names: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        names,
        vec!["name", "email", "message", "_subject", "_captcha", "_template"]
    );
    assert_eq!(fields[4].1, "false");
    assert_eq!(fields[5].1, "table");
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        ContactFormError::MalformedEmail.to_string(),
        "Please enter a valid email address."
    );
}
