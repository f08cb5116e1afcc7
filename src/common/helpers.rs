// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents client contact data from ending up in logs verbatim
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("brujita75@vetsoft.com");
/// // Returns: "b***@vetsoft.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Masks phone numbers, keeping the country prefix and last two digits
pub fn safe_phone_log(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().collect();
    if digits.len() > 4 {
        let head: String = digits[..2].iter().collect();
        let tail: String = digits[digits.len() - 2..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("brujita75@vetsoft.com"), "b***@vetsoft.com");
        assert_eq!(safe_email_log("ñandu@vetsoft.com"), "ñ***@vetsoft.com");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
        assert_eq!(safe_email_log("@vetsoft.com"), "***@***.***");
    }

    #[test]
    fn test_safe_phone_log() {
        assert_eq!(safe_phone_log("54221555232"), "54***32");
        assert_eq!(safe_phone_log("123"), "***");
    }
}
