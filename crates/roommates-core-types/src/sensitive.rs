//! Sensitive data marker for automatic redaction
//!
//! Connection strings routinely carry credentials, so anything that holds
//! one wraps it in `Sensitive<T>` and never prints it.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use roommates_core_types::Sensitive;
///
/// let conn_str = Sensitive::new("Server=db;Password=hunter2");
/// assert_eq!(format!("{:?}", conn_str), "***REDACTED***");
/// assert_eq!(format!("{}", conn_str), "***REDACTED***");
///
/// assert_eq!(conn_str.expose(), &"Server=db;Password=hunter2");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only call this at the point the value is handed to the driver.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let secret = Sensitive::new("file:house.db?password=s3cret");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("s3cret"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let secret = Sensitive::new("api-key-12345");
        assert_eq!(format!("{}", secret), "***REDACTED***");
    }

    #[test]
    fn test_sensitive_into_inner() {
        let secret = Sensitive::new(String::from("house.db"));
        assert_eq!(secret.into_inner(), "house.db");
    }

    #[test]
    fn test_sensitive_inside_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Settings {
            name: String,
            connection_string: Sensitive<String>,
        }

        let settings = Settings {
            name: "roommates".to_string(),
            connection_string: Sensitive::new("secret.db".to_string()),
        };

        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("roommates"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("secret.db"));
    }
}
