use thiserror::Error;

pub type RftResult<T> = Result<T, RftError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RftError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_quantity() {
        let err = RftError::NonFinite {
            what: "reference impedance",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("reference impedance"));
        assert!(msg.contains("Non-finite"));
    }
}
