//! Utilitaires de validation
//!
//! Ce module contient les fonctions helper de validation des formats
//! de champs (immatriculation, numéro de téléphone).

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Immatriculation française (SIV: AB-123-CD) ou format libre 5-20 caractères
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9\- ]{3,18}[A-Z0-9]$").unwrap();
    // Téléphone français: 0X XX XX XX XX ou +33...
    static ref PHONE_RE: Regex = Regex::new(r"^(\+33|0)[1-9](\s?\d{2}){4}$").unwrap();
}

/// Valider le format d'une plaque d'immatriculation
pub fn validate_plate_number(value: &str) -> Result<(), ValidationError> {
    if !PLATE_RE.is_match(value) {
        let mut error = ValidationError::new("plate_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Valider le format d'un numéro de téléphone
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(value) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_number_formats() {
        assert!(validate_plate_number("AB-123-CD").is_ok());
        assert!(validate_plate_number("75 AMB 112").is_ok());
        assert!(validate_plate_number("x").is_err());
        assert!(validate_plate_number("").is_err());
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("06 12 34 56 78").is_ok());
        assert!(validate_phone("+33612345678").is_ok());
        assert!(validate_phone("12345").is_err());
    }
}
