// src/common/fields.rs
//! Single-field checks shared by the entity validators.
//!
//! Each check takes the trimmed submitted value and returns either the parsed
//! value or the message shown next to the form field.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

pub const CLIENT_EMAIL_DOMAIN: &str = "@vetsoft.com";
pub const PHONE_PREFIX: &str = "54";
pub const MIN_DOSE: i64 = 1;
pub const MAX_DOSE: i64 = 10;

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[\p{L} ]+$").expect("valid name regex"))
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

pub fn required<'a>(value: &'a str, message: &'static str) -> Result<&'a str, &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(value)
    }
}

/// Letters (accented included) and spaces only
pub fn person_name(value: &str) -> Result<&str, &'static str> {
    required(value, "Por favor ingrese un nombre")?;
    if !name_regex().is_match(value) {
        return Err("El nombre solo puede contener letras y espacios");
    }
    Ok(value)
}

pub fn numeric_phone(value: &str) -> Result<&str, &'static str> {
    required(value, "Por favor ingrese un teléfono")?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("El teléfono debe ser un número");
    }
    Ok(value)
}

/// Numeric phone carrying the Argentine country prefix
pub fn prefixed_phone(value: &str) -> Result<&str, &'static str> {
    numeric_phone(value)?;
    if !value.starts_with(PHONE_PREFIX) {
        return Err("El teléfono debe comenzar con 54");
    }
    Ok(value)
}

pub fn email(value: &str) -> Result<&str, &'static str> {
    required(value, "Por favor ingrese un email")?;
    if !email_regex().is_match(value) {
        return Err("Por favor ingrese un email valido");
    }
    Ok(value)
}

pub fn clinic_email(value: &str) -> Result<&str, &'static str> {
    required(value, "Por favor ingrese un email")?;
    if !value.ends_with(CLIENT_EMAIL_DOMAIN) || value.len() == CLIENT_EMAIL_DOMAIN.len() {
        return Err("El email debe ser de dominio vetsoft.com");
    }
    Ok(value)
}

pub fn dose(value: &str) -> Result<i64, &'static str> {
    required(value, "Por favor ingrese una dosis")?;
    match value.parse::<i64>() {
        Ok(dose) if (MIN_DOSE..=MAX_DOSE).contains(&dose) => Ok(dose),
        _ => Err("La dosis debe estar entre 1 y 10."),
    }
}

pub fn price(value: &str) -> Result<f64, &'static str> {
    required(value, "Por favor ingrese el precio del producto.")?;
    let price = value
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or("Por favor ingrese un precio válido.")?;
    if price <= 0.0 {
        return Err("Por favor ingrese un precio mayor a 0.");
    }
    Ok(price)
}

pub fn date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| "Formato de fecha inválido (AAAA-MM-DD)")
}

/// Accepts `HH:MM` and `HH:MM:SS`
pub fn time(value: &str) -> Result<NaiveTime, &'static str> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| "Formato de horario inválido (HH:MM)")
}

/// A birthday must lie strictly before `today`
pub fn past_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    if date >= today {
        return Err("La fecha de nacimiento debe ser anterior a la fecha actual");
    }
    Ok(date)
}

/// Positive integer id, if `value` holds one
pub fn parse_id(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn record_id(value: &str, message: &'static str) -> Result<i64, &'static str> {
    required(value, message)?;
    parse_id(value).ok_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name() {
        assert!(person_name("Juan Sebastian Veron").is_ok());
        assert!(person_name("José Muñoz").is_ok());
        assert_eq!(
            person_name("pepito12"),
            Err("El nombre solo puede contener letras y espacios")
        );
        assert_eq!(person_name(""), Err("Por favor ingrese un nombre"));
    }

    #[test]
    fn test_prefixed_phone() {
        assert_eq!(prefixed_phone("54221555232"), Ok("54221555232"));
        assert_eq!(
            prefixed_phone("221555233"),
            Err("El teléfono debe comenzar con 54")
        );
        assert_eq!(prefixed_phone("54aaa"), Err("El teléfono debe ser un número"));
        assert_eq!(prefixed_phone("-54"), Err("El teléfono debe ser un número"));
        assert_eq!(prefixed_phone(""), Err("Por favor ingrese un teléfono"));
    }

    #[test]
    fn test_clinic_email() {
        assert!(clinic_email("brujita75@vetsoft.com").is_ok());
        assert_eq!(
            clinic_email("brujita75@yahoo.com"),
            Err("El email debe ser de dominio vetsoft.com")
        );
        assert!(clinic_email("@vetsoft.com").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(email("Serviciosveterinarios@gmail.com").is_ok());
        assert_eq!(
            email("Serviciosveterinariosgmail.com"),
            Err("Por favor ingrese un email valido")
        );
        assert!(email("user@localhost").is_err());
        assert_eq!(email(""), Err("Por favor ingrese un email"));
    }

    #[test]
    fn test_dose_range() {
        assert_eq!(dose("1"), Ok(1));
        assert_eq!(dose("10"), Ok(10));
        assert_eq!(dose("0"), Err("La dosis debe estar entre 1 y 10."));
        assert_eq!(dose("11"), Err("La dosis debe estar entre 1 y 10."));
        assert_eq!(dose("dos"), Err("La dosis debe estar entre 1 y 10."));
        assert_eq!(dose(""), Err("Por favor ingrese una dosis"));
    }

    #[test]
    fn test_price() {
        assert_eq!(price("33"), Ok(33.0));
        assert_eq!(price("0.5"), Ok(0.5));
        assert_eq!(price("0"), Err("Por favor ingrese un precio mayor a 0."));
        assert_eq!(price("-33"), Err("Por favor ingrese un precio mayor a 0."));
        assert_eq!(price(""), Err("Por favor ingrese el precio del producto."));
        assert_eq!(price("NaN"), Err("Por favor ingrese un precio válido."));
        assert_eq!(price("abc"), Err("Por favor ingrese un precio válido."));
    }

    #[test]
    fn test_past_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

        assert!(past_date(yesterday, today).is_ok());
        assert!(past_date(today, today).is_err());
        assert!(past_date(tomorrow, today).is_err());
    }

    #[test]
    fn test_time_formats() {
        assert!(time("09:30").is_ok());
        assert!(time("09:30:15").is_ok());
        assert!(time("25:00").is_err());
    }

    #[test]
    fn test_record_id() {
        assert_eq!(record_id("3", "missing"), Ok(3));
        assert_eq!(record_id("0", "missing"), Err("missing"));
        assert_eq!(record_id("x", "missing"), Err("missing"));
        assert_eq!(record_id("", "missing"), Err("missing"));
        assert_eq!(parse_id("-2"), None);
    }
}
