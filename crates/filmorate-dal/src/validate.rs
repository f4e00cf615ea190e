//! Field rules shared by create, replace and patch payloads.
//!
//! Each rule is a `garde` custom validator, so the same function backs the
//! required fields of a `Create*` payload and the optional fields of a `Patch*` one.

use time::{macros::date, Date, OffsetDateTime};

pub const CINEMA_BIRTH_DATE: Date = date!(1895 - 12 - 28);
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Current local date, falls back to UTC when local offset cannot be determined
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn film_name(name: &str, _ctx: &()) -> garde::Result {
    if name.is_empty() {
        return Err(garde::Error::new("film name cannot be empty"));
    }
    Ok(())
}

pub fn film_description(description: &str, _ctx: &()) -> garde::Result {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(garde::Error::new(format!(
            "description cannot be longer than {MAX_DESCRIPTION_LENGTH} characters, length={length}"
        )));
    }
    Ok(())
}

pub fn release_date(date: &Date, _ctx: &()) -> garde::Result {
    if *date < CINEMA_BIRTH_DATE {
        return Err(garde::Error::new(format!(
            "film cannot be released before {CINEMA_BIRTH_DATE}, releaseDate={date}"
        )));
    }
    Ok(())
}

pub fn duration(duration: &i32, _ctx: &()) -> garde::Result {
    if *duration <= 0 {
        return Err(garde::Error::new(format!(
            "duration must be positive, duration={duration}"
        )));
    }
    Ok(())
}

pub fn email(email: &str, _ctx: &()) -> garde::Result {
    if email.is_empty() || !email.contains('@') {
        return Err(garde::Error::new(format!(
            "email cannot be empty and must contain \"@\", value={email:?}"
        )));
    }
    Ok(())
}

pub fn login(login: &str, _ctx: &()) -> garde::Result {
    if login.is_empty() || login.contains(' ') {
        return Err(garde::Error::new(format!(
            "login cannot be empty or contain spaces, value={login:?}"
        )));
    }
    Ok(())
}

pub fn birthday(birthday: &Date, _ctx: &()) -> garde::Result {
    if *birthday > today() {
        return Err(garde::Error::new(format!(
            "birthday cannot be in the future, birthday={birthday}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;

    #[test]
    fn test_film_rules() {
        assert!(film_name("Matrix", &()).is_ok());
        assert!(film_name("", &()).is_err());

        assert!(film_description(&"a".repeat(200), &()).is_ok());
        assert!(film_description(&"a".repeat(201), &()).is_err());
        // counted in characters, not bytes
        assert!(film_description(&"ж".repeat(200), &()).is_ok());

        assert!(release_date(&CINEMA_BIRTH_DATE, &()).is_ok());
        assert!(release_date(&date!(1895 - 12 - 27), &()).is_err());

        assert!(duration(&1, &()).is_ok());
        assert!(duration(&0, &()).is_err());
        assert!(duration(&-10, &()).is_err());
    }

    #[test]
    fn test_user_rules() {
        assert!(email("user@mail.ru", &()).is_ok());
        assert!(email("mail.ru", &()).is_err());
        assert!(email("", &()).is_err());

        assert!(login("login", &()).is_ok());
        assert!(login("bad login", &()).is_err());
        assert!(login("", &()).is_err());

        assert!(birthday(&today(), &()).is_ok());
        assert!(birthday(&(today() + Duration::days(1)), &()).is_err());
    }

    #[test]
    fn test_message_contains_value() {
        let err = duration(&-5, &()).unwrap_err();
        assert!(err.message().contains("-5"));
        let err = login("bad login", &()).unwrap_err();
        assert!(err.message().contains("bad login"));
    }
}
