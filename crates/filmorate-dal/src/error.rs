pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Id must be provided")]
    MissingId,

    #[error("{entity} with id {id} not found")]
    RecordNotFound { entity: &'static str, id: i64 },
}

impl Error {
    /// True for errors caused by an invalid payload, as opposed to a missing record
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::MissingId)
    }
}

/// Field names in JSON payloads are camelCase, reports use them so clients see the name they sent
fn wire_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len());
    let mut upper = false;
    for c in path.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

impl From<garde::Report> for Error {
    fn from(report: garde::Report) -> Self {
        let msg = report
            .iter()
            .map(|(path, error)| {
                format!("{}: {}", wire_name(&path.to_string()), error.message())
            })
            .collect::<Vec<_>>()
            .join("; ");
        Error::Validation(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("release_date"), "releaseDate");
        assert_eq!(wire_name("login"), "login");
    }
}
