use crate::parse::Issue;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Malformed(Vec<Issue>),
    Misconfig(&'static str),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Error::*;
        match self {
            Io(e) => write!(f, "Io: {e}"),
            Malformed(issues) => {
                write!(f, "Malformed: {} line(s)", issues.len())?;
                for issue in issues {
                    write!(f, "\n  {issue}")?;
                }
                Ok(())
            }
            Misconfig(m) => write!(f, "Misconfig: {m}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
