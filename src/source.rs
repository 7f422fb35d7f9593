use std::io::Read;
use std::path::Path;

/// Input text: the embedded sample when no path is given, stdin for `-`.
pub fn read_text(path: Option<&Path>) -> Result<String, crate::Error> {
    match path {
        None => Ok(crate::format::SAMPLE_CSV.to_string()),
        Some(p) if p == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(p) => {
            log::debug!("Reading {}", p.display());
            Ok(std::fs::read_to_string(p)?)
        }
    }
}
