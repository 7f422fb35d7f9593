#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
    /// Reject input that `parse` would otherwise degrade silently
    pub strict: bool,
    /// Pixel height of each rendered chart
    pub chart_height: usize,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            strict: false,
            chart_height: 300,
        }
    }
}

impl Cfg {
    pub fn validate(self) -> Result<Self, crate::Error> {
        if self.chart_height == 0 {
            return Err(crate::Error::Misconfig("Chart height must be positive"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Cfg;

    #[test]
    fn default_is_lenient() {
        let cfg = Cfg::default();
        assert!(!cfg.strict);
        assert_eq!(cfg.chart_height, 300);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_height_is_rejected() {
        let cfg = Cfg {
            chart_height: 0,
            ..Cfg::default()
        };
        assert!(matches!(cfg.validate(), Err(crate::Error::Misconfig(_))));
    }
}
