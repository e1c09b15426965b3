use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Sizing configuration for a grid.
///
/// `cell_width` is a floor, not a fixed width: columns widen to fit their
/// content. `cell_height` is fixed; content never grows a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Minimum column width, scene units.
    pub cell_width: f64,
    /// Fixed row height, scene units.
    pub cell_height: f64,
    pub font_size: f64,
    pub show_border: bool,
    /// Padding added on each side of a column's widest content.
    pub horizontal_padding: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 1.5,
            cell_height: 0.8,
            font_size: 32.0,
            show_border: true,
            horizontal_padding: 0.25,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.cell_width <= 0.0 {
            return Err(GridError::Config(format!(
                "cell_width must be positive, got {}",
                self.cell_width
            )));
        }
        if self.cell_height <= 0.0 {
            return Err(GridError::Config(format!(
                "cell_height must be positive, got {}",
                self.cell_height
            )));
        }
        if self.font_size <= 0.0 {
            return Err(GridError::Config(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        if self.horizontal_padding < 0.0 {
            return Err(GridError::Config(format!(
                "horizontal_padding must be non-negative, got {}",
                self.horizontal_padding
            )));
        }
        Ok(())
    }
}

/// Declarative grid description, e.g. deserialized from a script file.
///
/// Exactly one of two shapes is valid: `data` alone (row 0 is the header),
/// or `rows` with an optional explicit `header`. Anything else is a config
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Single table where row 0 is the header.
    pub data: Option<Vec<Vec<String>>>,
    /// Explicit header names; requires `rows`.
    pub header: Option<Vec<String>>,
    /// Data rows; headerless unless `header` is given.
    pub rows: Option<Vec<Vec<String>>>,
    #[serde(flatten)]
    pub config: GridConfig,
}

impl GridSpec {
    /// Check the data/header/rows combination without building a grid.
    pub fn validate(&self) -> Result<(), GridError> {
        match (&self.data, &self.header, &self.rows) {
            (Some(_), None, None) => Ok(()),
            (None, _, Some(_)) => Ok(()),
            (Some(_), _, _) => Err(GridError::Config(
                "`data` cannot be combined with `header` or `rows`".to_string(),
            )),
            (None, Some(_), None) => Err(GridError::Config(
                "`header` requires `rows`".to_string(),
            )),
            (None, None, None) => Err(GridError::Config(
                "one of `data` or `rows` is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        let cfg = GridConfig { cell_width: 0.0, ..GridConfig::default() };
        assert!(matches!(cfg.validate(), Err(GridError::Config(_))));

        let cfg = GridConfig { font_size: -1.0, ..GridConfig::default() };
        assert!(matches!(cfg.validate(), Err(GridError::Config(_))));

        let cfg = GridConfig { horizontal_padding: -0.1, ..GridConfig::default() };
        assert!(matches!(cfg.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn test_spec_combinations() {
        let data = vec![vec!["a".to_string()], vec!["1".to_string()]];
        let rows = vec![vec!["1".to_string()]];
        let header = vec!["a".to_string()];

        let ok = GridSpec { data: Some(data.clone()), ..GridSpec::default() };
        assert!(ok.validate().is_ok());

        let ok = GridSpec {
            header: Some(header.clone()),
            rows: Some(rows.clone()),
            ..GridSpec::default()
        };
        assert!(ok.validate().is_ok());

        let ok = GridSpec { rows: Some(rows.clone()), ..GridSpec::default() };
        assert!(ok.validate().is_ok());

        let bad = GridSpec {
            data: Some(data),
            rows: Some(rows),
            ..GridSpec::default()
        };
        assert!(matches!(bad.validate(), Err(GridError::Config(_))));

        let bad = GridSpec { header: Some(header), ..GridSpec::default() };
        assert!(matches!(bad.validate(), Err(GridError::Config(_))));

        let bad = GridSpec::default();
        assert!(matches!(bad.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn test_spec_deserializes_with_partial_config() {
        let spec: GridSpec = serde_json::from_str(
            r#"{"data": [["a", "b"], ["1", "2"]], "font_size": 24.0}"#,
        )
        .unwrap();
        assert_eq!(spec.config.font_size, 24.0);
        assert_eq!(spec.config.cell_height, GridConfig::default().cell_height);
        assert!(spec.validate().is_ok());
    }
}
