//! Theme palette the view models reference by name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub gray: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub success: String,
    pub failure: String,
    pub background: String,
    pub text: TextColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: Colors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "nftmart".to_string(),
            colors: Colors {
                primary: "#3D00FF".to_string(),
                success: "#00B05C".to_string(),
                failure: "#FF4949".to_string(),
                background: "#F9F9F9".to_string(),
                text: TextColors {
                    primary: "#000000".to_string(),
                    gray: "#999999".to_string(),
                },
            },
        }
    }
}

impl Theme {
    /// Look up a color by dotted path, e.g. `"text.gray"`.
    pub fn color(&self, path: &str) -> Option<&str> {
        let c = &self.colors;
        let value = match path {
            "primary" => &c.primary,
            "success" => &c.success,
            "failure" => &c.failure,
            "background" => &c.background,
            "text.primary" => &c.text.primary,
            "text.gray" => &c.text.gray,
            _ => return None,
        };
        Some(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_paths() {
        let theme = Theme::default();
        assert_eq!(theme.color("failure"), Some("#FF4949"));
        assert_eq!(theme.color("text.gray"), Some("#999999"));
        assert_eq!(theme.color("text.nope"), None);
    }
}
