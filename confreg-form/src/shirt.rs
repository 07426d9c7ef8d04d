//! Shirt design and colour constraints
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShirtDesign {
    Classic,
    Heart,
}

impl ShirtDesign {
    pub const ALL: [Self; 2] = [Self::Classic, Self::Heart];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Heart => "heart",
        }
    }
}

impl fmt::Display for ShirtDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShirtDesign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "heart" => Ok(Self::Heart),
            _ => Err(()),
        }
    }
}

/// Catalog colours, each tagged with exactly one design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShirtColor {
    #[serde(rename = "cornflowerblue")]
    Cornflower,
    #[serde(rename = "darkslategrey")]
    DarkSlate,
    #[serde(rename = "gold")]
    Gold,
    #[serde(rename = "tomato")]
    Tomato,
    #[serde(rename = "steelblue")]
    Steel,
    #[serde(rename = "dimgrey")]
    Dim,
}

impl ShirtColor {
    pub const ALL: [Self; 6] = [
        Self::Cornflower,
        Self::DarkSlate,
        Self::Gold,
        Self::Tomato,
        Self::Steel,
        Self::Dim,
    ];

    /// The CSS colour value used as the option id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cornflower => "cornflowerblue",
            Self::DarkSlate => "darkslategrey",
            Self::Gold => "gold",
            Self::Tomato => "tomato",
            Self::Steel => "steelblue",
            Self::Dim => "dimgrey",
        }
    }

    /// Which design this colour is printed on.
    #[must_use]
    pub const fn design(self) -> ShirtDesign {
        match self {
            Self::Cornflower | Self::DarkSlate | Self::Gold => ShirtDesign::Classic,
            Self::Tomato | Self::Steel | Self::Dim => ShirtDesign::Heart,
        }
    }

    /// Colours available for a design, in catalog order.
    #[must_use]
    pub fn for_design(design: ShirtDesign) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|c| c.design() == design)
            .collect()
    }
}

impl fmt::Display for ShirtColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShirtColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShirtSelection {
    pub design: Option<ShirtDesign>,
    pub color: Option<ShirtColor>,
}

impl ShirtSelection {
    /// Choosing a design resets the colour to the placeholder state.
    pub fn set_design(&mut self, design: ShirtDesign) {
        self.design = Some(design);
        self.color = None;
    }

    /// A colour may only be picked once its design is the active one.
    pub fn set_color(&mut self, color: ShirtColor) -> bool {
        if self.design == Some(color.design()) {
            self.color = Some(color);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_design_has_three_colors() {
        assert_eq!(ShirtColor::for_design(ShirtDesign::Classic).len(), 3);
        assert_eq!(ShirtColor::for_design(ShirtDesign::Heart).len(), 3);
        for color in ShirtColor::for_design(ShirtDesign::Heart) {
            assert_eq!(color.design(), ShirtDesign::Heart);
        }
    }

    #[test]
    fn design_change_resets_color_and_gates_color_choice() {
        let mut shirt = ShirtSelection::default();
        assert!(!shirt.set_color(ShirtColor::Gold), "no design chosen yet");

        shirt.set_design(ShirtDesign::Classic);
        assert!(shirt.set_color(ShirtColor::Gold));
        assert!(!shirt.set_color(ShirtColor::Tomato), "wrong design");

        shirt.set_design(ShirtDesign::Heart);
        assert_eq!(shirt.color, None, "design change resets colour");
        assert!(shirt.set_color(ShirtColor::Tomato));
    }
}
