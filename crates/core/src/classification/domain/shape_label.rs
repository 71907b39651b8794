use serde::{Deserialize, Serialize};

/// Face shape category. Displays and serializes as the overlay text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeLabel {
    #[serde(rename = "Diamond, Round, Oval")]
    DiamondRoundOval,
    #[serde(rename = "Triangle")]
    Triangle,
    #[serde(rename = "Heart")]
    Heart,
    #[serde(rename = "Square, Oblong")]
    SquareOblong,
    /// No rule matched. Renders as an empty string.
    #[serde(rename = "")]
    Unrecognized,
}

impl ShapeLabel {
    pub const ALL: &[ShapeLabel] = &[
        ShapeLabel::DiamondRoundOval,
        ShapeLabel::Triangle,
        ShapeLabel::Heart,
        ShapeLabel::SquareOblong,
        ShapeLabel::Unrecognized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::DiamondRoundOval => "Diamond, Round, Oval",
            ShapeLabel::Triangle => "Triangle",
            ShapeLabel::Heart => "Heart",
            ShapeLabel::SquareOblong => "Square, Oblong",
            ShapeLabel::Unrecognized => "",
        }
    }

    pub fn is_recognized(&self) -> bool {
        *self != ShapeLabel::Unrecognized
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
