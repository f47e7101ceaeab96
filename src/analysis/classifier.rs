use serde::Serialize;

use super::region::CellColor;

// Channel spread below which a color counts as neutral regardless of hue.
const ACHROMATIC_SPREAD: i16 = 10;
// Margin one channel must hold over the other to count as dominant.
const DOMINANCE_MARGIN: i16 = 10;

/// The four venue zones a cell can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Welcome,
    Angel,
    Store,
    Other,
}

impl Zone {
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Welcome => "welcome",
            Zone::Angel => "angel",
            Zone::Store => "store",
            Zone::Other => "other",
        }
    }
}

/// Classify an average color into a zone. First matching rule wins:
/// near-equal channels are neutral ("store"), then blue-vs-red dominance
/// decides. Green contributes to the spread but is never compared directly.
pub fn classify(color: CellColor) -> Zone {
    let (r, g, b) = (
        color.red as i16,
        color.green as i16,
        color.blue as i16,
    );

    let spread = r.max(g).max(b) - r.min(g).min(b);
    if spread < ACHROMATIC_SPREAD {
        Zone::Store
    } else if b > r + DOMINANCE_MARGIN {
        Zone::Welcome
    } else if r > b + DOMINANCE_MARGIN {
        Zone::Angel
    } else {
        Zone::Other
    }
}
