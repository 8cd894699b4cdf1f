//! Body shape variants
//!
//! Shapes are assigned by the geometric rule set in [`crate::shape`], never
//! by threshold matching, so every variant carries [`Rule::Manual`].

use super::{Category, Label, Rule, VariantInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyShape {
    Hourglass,
    BottomHourglass,
    TopHourglass,
    Spoon,
    Triangle,
    InvertedTriangle,
    Rectangle,
    Diamond,
    Oval,
}

impl BodyShape {
    /// Shapes that turn an "Average" body type into "Curvy"
    pub const CURVY: &'static [BodyShape] = &[
        BodyShape::TopHourglass,
        BodyShape::BottomHourglass,
        BodyShape::Hourglass,
    ];

    pub fn is_curvy(&self) -> bool {
        Self::CURVY.contains(self)
    }
}

impl Category for BodyShape {
    fn all() -> &'static [Self] {
        &[
            BodyShape::Hourglass,
            BodyShape::BottomHourglass,
            BodyShape::TopHourglass,
            BodyShape::Spoon,
            BodyShape::Triangle,
            BodyShape::InvertedTriangle,
            BodyShape::Rectangle,
            BodyShape::Diamond,
            BodyShape::Oval,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            BodyShape::Hourglass => "Hourglass",
            BodyShape::BottomHourglass => "BottomHourglass",
            BodyShape::TopHourglass => "TopHourglass",
            BodyShape::Spoon => "Spoon",
            BodyShape::Triangle => "Triangle",
            BodyShape::InvertedTriangle => "InvertedTriangle",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::Diamond => "Diamond",
            BodyShape::Oval => "Oval",
        }
    }

    fn rule(&self) -> Rule {
        Rule::Manual
    }

    fn info(&self) -> VariantInfo {
        match self {
            BodyShape::Hourglass => VariantInfo {
                name: "Figure: Hourglass",
                description: "Hourglass:\nHips and bust are nearly equal in size with a well-defined waist that is narrower than both.\n\nLegs and upper body are probably proportionate.\n\nShoulders may be slightly rounded, and the buttocks most likely rounded.",
                aliases: &[],
                image: Some("https://user-images.githubusercontent.com/14135675/225106804-d573bba1-7ca2-4c55-b1e1-d858c03040be.jpg"),
            },
            BodyShape::BottomHourglass => VariantInfo {
                name: "Figure: Bottom Hourglass",
                description: "Bottom hourglass:\nThe general hourglass shape, but hip measurements are slightly larger than bust.",
                aliases: &[],
                image: Some("https://user-images.githubusercontent.com/14135675/225106797-c818b1ab-d82d-4130-8184-b661c9fd7b44.jpg"),
            },
            BodyShape::TopHourglass => VariantInfo {
                name: "Figure: Top Hourglass",
                description: "Top hourglass:\nThe general hourglass shape, but bust measurements are slightly larger than hips.",
                aliases: &[],
                image: Some("https://user-images.githubusercontent.com/14135675/225106819-6462ac6a-8ca7-41ac-9cd5-467c9c80e7f1.jpg"),
            },
            BodyShape::Spoon => VariantInfo {
                name: "Figure: Spoon",
                description: "Spoon:\nSimilar to the Triangle or \u{201c}Pear\u{201d} shape.\n\nHips are larger than bust or the rest of the body and may have a \u{201c}shelf\u{201d}-like appearance.\n\nLikely has a defined waist. May also carry some weight in upper arms and upper thighs.",
                aliases: &[],
                image: Some("https://user-images.githubusercontent.com/14135675/225106816-574eee46-d14c-4869-9137-6477bdedd2d5.jpg"),
            },
            BodyShape::Triangle => VariantInfo {
                name: "Figure: Triangle",
                description: "Triangle / \u{201c}Pear\u{201d}:\nShoulders and bust are narrower than hips.\n\nLikely to have slim arms and a fairly defined waist that slopes out to the hips.",
                aliases: &["Figure: Pear"],
                image: Some("https://user-images.githubusercontent.com/14135675/225106820-6b8d71a7-3ba1-4aec-a763-a4e52e71363b.jpg"),
            },
            BodyShape::InvertedTriangle => VariantInfo {
                name: "Figure: Inverted Triangle",
                description: "Inverted triangle / \u{201c}Apple\u{201d}:\nShoulders and bust are larger than relatively narrow hips.",
                aliases: &["Figure: Apple"],
                image: Some("https://user-images.githubusercontent.com/14135675/225106808-38ff54fa-a8cd-4f2e-b9b7-ae8ec6371357.jpg"),
            },
            BodyShape::Rectangle => VariantInfo {
                name: "Figure: Rectangle",
                description: "Rectangle / Straight / \u{201c}Banana\u{201d}:\nWaist measurements are about the same as hip or bust, and shoulders and hips are about the same width.",
                aliases: &["Figure: Banana"],
                image: Some("https://user-images.githubusercontent.com/14135675/225106815-a4afdeda-835a-4888-b581-f382c18f3487.jpg"),
            },
            BodyShape::Diamond => VariantInfo {
                name: "Figure: Diamond",
                description: "Diamond:\nBroader hips than shoulders, a narrow bust, and a fuller waistline.\n\nMay carry a little more weight in upper legs and have slender arms.",
                aliases: &[],
                image: Some("https://user-images.githubusercontent.com/14135675/225106802-8cb88df8-7804-4f1f-a65c-c6e86a64698d.jpg"),
            },
            BodyShape::Oval => VariantInfo {
                name: "Figure: Oval",
                description: "Round / Oval:\nBust is larger than the rest of the body, hips are narrow, and the waist is fuller.",
                aliases: &["Figure: Round"],
                image: Some("https://user-images.githubusercontent.com/14135675/225106814-e80f5cfe-c467-4b91-bd27-d9360dbb0894.jpg"),
            },
        }
    }

    fn label(self) -> Label {
        Label::BodyShape(self)
    }
}
