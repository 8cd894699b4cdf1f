//! Bra cup letters
//!
//! Cup size approximates the difference between over-the-bust and band
//! measurements in inches, so the declaration index of each variant is its
//! bust-band difference. Letters that different sizing systems use for the
//! same difference share one variant (E and DD are both index 5).

use super::{Category, Label, Rule, VariantInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BreastCup {
    Aa,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
}

impl BreastCup {
    /// Letters accepted for this cup, the canonical letter first
    pub fn letters(&self) -> &'static [&'static str] {
        match self {
            BreastCup::Aa => &["AA"],
            BreastCup::A => &["A"],
            BreastCup::B => &["B"],
            BreastCup::C => &["C"],
            BreastCup::D => &["D"],
            BreastCup::E => &["E", "DD"],
            BreastCup::F => &["F", "DDD", "EE"],
            BreastCup::G => &["G", "DDDD"],
            BreastCup::H => &["H", "FF"],
            BreastCup::I => &["I"],
            BreastCup::J => &["J", "GG"],
            BreastCup::K => &["K"],
            BreastCup::L => &["L", "HH"],
            BreastCup::M => &["M"],
            BreastCup::N => &["N", "JJ"],
            BreastCup::O => &["O"],
            BreastCup::P => &["P", "KK"],
            BreastCup::Q => &["Q"],
            BreastCup::R => &["R", "LL"],
        }
    }

    /// Bust-band difference in inches
    pub fn bust_band_difference(&self) -> usize {
        self.order()
    }
}

impl Category for BreastCup {
    fn all() -> &'static [Self] {
        &[
            BreastCup::Aa,
            BreastCup::A,
            BreastCup::B,
            BreastCup::C,
            BreastCup::D,
            BreastCup::E,
            BreastCup::F,
            BreastCup::G,
            BreastCup::H,
            BreastCup::I,
            BreastCup::J,
            BreastCup::K,
            BreastCup::L,
            BreastCup::M,
            BreastCup::N,
            BreastCup::O,
            BreastCup::P,
            BreastCup::Q,
            BreastCup::R,
        ]
    }

    fn key(&self) -> &'static str {
        self.letters()[0]
    }

    fn rule(&self) -> Rule {
        Rule::one_of(self.letters())
    }

    fn info(&self) -> VariantInfo {
        match self {
            BreastCup::Aa => VariantInfo::named("Cup: AA"),
            BreastCup::A => VariantInfo::named("Cup: A"),
            BreastCup::B => VariantInfo::named("Cup: B"),
            BreastCup::C => VariantInfo::named("Cup: C"),
            BreastCup::D => VariantInfo::named("Cup: D"),
            BreastCup::E => VariantInfo {
                aliases: &["Cup: E", "Cup: DD"],
                ..VariantInfo::named("Cup: E/DD")
            },
            BreastCup::F => VariantInfo {
                aliases: &["Cup: F", "Cup: DDD", "Cup: EE"],
                ..VariantInfo::named("Cup: F/DDD/EE")
            },
            BreastCup::G => VariantInfo {
                aliases: &["Cup: G", "Cup: DDDD"],
                ..VariantInfo::named("Cup: G/DDDD")
            },
            BreastCup::H => VariantInfo {
                aliases: &["Cup: H", "Cup: FF"],
                ..VariantInfo::named("Cup: H/FF")
            },
            BreastCup::I => VariantInfo::named("Cup: I"),
            BreastCup::J => VariantInfo {
                aliases: &["Cup: J", "Cup: GG"],
                ..VariantInfo::named("Cup: J/GG")
            },
            BreastCup::K => VariantInfo::named("Cup: K"),
            BreastCup::L => VariantInfo {
                aliases: &["Cup: L", "Cup: HH"],
                ..VariantInfo::named("Cup: L/HH")
            },
            BreastCup::M => VariantInfo::named("Cup: M"),
            BreastCup::N => VariantInfo {
                aliases: &["Cup: N", "Cup: JJ"],
                ..VariantInfo::named("Cup: N/JJ")
            },
            BreastCup::O => VariantInfo::named("Cup: O"),
            BreastCup::P => VariantInfo {
                aliases: &["Cup: P", "Cup: KK"],
                ..VariantInfo::named("Cup: P/KK")
            },
            BreastCup::Q => VariantInfo::named("Cup: Q"),
            BreastCup::R => VariantInfo {
                aliases: &["Cup: R", "Cup: LL"],
                ..VariantInfo::named("Cup: R/LL")
            },
        }
    }

    fn label(self) -> Label {
        Label::BreastCup(self)
    }
}
