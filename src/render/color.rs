//! Color tables for the choropleth legends.

use plotters::style::RGBColor;

use crate::classify::IncreaseSign;
use crate::types::Party;

/// Fill for regions with no data for the rendered statistic.
pub(crate) const MISSING: RGBColor = RGBColor(211, 211, 211);

/// Fixed party colors, matching the published maps.
pub(crate) fn party_color(party: Party) -> RGBColor {
    match party {
        Party::Ko => RGBColor(0, 0, 255),
        Party::Pis => RGBColor(255, 0, 0),
        Party::Konfederacja => RGBColor(128, 0, 128),
        Party::NowaLewica => RGBColor(255, 105, 180),
        Party::TrzeciaDroga => RGBColor(0, 128, 0),
    }
}

pub(crate) fn sign_color(sign: IncreaseSign) -> RGBColor {
    match sign {
        IncreaseSign::Positive => RGBColor(0, 0, 255),
        IncreaseSign::Negative => RGBColor(0, 128, 0),
        IncreaseSign::Zero => RGBColor(128, 128, 128),
        IncreaseSign::Missing => MISSING,
    }
}

/// Diverging cool-warm ramp for bucket `index` out of `n` ordered buckets:
/// deep blue through near-white to deep red.
pub(crate) fn diverging_color(index: usize, n: usize) -> RGBColor {
    const LOW: (u8, u8, u8) = (59, 76, 192);
    const MID: (u8, u8, u8) = (221, 221, 221);
    const HIGH: (u8, u8, u8) = (180, 4, 38);

    let lerp = |a: (u8, u8, u8), b: (u8, u8, u8), t: f64| -> RGBColor {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round().clamp(0.0, 255.0) as u8;
        RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    };

    if n <= 1 {
        return lerp(MID, MID, 0.0);
    }
    let t = index as f64 / (n - 1) as f64;
    if t < 0.5 {
        lerp(LOW, MID, t * 2.0)
    } else {
        lerp(MID, HIGH, (t - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_are_blue_and_red() {
        let lo = diverging_color(0, 12);
        let hi = diverging_color(11, 12);
        assert!(lo.2 > lo.0, "low end should lean blue: {:?}", lo);
        assert!(hi.0 > hi.2, "high end should lean red: {:?}", hi);
    }

    #[test]
    fn ramp_is_defined_for_degenerate_scales() {
        let mid = diverging_color(0, 1);
        assert_eq!((mid.0, mid.1, mid.2), (221, 221, 221));
    }
}
