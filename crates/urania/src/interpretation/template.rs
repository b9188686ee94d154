//! Deterministic, template-based chart reading.

use crate::aspects::AspectKind;
use crate::chart::ChartSnapshot;
use crate::ephemeris::types::Body;
use crate::western::ZodiacSign;

/// Keywords for a sign's expression
pub fn sign_qualities(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "assertive, energetic, and pioneering",
        ZodiacSign::Taurus => "stable, practical, and sensual",
        ZodiacSign::Gemini => "versatile, curious, and communicative",
        ZodiacSign::Cancer => "nurturing, emotional, and protective",
        ZodiacSign::Leo => "creative, confident, and dramatic",
        ZodiacSign::Virgo => "analytical, practical, and detail-oriented",
        ZodiacSign::Libra => "harmonious, diplomatic, and relationship-oriented",
        ZodiacSign::Scorpio => "intense, transformative, and deep",
        ZodiacSign::Sagittarius => "adventurous, philosophical, and optimistic",
        ZodiacSign::Capricorn => "ambitious, disciplined, and responsible",
        ZodiacSign::Aquarius => "innovative, independent, and humanitarian",
        ZodiacSign::Pisces => "intuitive, compassionate, and artistic",
    }
}

/// One sentence describing an aspect between two bodies
pub fn aspect_sentence(kind: AspectKind, planet1: &str, planet2: &str) -> String {
    match kind {
        AspectKind::Conjunction => {
            format!("The energies of {} and {} blend and intensify each other", planet1, planet2)
        }
        AspectKind::Sextile => {
            format!("There is a harmonious flow of energy between {} and {}", planet1, planet2)
        }
        AspectKind::Square => format!(
            "There is dynamic tension between {} and {}, promoting growth through challenge",
            planet1, planet2
        ),
        AspectKind::Trine => {
            format!("There is a natural, flowing harmony between {} and {}", planet1, planet2)
        }
        AspectKind::Opposition => format!(
            "There is a dynamic polarity between {} and {}, calling for balance",
            planet1, planet2
        ),
    }
}

/// Sun, Moon and rising sign reading followed by one line per aspect
pub fn render_interpretation(chart: &ChartSnapshot) -> String {
    let mut out = String::new();

    match chart.sign_of(Body::Sun) {
        Some(sign) => {
            out.push_str(&format!(
                "Your Sun is in {}, indicating that your core personality and life force are expressed through {} qualities. ",
                sign,
                sign_qualities(sign)
            ));
        }
        None => log::warn!("Interpretation: Sun position missing from chart"),
    }

    match chart.sign_of(Body::Moon) {
        Some(sign) => {
            out.push_str(&format!(
                "Your Moon is in {}, suggesting that your emotional nature and inner self resonate with {} characteristics. ",
                sign,
                sign_qualities(sign)
            ));
        }
        None => log::warn!("Interpretation: Moon position missing from chart"),
    }

    let rising = chart.rising_sign();
    out.push_str(&format!(
        "With {} rising, you present yourself to the world with {} traits.",
        rising,
        sign_qualities(rising)
    ));

    if !chart.aspects.is_empty() {
        out.push_str("\n\nSignificant planetary aspects in your chart:\n");
        for aspect in &chart.aspects {
            out.push_str(&format!(
                "- {} {} {} (orb: {:.1}°): {}\n",
                aspect.planet1,
                aspect.aspect,
                aspect.planet2,
                aspect.orb,
                aspect_sentence(aspect.aspect, &aspect.planet1, &aspect.planet2)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_sentences_name_both_bodies() {
        for kind in AspectKind::ALL {
            let s = aspect_sentence(kind, "Venus", "Mars");
            assert!(s.contains("Venus") && s.contains("Mars"), "{s}");
        }
    }

    #[test]
    fn test_sign_qualities_distinct() {
        let mut seen = std::collections::HashSet::new();
        for sign in ZodiacSign::ALL {
            assert!(seen.insert(sign_qualities(sign)));
        }
    }
}
