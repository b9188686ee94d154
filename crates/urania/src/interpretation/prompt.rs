//! Flat text rendering of a chart, suitable as context for a text model.

use crate::chart::ChartSnapshot;
use crate::western::SignPlacement;

const PREAMBLE: &str = "You are an expert astrologer with deep knowledge of Western astrology. \
Analyze the following birth chart and provide detailed, insightful interpretations. \
Focus on the specific question asked while considering the overall chart dynamics.";

const CLOSING: &str = "Please provide a detailed interpretation of this chart, focusing on the specific question asked. \
Be specific about planetary positions, aspects, and house placements that are particularly significant.";

/// Traditional name for a one-based house number
pub fn house_name(house: usize) -> String {
    match house {
        1 => "Ascendant".to_string(),
        4 => "IC".to_string(),
        7 => "Descendant".to_string(),
        10 => "MC".to_string(),
        n => format!("House {}", n),
    }
}

/// Planet positions, houses and aspects as plain text
pub fn render_prompt_summary(chart: &ChartSnapshot) -> String {
    let mut out = format!(
        "Birth Date and Time: {}\nLocation: {:.4}, {:.4}\n",
        chart.birth_date_time.format("%Y-%m-%d %H:%M:%S UTC"),
        chart.location.lat,
        chart.location.lon
    );

    out.push_str("\nPlanet Positions:\n");
    for pos in &chart.planet_positions {
        let placement = SignPlacement::from_longitude(pos.longitude);
        out.push_str(&format!("{}: {}", pos.name, placement));
        if pos.retrograde {
            out.push_str(", retrograde");
        }
        out.push('\n');
    }

    out.push_str("\nHouses:\n");
    for (house, lon) in chart.houses.iter() {
        out.push_str(&format!(
            "{}: {}\n",
            house_name(house),
            SignPlacement::from_longitude(lon)
        ));
    }

    out.push_str("\nAspects:\n");
    if chart.aspects.is_empty() {
        out.push_str("None\n");
    }
    for aspect in &chart.aspects {
        out.push_str(&format!(
            "{} {} {}: orb {:.2}°\n",
            aspect.planet1, aspect.aspect, aspect.planet2, aspect.orb
        ));
    }
    out
}

/// Full prompt: instructions, chart summary and the user's question
pub fn build_prompt(chart: &ChartSnapshot, question: &str) -> String {
    format!(
        "{}\n\nHere is the birth chart data:\n\n{}\nQuestion: {}\n\n{}",
        PREAMBLE,
        render_prompt_summary(chart),
        question.trim(),
        CLOSING
    )
}
