use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::thread;
use urania::interpretation::{build_prompt, render_interpretation, render_prompt_summary};
use urania::{Body, EngineSettings, GeoLocation, NatalEngine, ZodiacSign};

fn sample_chart() -> urania::ChartSnapshot {
    let dt = Utc.with_ymd_and_hms(1988, 11, 2, 6, 45, 30).unwrap();
    NatalEngine::default()
        .compute(dt, Some(GeoLocation::new(48.8566, 2.3522)))
        .unwrap()
}

#[test]
fn test_serialized_field_names() {
    let value: serde_json::Value = serde_json::from_str(&sample_chart().to_json().unwrap()).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "birthDateTime",
        "location",
        "julianDay",
        "planetPositions",
        "houses",
        "angles",
        "aspects",
        "planetSigns",
        "housesSigns",
        "elements",
        "modalities",
        "signs",
    ] {
        assert!(obj.contains_key(key), "missing {}", key);
    }
    assert_eq!(obj.len(), 12);
    assert_eq!(value["houses"].as_array().unwrap().len(), 12);
    assert!(value["angles"]["imumCoeli"].is_number());
    assert!(value["housesSigns"]["House12"].is_string());
    assert_eq!(value["signs"]["Libra"], "180-210");
    assert_eq!(value["elements"].as_object().unwrap().len(), 4);
    assert_eq!(value["modalities"].as_object().unwrap().len(), 3);
}

#[test]
fn test_aspect_serialization_shape() {
    let chart = sample_chart();
    let value = serde_json::to_value(&chart.aspects).unwrap();
    if let Some(first) = value.as_array().and_then(|a| a.first()) {
        for key in ["planet1", "planet2", "aspect", "angle", "orb", "exact"] {
            assert!(first.get(key).is_some(), "missing {}", key);
        }
    }
}

#[test]
fn test_identical_inputs_serialize_identically() {
    let a = sample_chart().to_json().unwrap();
    let b = sample_chart().to_json().unwrap();
    assert_eq!(a, b);
    assert_eq!(
        sample_chart().to_json_pretty().unwrap(),
        sample_chart().to_json_pretty().unwrap()
    );
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(NatalEngine::new(EngineSettings::default()));
    let dt = Utc.with_ymd_and_hms(2004, 2, 29, 23, 59, 59).unwrap();
    let loc = GeoLocation::new(-33.9249, 18.4241);
    let expected = engine.compute(dt, Some(loc)).unwrap().to_json().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.compute(dt, Some(loc)).unwrap().to_json().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_distributions_cover_every_body() {
    let chart = sample_chart();
    let in_elements: usize = chart.elements.values().map(Vec::len).sum();
    let in_modalities: usize = chart.modalities.values().map(Vec::len).sum();
    assert_eq!(in_elements, 10);
    assert_eq!(in_modalities, 10);
}

#[test]
fn test_planet_signs_match_longitudes() {
    let chart = sample_chart();
    for pos in &chart.planet_positions {
        let body: Body = pos.name.parse().unwrap();
        let label = &chart.planet_signs[&body];
        let sign = ZodiacSign::from_longitude(pos.longitude).to_string();
        if pos.retrograde {
            assert_eq!(label, &format!("{} (R)", sign));
        } else {
            assert_eq!(label, &sign);
        }
    }
}

#[test]
fn test_prompt_summary_sections() {
    let chart = sample_chart();
    let text = render_prompt_summary(&chart);
    assert!(text.contains("Planet Positions:\n"));
    assert!(text.contains("\nSun: "));
    assert!(text.contains("\nPluto: "));
    assert!(text.contains("\nAscendant: "));
    assert!(text.contains("\nIC: "));
    assert!(text.contains("\nDescendant: "));
    assert!(text.contains("\nMC: "));
    assert!(text.contains("\nHouse 12: "));
    assert!(text.contains("Aspects:\n"));

    let prompt = build_prompt(&chart, "  What about my career?  ");
    assert!(prompt.contains("Question: What about my career?\n"));
    assert!(prompt.contains(&text));
}

#[test]
fn test_interpretation_mentions_luminaries_and_rising() {
    let chart = sample_chart();
    let text = render_interpretation(&chart);
    let sun = chart.sign_of(Body::Sun).unwrap();
    let moon = chart.sign_of(Body::Moon).unwrap();
    assert!(text.starts_with(&format!("Your Sun is in {},", sun)));
    assert!(text.contains(&format!("Your Moon is in {},", moon)));
    assert!(text.contains(&format!("With {} rising", chart.rising_sign())));
    assert_eq!(
        text.matches("\n- ").count(),
        chart.aspects.len(),
        "one line per aspect"
    );
}

#[test]
fn test_stored_chart_reads_back_byte_identical() {
    let chart = sample_chart();
    let json = chart.to_json().unwrap();

    let parsed: urania::ChartSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, chart);
    assert_eq!(parsed.to_json().unwrap(), json);

    let pretty = chart.to_json_pretty().unwrap();
    let reparsed = urania::ChartSnapshot::from_json(&pretty).unwrap();
    assert_eq!(reparsed.to_json_pretty().unwrap(), pretty);
}

#[test]
fn test_prompt_from_stored_chart() {
    let chart = sample_chart();
    let stored = urania::ChartSnapshot::from_json(&chart.to_json().unwrap()).unwrap();
    let question = "What about my career?";
    assert_eq!(build_prompt(&stored, question), build_prompt(&chart, question));
    assert_eq!(render_interpretation(&stored), render_interpretation(&chart));
}

#[test]
fn test_prompt_summary_line_layout() {
    let chart = sample_chart();
    let text = render_prompt_summary(&chart);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Birth Date and Time: 1988-11-02 06:45:30 UTC")
    );
    assert_eq!(lines.next(), Some("Location: 48.8566, 2.3522"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("Planet Positions:"));
    assert!(text.ends_with('\n'));
    // two header lines, then a blank line and a title per section
    let aspect_lines = chart.aspects.len().max(1);
    assert_eq!(text.lines().count(), 2 + 3 + 3 + 10 + 12 + aspect_lines);
}
