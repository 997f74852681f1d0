//! End-to-end behaviour through the facade.

use std::thread;

use approx::assert_abs_diff_eq;
use natal_rs::*;

fn inputs() -> Vec<BirthInput> {
    vec![
        BirthInput::new(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0),
        BirthInput::new(1990, 7, 4, 8, 5, 7.0, 21.0285, 105.8542),
        BirthInput::new(1969, 7, 20, 20, 17, -4.0, 28.5729, -80.649),
        BirthInput::new(2024, 2, 29, 18, 30, 5.5, 28.6139, 77.209),
        BirthInput::new(1912, 6, 23, 7, 0, 0.0, 51.5074, -0.1278),
        BirthInput::new(2050, 10, 10, 3, 45, 10.0, -37.8136, 144.9631),
    ]
}

#[test]
fn j2000_reference() {
    let r = read_chart(&BirthInput::new(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0)).unwrap();
    assert_abs_diff_eq!(r.chart.julian_day, 2_451_545.0, epsilon = 1e-2);
    assert_eq!(get_zodiac_sign(r.chart.planet(Body::Sun).unwrap().longitude), ZodiacSign::Capricorn);
    assert_eq!(r.disclaimer, disclaimer(Locale::English));
}

#[test]
fn readings_are_reproducible() {
    for input in inputs() {
        let a = read_chart(&input).unwrap();
        let b = read_chart(&input).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn parallel_matches_sequential() {
    let inputs = inputs();
    let sequential: Vec<Reading> = inputs.iter().map(|i| read_chart(i).unwrap()).collect();
    let parallel: Vec<Reading> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|i| s.spawn(move || read_chart(i).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}

#[test]
fn reading_json_shape() {
    let r = read_chart(&inputs()[1]).unwrap();
    let v: serde_json::Value = serde_json::to_value(&r).unwrap();
    assert_eq!(v["chart"]["houses"].as_array().unwrap().len(), 12);
    assert_eq!(v["chart"]["planets"].as_array().unwrap().len(), 10);
    assert_eq!(v["chart"]["planets"][0]["body"], "sun");
    assert!(v["analysis"]["personality"]["dominant"]["score"].is_u64());
    assert!(v["analysis"]["career"]["fields"].as_array().unwrap().len() <= 5);
    assert_eq!(v["analysis"]["locale"], "en");
    assert!(v["disclaimer"].as_str().unwrap().contains("reference only"));
}

#[test]
fn vietnamese_reading() {
    let r = read_chart_with(
        &inputs()[1],
        &ChartConfig::default(),
        &AnalysisOptions {
            locale: Locale::Vietnamese,
        },
    )
    .unwrap();
    assert_eq!(r.disclaimer, disclaimer(Locale::Vietnamese));
    assert!(r.analysis.personality.summary.starts_with("Bản đồ sao"));
    let english = read_chart(&inputs()[1]).unwrap();
    assert_eq!(r.chart, english.chart);
    assert_eq!(r.analysis.career.fields, english.analysis.career.fields);
}

#[test]
fn restricted_body_list() {
    let config = ChartConfig::with_bodies([Body::Sun, Body::Moon, Body::Sun]);
    let r = read_chart_with(&inputs()[0], &config, &AnalysisOptions::default()).unwrap();
    let bodies: Vec<Body> = r.chart.planets.iter().map(|p| p.body).collect();
    assert_eq!(bodies, vec![Body::Sun, Body::Moon]);
    // ASC 2 + Sun 3 + Moon 2
    assert_eq!(r.analysis.personality.element_scores.total(), 7);
}

#[test]
fn errors_name_their_cause() {
    let polar = BirthInput::new(2000, 6, 21, 12, 0, 0.0, 80.0, 0.0);
    assert!(matches!(
        read_chart(&polar),
        Err(ChartError::HouseSystem(HouseSystemError::BeyondPolarCircle { .. }))
    ));

    let bad_month = BirthInput::new(2000, 13, 1, 12, 0, 0.0, 0.0, 0.0);
    match read_chart(&bad_month) {
        Err(ChartError::Validation(e)) => assert_eq!(e.field(), "month"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn zodiac_helpers() {
    assert_eq!(format_zodiac_position(29.9999), "29° Ari 59′");
    assert_eq!(format_zodiac_position(30.0), "0° Tau 00′");
    assert_eq!(get_zodiac_sign(30.0).abbr(), "Tau");
    assert_abs_diff_eq!(get_sign_degree(45.5), 15.5, epsilon = 1e-12);
}
