//! Geocentric ecliptic longitude of the Moon.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), ch. 47. Mean
//! arguments in full; of Table 47.A only the terms with a coefficient of at
//! least 0.002° are kept. Together with the three additive terms this gives
//! roughly 0.05° accuracy. Longitude is referred to the mean equinox of date
//! (nutation is not applied).

use natal_frames::normalize_deg;
use natal_time::julian_centuries;

/// One row of the longitude series: multipliers of D, M, M′, F and the
/// sine coefficient in 1e-6 degrees.
struct LongitudeTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> LongitudeTerm {
    LongitudeTerm { d, m, mp, f, coeff }
}

const LONGITUDE_TERMS: [LongitudeTerm; 34] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),
    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),
    term(0, 2, 0, 0, -2_069.0),
];

/// Ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, solar and lunar anomaly, argument of latitude.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity of Earth's orbit scales terms containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0;
    for row in &LONGITUDE_TERMS {
        let arg = row.d as f64 * d_r + row.m as f64 * m_r + row.mp as f64 * mp_r + row.f as f64 * f_r;
        let scale = match row.m.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum_l += row.coeff * scale * arg.sin();
    }

    // Venus, Jupiter and flattening of the Earth.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_deg(lp + sum_l / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12, 0h TD → λ = 133.162655° (full series)
        let lon = moon_longitude_deg(2_448_724.5);
        assert!((lon - 133.162_655).abs() < 0.05, "λ☽ = {lon}");
    }

    #[test]
    fn j2000() {
        let lon = moon_longitude_deg(2_451_545.0);
        assert!((lon - 223.32).abs() < 0.1, "λ☽ = {lon}");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let a = moon_longitude_deg(2_451_545.0);
        let b = moon_longitude_deg(2_451_546.0);
        let step = normalize_deg(b - a);
        assert!((11.5..15.5).contains(&step), "step = {step}");
    }

    #[test]
    fn always_in_range() {
        let mut jd = 2_415_386.0;
        while jd < 2_488_069.0 {
            let lon = moon_longitude_deg(jd);
            assert!((0.0..360.0).contains(&lon), "jd {jd}: {lon}");
            jd += 97.3;
        }
    }
}
