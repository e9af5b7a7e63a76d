use unichoise_be::models::University;
use unichoise_be::scoring::{
    WEIGHT_AVERAGE_RATING, WEIGHT_DAYS_SINCE_LAST_APPLICATION, additive_criterion,
    attach_additive_criterion,
};

fn university(
    id: i32,
    average_rating: f64,
    total_applications: i64,
    applications_last_30_days: i64,
    days_since_last_application: Option<i32>,
) -> University {
    University {
        universities_id: id,
        name: format!("University {id}"),
        description: "A test university".to_string(),
        location: "Moscow".to_string(),
        representative_id: None,
        average_rating,
        total_applications,
        applications_last_30_days,
        days_since_last_application,
        additive_criterion: None,
    }
}

#[test]
fn score_stays_within_unit_interval() {
    let population = vec![
        university(1, 5.0, 250, 40, Some(0)),
        university(2, 0.0, 0, 0, None),
        university(3, 3.2, 17, 3, Some(120)),
        university(4, 4.8, 9000, 500, Some(1)),
    ];

    for uni in &population {
        let score = additive_criterion(uni, &population);
        assert!(
            (0.0..=1.0).contains(&score),
            "score {score} out of bounds for university {}",
            uni.universities_id
        );
    }
}

#[test]
fn empty_population_scores_zero() {
    let uni = university(1, 5.0, 100, 20, Some(2));
    assert_eq!(additive_criterion(&uni, &[]), 0.0);
}

#[test]
fn single_university_gets_neutral_normalization() {
    // With a population of one, every population-normalized feature
    // degenerates to 0.5; only the rating keeps its fixed 0-5 scale.
    let uni = university(1, 4.0, 42, 7, Some(10));
    let population = vec![uni.clone()];

    let expected = (4.0 / 5.0) * WEIGHT_AVERAGE_RATING + 0.5 * (1.0 - WEIGHT_AVERAGE_RATING);
    let score = additive_criterion(&uni, &population);
    assert!((score - expected).abs() < 1e-4, "got {score}, want {expected}");
}

#[test]
fn raising_rating_never_lowers_own_score() {
    let others = [
        university(2, 2.5, 30, 5, Some(14)),
        university(3, 4.1, 80, 12, Some(3)),
    ];

    let mut previous = f64::NEG_INFINITY;
    for tenths in 0..=50 {
        let rating = tenths as f64 / 10.0;
        let subject = university(1, rating, 50, 8, Some(7));
        let mut population = vec![subject.clone()];
        population.extend(others.iter().cloned());

        let score = additive_criterion(&subject, &population);
        assert!(
            score >= previous,
            "score dropped from {previous} to {score} at rating {rating}"
        );
        previous = score;
    }
}

#[test]
fn staler_applications_score_strictly_lower() {
    // Identical except for days since the last application: the fresher
    // one must win by exactly the freshness weight (norms 0 and 1).
    let fresh = university(1, 3.0, 50, 10, Some(2));
    let stale = university(2, 3.0, 50, 10, Some(60));
    let population = vec![fresh.clone(), stale.clone()];

    let fresh_score = additive_criterion(&fresh, &population);
    let stale_score = additive_criterion(&stale, &population);

    assert!(fresh_score > stale_score);
    assert!(
        (fresh_score - stale_score - WEIGHT_DAYS_SINCE_LAST_APPLICATION).abs() < 1e-9,
        "difference {} should equal the freshness weight",
        fresh_score - stale_score
    );
}

#[test]
fn rating_extremes_differ_by_rating_weight() {
    let best = university(1, 5.0, 50, 10, Some(5));
    let worst = university(2, 0.0, 50, 10, Some(5));
    let population = vec![best.clone(), worst.clone()];

    let best_score = additive_criterion(&best, &population);
    let worst_score = additive_criterion(&worst, &population);

    assert!(
        (best_score - worst_score - WEIGHT_AVERAGE_RATING).abs() < 1e-9,
        "difference {} should equal the rating weight",
        best_score - worst_score
    );
}

#[test]
fn missing_recency_signal_is_neutral() {
    let no_applications = university(1, 3.0, 0, 0, None);
    let population = vec![
        no_applications.clone(),
        university(2, 3.0, 10, 2, Some(1)),
        university(3, 3.0, 20, 4, Some(30)),
    ];

    // days term contributes exactly 0.5 * weight when there is no signal
    let score = additive_criterion(&no_applications, &population);
    let expected = (3.0 / 5.0) * WEIGHT_AVERAGE_RATING
        + 0.0 * 0.25 // lowest total_applications in the population
        + 0.0 * 0.25 // lowest applications_last_30_days
        + 0.5 * WEIGHT_DAYS_SINCE_LAST_APPLICATION;
    assert!((score - expected).abs() < 1e-4);
}

#[test]
fn attach_fills_every_page_entry() {
    let population = vec![
        university(1, 5.0, 100, 20, Some(1)),
        university(2, 2.0, 10, 1, Some(45)),
        university(3, 3.5, 60, 9, None),
    ];
    let mut page = population[..2].to_vec();

    attach_additive_criterion(&mut page, &population);

    for uni in &page {
        let score = uni.additive_criterion.expect("score must be attached");
        assert!((0.0..=1.0).contains(&score));
    }

    // the page is scored against the full population, so recomputing
    // against it directly must agree
    assert_eq!(
        page[0].additive_criterion,
        Some(additive_criterion(&population[0], &population))
    );
}
