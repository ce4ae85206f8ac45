// Unit tests for College Chancer

use college_chancer::core::{evaluate, explain, extracurricular_score, Chancer};
use college_chancer::models::{
    CollegeCriteria, ExtracurricularRecord, Extracurriculars, ScoreRange, StudentProfile, Verdict,
};
use college_chancer::services::StaticCriteria;

fn criteria(gpa: (f64, f64), sat: (u32, u32), act: (u32, u32), requires: bool) -> CollegeCriteria {
    CollegeCriteria {
        gpa: ScoreRange::new(gpa.0, gpa.1),
        sat: ScoreRange::new(sat.0, sat.1),
        act: ScoreRange::new(act.0, act.1),
        requires_extracurriculars: requires,
        min_extracurricular_score: 0,
    }
}

fn flagged(gpa: f64, sat: u32, act: u32, strong: bool) -> StudentProfile {
    StudentProfile {
        gpa,
        sat,
        act,
        extracurriculars: Extracurriculars::Strong(strong),
    }
}

fn builtin(name: &str) -> CollegeCriteria {
    *StaticCriteria::builtin().get(name).unwrap()
}

#[test]
fn test_harvard_favorable() {
    let profile = flagged(3.95, 1500, 34, true);
    assert_eq!(evaluate(&profile, &builtin("Harvard University")), Verdict::Favorable);
}

#[test]
fn test_mit_reach_on_gpa() {
    let profile = flagged(3.5, 1200, 25, true);
    let check = explain(&profile, &builtin("MIT"));

    assert!(!check.gpa);
    assert_eq!(check.verdict(), Verdict::Reach);
}

#[test]
fn test_stanford_act_compensates_for_sat() {
    let profile = flagged(3.95, 1300, 35, true);
    let check = explain(&profile, &builtin("Stanford University"));

    assert!(!check.sat);
    assert!(check.act);
    assert_eq!(check.verdict(), Verdict::Favorable);
}

#[test]
fn test_sat_compensates_for_act() {
    let college = criteria((3.0, 4.0), (1200, 1400), (28, 32), false);
    let profile = flagged(3.5, 1300, 20, false);

    assert_eq!(evaluate(&profile, &college), Verdict::Favorable);
}

#[test]
fn test_every_boundary_inclusive() {
    let college = criteria((3.2, 3.8), (1100, 1300), (24, 29), false);

    for gpa in [3.2, 3.8] {
        for sat in [1100, 1300] {
            assert_eq!(evaluate(&flagged(gpa, sat, 0, false), &college), Verdict::Favorable);
        }
        for act in [24, 29] {
            assert_eq!(evaluate(&flagged(gpa, 0, act, false), &college), Verdict::Favorable);
        }
    }

    assert_eq!(evaluate(&flagged(3.19, 1200, 26, false), &college), Verdict::Reach);
    assert_eq!(evaluate(&flagged(3.81, 1200, 26, false), &college), Verdict::Reach);
}

#[test]
fn test_extracurriculars_irrelevant_when_not_required() {
    let mut college = criteria((3.0, 4.0), (1000, 1600), (20, 36), false);
    college.min_extracurricular_score = 40;

    let variants = [
        Extracurriculars::Strong(true),
        Extracurriculars::Strong(false),
        Extracurriculars::Scored(0),
        Extracurriculars::Scored(100),
    ];
    for extracurriculars in variants {
        let profile = StudentProfile {
            gpa: 3.5,
            sat: 1300,
            act: 28,
            extracurriculars,
        };
        assert_eq!(evaluate(&profile, &college), Verdict::Favorable);
    }
}

#[test]
fn test_score_below_minimum_is_reach_despite_scores() {
    let record = ExtracurricularRecord {
        activities: 3,
        leadership_positions: 2,
        awards: 1,
    };
    assert_eq!(record.score(), 10);

    let mut college = criteria((3.0, 4.0), (1000, 1600), (20, 36), true);
    college.min_extracurricular_score = 12;

    let profile = StudentProfile {
        gpa: 4.0,
        sat: 1600,
        act: 36,
        extracurriculars: Extracurriculars::Scored(record.score()),
    };
    let check = explain(&profile, &college);

    assert!(check.gpa && check.test_scores());
    assert!(!check.extracurriculars);
    assert_eq!(check.verdict(), Verdict::Reach);
}

#[test]
fn test_evaluate_is_deterministic() {
    let college = builtin("Harvard University");
    let profile = flagged(3.92, 1450, 33, true);

    let first = evaluate(&profile, &college);
    for _ in 0..100 {
        assert_eq!(evaluate(&profile, &college), first);
    }
    assert_eq!(college, builtin("Harvard University"));
}

#[test]
fn test_score_formula() {
    assert_eq!(extracurricular_score(1, 1, 1), 6);
    assert_eq!(extracurricular_score(5, 0, 0), 5);
}

#[test]
fn test_fallback_record_values() {
    let fallback = *Chancer::default().fallback();

    assert_eq!(fallback.gpa, ScoreRange::new(3.0, 4.0));
    assert_eq!(fallback.sat, ScoreRange::new(1000, 1600));
    assert_eq!(fallback.act, ScoreRange::new(20, 36));
    assert!(!fallback.requires_extracurriculars);
    assert_eq!(fallback.min_extracurricular_score, 0);
}
