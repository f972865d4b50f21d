//! End-to-end flow: score raw postings, rank them for a requester, and
//! project the result into the response DTO.

use joborra_core::api::RecommendationDto;
use joborra_core::corpus::KeywordCorpus;
use joborra_core::ranking::rank_jobs;
use joborra_core::scoring::VisaScoringEngine;
use joborra_core::{JobPosting, RequesterProfile, WorkAuthorization};

fn posting(id: i64, title: &str, description: &str, skills: &str) -> JobPosting {
    JobPosting {
        id: Some(id),
        title: Some(title.into()),
        description: Some(description.into()),
        required_skills: Some(skills.into()),
        ..JobPosting::default()
    }
}

#[test]
fn student_visa_holder_sees_sponsoring_graduate_roles_first() {
    let engine = VisaScoringEngine::new(KeywordCorpus::with_default_rules());

    let sponsoring_grad = posting(
        1,
        "Graduate Software Engineer",
        "Graduate program with visa sponsorship for international candidates. \
         Training provided.",
        "python, sql",
    );
    let citizens_only = posting(
        2,
        "Software Engineer",
        "Australian citizens only. Security clearance required.",
        "python, sql",
    );
    let unrelated = posting(3, "Chef", "Busy kitchen, weekend work.", "");

    let profile = RequesterProfile {
        work_authorization: Some(WorkAuthorization::StudentVisa),
        skills: Some("Python, SQL".into()),
        ..RequesterProfile::default()
    };

    let scored: Vec<_> = [sponsoring_grad, citizens_only, unrelated]
        .into_iter()
        .map(|job| {
            let verdict = engine.score(&job);
            (job, verdict)
        })
        .collect();

    let ranked = rank_jobs(&profile, scored);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].job.id, Some(1));
    assert!(ranked[0].verdict.is_visa_friendly);
    assert!(ranked[0].verdict.is_student_friendly);

    // Both remaining jobs are non-sponsoring; the skill overlap decides.
    assert_eq!(ranked[1].job.id, Some(2));
    assert_eq!(ranked[2].job.id, Some(3));
    assert!(ranked[1].match_score > ranked[2].match_score);

    let dto = RecommendationDto::from(&ranked[0]);
    assert_eq!(dto.job_id, Some(1));
    assert_eq!(dto.match_score, ranked[0].match_score);
    assert!(dto.is_visa_friendly);
}

#[test]
fn rescoring_after_a_corpus_edit_changes_the_verdict() {
    let mut corpus = KeywordCorpus::with_default_rules();
    let job = posting(7, "Analyst", "485 visa holders welcome", "");

    let before = VisaScoringEngine::new(corpus.clone()).score(&job);
    assert!(!before.is_visa_friendly);

    corpus.add_rule(
        "485 visa",
        joborra_core::corpus::RuleCategory::Sponsorship,
        joborra_core::corpus::RulePolarity::Positive,
        2.5,
    );

    let after = VisaScoringEngine::new(corpus).score(&job);
    assert!(after.is_visa_friendly);
    assert_eq!(after.raw_score, 2.5);
}
