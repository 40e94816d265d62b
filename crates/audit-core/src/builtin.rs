//! Built-in dataset: the Executive Stress & Trauma Self-Audit

use crate::dataset::{Dataset, Intro, NextStep, ResultsCopy, ScoreBand, Section};
use crate::types::Severity;

fn section(title: &str, subtitle: &str, info: &str, questions: [&str; 5]) -> Section {
    Section {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        info: info.to_string(),
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }
}

fn band(min: u32, max: u32, level: &str, severity: Severity, text: &str) -> ScoreBand {
    ScoreBand {
        min,
        max,
        level: level.to_string(),
        text: text.to_string(),
        severity,
    }
}

/// Build the built-in dataset
pub fn dataset() -> Dataset {
    Dataset {
        intro: Intro {
            headline: "Executive Stress & Trauma Self-Audit".to_string(),
            description: "This confidential self-audit is designed for high-performing leaders. \
It measures how stress and trauma may be silently impacting your decision-making, leadership \
presence, and personal relationships.\n\n\
Backed by neuroscience and trauma research, this tool will highlight patterns that could be \
costing you clarity, health, intimacy, and sustainable success.\n\n\
👉 Answer honestly. Results are confidential and for your personal awareness only."
                .to_string(),
            footer: "Confidential — For Your Self-Reflection Only".to_string(),
        },
        sections: vec![
            section(
                "Section 1: Stress & Burnout Indicators",
                "Neuroscience & Physiology",
                "Chronic stress floods the brain with cortisol and disrupts prefrontal cortex \
functioning (Arnsten, 2009), impairing executive decision-making.",
                [
                    "I feel mentally exhausted even after a full night's rest.",
                    "I struggle to concentrate during meetings or strategy sessions.",
                    "I notice frequent headaches, muscle tension, or gastrointestinal discomfort.",
                    "I rely on caffeine, alcohol, or stimulants to keep going.",
                    "I often feel like I'm \"wired but tired.\"",
                ],
            ),
            section(
                "Section 2: Trauma & Emotional Regulation",
                "",
                "Trauma often leaves \"emotional imprints\" that trigger disproportionate stress \
responses (van der Kolk, The Body Keeps the Score, 2014).",
                [
                    "I overreact to criticism or conflict at work/home.",
                    "I often \"numb out\" or disconnect during stressful conversations.",
                    "I avoid certain situations because they feel too overwhelming.",
                    "Past failures or betrayals still influence my current decision-making.",
                    "My emotional reactions sometimes surprise even me.",
                ],
            ),
            section(
                "Section 3: Leadership Under Pressure",
                "",
                "Leaders with unresolved trauma show increased impulsivity and lower empathy \
(Shields et al., 2016).",
                [
                    "I make reactive decisions under pressure rather than strategic ones.",
                    "I notice tension or fear among my team during stressful projects.",
                    "I struggle to delegate because I don't trust others fully.",
                    "I keep pushing through stress instead of pausing to reset.",
                    "My leadership sometimes feels performative rather than authentic.",
                ],
            ),
            section(
                "Section 4: Boardroom vs. Bedroom Disconnect",
                "",
                "Research shows occupational stress strongly correlates with marital \
dissatisfaction and intimacy breakdown (Karney & Bradbury, 1995).",
                [
                    "My partner/spouse has expressed feeling emotionally distant from me.",
                    "Work stress frequently spills into my home life.",
                    "I avoid intimacy or vulnerable conversations because I feel drained.",
                    "Success at work feels hollow if my relationship is strained.",
                    "I sometimes feel like I'm living two separate lives: public success, private struggle.",
                ],
            ),
            section(
                "Section 5: Meaning, Identity & Resilience",
                "",
                "Trauma disrupts meaning-making; resilience requires integration of identity \
(Southwick & Charney, Resilience: The Science of Mastering Life's Greatest Challenges, 2018).",
                [
                    "I question whether my success truly aligns with my deeper purpose.",
                    "I feel disconnected from who I really am outside of my role.",
                    "I sometimes fear that if I stop performing, I will lose my value.",
                    "I rarely pause to reflect on my spiritual, emotional, or relational needs.",
                    "Despite outward success, I feel something essential is missing.",
                ],
            ),
        ],
        results: ResultsCopy {
            bands: vec![
                band(
                    0,
                    25,
                    "Low Impact",
                    Severity::Low,
                    "Stress/trauma not currently impairing leadership or relationships. \
Preventive coaching still valuable.",
                ),
                band(
                    26,
                    50,
                    "Moderate Impact",
                    Severity::Moderate,
                    "Noticeable effects on performance and intimacy; intervention recommended.",
                ),
                band(
                    51,
                    75,
                    "High Impact",
                    Severity::High,
                    "Stress/trauma significantly undermining executive functioning and relational \
health; urgent support required.",
                ),
                band(
                    76,
                    125,
                    "Critical Impact",
                    Severity::Critical,
                    "Severe dysregulation; high risk of burnout, relational breakdown, or \
executive collapse.",
                ),
            ],
            next_step: NextStep {
                title: "Next Step for Executives".to_string(),
                description: "This audit is not a clinical diagnosis but a mirror. If your score \
suggests moderate to high impact, trauma-informed executive coaching can help you:"
                    .to_string(),
                points: vec![
                    "Restore clarity and decision-making power.".to_string(),
                    "Reconnect with your partner and family.".to_string(),
                    "Lead with authentic presence instead of hidden exhaustion.".to_string(),
                    "Build resilience strategies rooted in neuroscience and evidence-based practice."
                        .to_string(),
                ],
                call_to_action: "👉 Executives: DM me \"AUDIT\" to schedule a confidential \
Executive Diagnostic Call where we'll unpack your results and create a tailored action plan."
                    .to_string(),
            },
        },
    }
}
