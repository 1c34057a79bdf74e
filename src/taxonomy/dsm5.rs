//! The built-in DSM-5 condition table.
//!
//! Categories and entries follow DSM-5 chapter order. Each row is
//! `(slug, title, icd10)`; the ICD-10 column is a single code, a range,
//! or `Variable` where the code depends on the causative substance.

use super::{Category, Taxonomy};
use crate::domain::Entry;

#[rustfmt::skip]
const TABLE: &[(&str, &[(&str, &str, &str)])] = &[
    ("Neurodevelopmental Disorders", &[
        ("intellectual-disability", "Intellectual Disability (Intellectual Developmental Disorder)", "F70-F79"),
        ("global-developmental-delay", "Global Developmental Delay", "F88"),
        ("autism-spectrum-disorder", "Autism Spectrum Disorder", "F84.0"),
        ("adhd", "Attention-Deficit/Hyperactivity Disorder", "F90.0-F90.9"),
        ("specific-learning-disorder", "Specific Learning Disorder", "F81"),
        ("developmental-coordination-disorder", "Developmental Coordination Disorder", "F82"),
        ("stereotypic-movement-disorder", "Stereotypic Movement Disorder", "F98.4"),
        ("tourette-disorder", "Tourette's Disorder", "F95.2"),
        ("persistent-motor-vocal-tic-disorder", "Persistent (Chronic) Motor or Vocal Tic Disorder", "F95.1"),
        ("provisional-tic-disorder", "Provisional Tic Disorder", "F95.0"),
    ]),
    ("Schizophrenia Spectrum and Other Psychotic Disorders", &[
        ("schizotypal-personality-disorder", "Schizotypal Personality Disorder", "F21"),
        ("delusional-disorder", "Delusional Disorder", "F22"),
        ("brief-psychotic-disorder", "Brief Psychotic Disorder", "F23"),
        ("schizophreniform-disorder", "Schizophreniform Disorder", "F20.81"),
        ("schizophrenia", "Schizophrenia", "F20.9"),
        ("schizoaffective-disorder", "Schizoaffective Disorder", "F25"),
        ("substance-induced-psychotic-disorder", "Substance/Medication-Induced Psychotic Disorder", "Variable"),
        ("psychotic-disorder-due-to-medical-condition", "Psychotic Disorder Due to Another Medical Condition", "F06.2"),
        ("catatonia", "Catatonia", "F06.1"),
    ]),
    ("Bipolar and Related Disorders", &[
        ("bipolar-i-disorder", "Bipolar I Disorder", "F31"),
        ("bipolar-ii-disorder", "Bipolar II Disorder", "F31.81"),
        ("cyclothymic-disorder", "Cyclothymic Disorder", "F34.0"),
        ("substance-induced-bipolar-disorder", "Substance/Medication-Induced Bipolar and Related Disorder", "Variable"),
        ("bipolar-disorder-due-to-medical-condition", "Bipolar and Related Disorder Due to Another Medical Condition", "F06.3"),
    ]),
    ("Depressive Disorders", &[
        ("disruptive-mood-dysregulation-disorder", "Disruptive Mood Dysregulation Disorder", "F34.81"),
        ("major-depressive-disorder", "Major Depressive Disorder", "F32-F33"),
        ("persistent-depressive-disorder", "Persistent Depressive Disorder (Dysthymia)", "F34.1"),
        ("premenstrual-dysphoric-disorder", "Premenstrual Dysphoric Disorder", "N94.3"),
        ("substance-induced-depressive-disorder", "Substance/Medication-Induced Depressive Disorder", "Variable"),
        ("depressive-disorder-due-to-medical-condition", "Depressive Disorder Due to Another Medical Condition", "F06.3"),
    ]),
    ("Anxiety Disorders", &[
        ("separation-anxiety-disorder", "Separation Anxiety Disorder", "F93.0"),
        ("selective-mutism", "Selective Mutism", "F94.0"),
        ("specific-phobia", "Specific Phobia", "F40.2"),
        ("social-anxiety-disorder", "Social Anxiety Disorder (Social Phobia)", "F40.10"),
        ("panic-disorder", "Panic Disorder", "F41.0"),
        ("agoraphobia", "Agoraphobia", "F40.00"),
        ("generalized-anxiety-disorder", "Generalized Anxiety Disorder", "F41.1"),
        ("substance-induced-anxiety-disorder", "Substance/Medication-Induced Anxiety Disorder", "Variable"),
        ("anxiety-disorder-due-to-medical-condition", "Anxiety Disorder Due to Another Medical Condition", "F06.4"),
    ]),
    ("Obsessive-Compulsive and Related Disorders", &[
        ("obsessive-compulsive-disorder", "Obsessive-Compulsive Disorder", "F42.2"),
        ("body-dysmorphic-disorder", "Body Dysmorphic Disorder", "F45.22"),
        ("hoarding-disorder", "Hoarding Disorder", "F42.3"),
        ("trichotillomania", "Trichotillomania (Hair-Pulling Disorder)", "F63.3"),
        ("excoriation-disorder", "Excoriation (Skin-Picking) Disorder", "L98.1"),
        ("substance-induced-ocd", "Substance/Medication-Induced Obsessive-Compulsive and Related Disorder", "Variable"),
        ("ocd-due-to-medical-condition", "Obsessive-Compulsive and Related Disorder Due to Another Medical Condition", "F06.8"),
    ]),
    ("Trauma- and Stressor-Related Disorders", &[
        ("reactive-attachment-disorder", "Reactive Attachment Disorder", "F94.1"),
        ("disinhibited-social-engagement-disorder", "Disinhibited Social Engagement Disorder", "F94.2"),
        ("ptsd", "Posttraumatic Stress Disorder", "F43.10"),
        ("acute-stress-disorder", "Acute Stress Disorder", "F43.0"),
        ("adjustment-disorders", "Adjustment Disorders", "F43.2"),
    ]),
    ("Dissociative Disorders", &[
        ("dissociative-identity-disorder", "Dissociative Identity Disorder", "F44.81"),
        ("dissociative-amnesia", "Dissociative Amnesia", "F44.0"),
        ("depersonalization-derealization-disorder", "Depersonalization/Derealization Disorder", "F48.1"),
    ]),
    ("Somatic Symptom and Related Disorders", &[
        ("somatic-symptom-disorder", "Somatic Symptom Disorder", "F45.1"),
        ("illness-anxiety-disorder", "Illness Anxiety Disorder", "F45.21"),
        ("conversion-disorder", "Conversion Disorder (Functional Neurological Symptom Disorder)", "F44"),
        ("psychological-factors-affecting-medical-condition", "Psychological Factors Affecting Other Medical Conditions", "F54"),
        ("factitious-disorder", "Factitious Disorder", "F68.10"),
    ]),
    ("Feeding and Eating Disorders", &[
        ("pica", "Pica", "F98.3"),
        ("rumination-disorder", "Rumination Disorder", "F98.21"),
        ("avoidant-restrictive-food-intake-disorder", "Avoidant/Restrictive Food Intake Disorder", "F50.82"),
        ("anorexia-nervosa", "Anorexia Nervosa", "F50.0"),
        ("bulimia-nervosa", "Bulimia Nervosa", "F50.2"),
        ("binge-eating-disorder", "Binge-Eating Disorder", "F50.81"),
    ]),
    ("Elimination Disorders", &[
        ("enuresis", "Enuresis", "F98.0"),
        ("encopresis", "Encopresis", "F98.1"),
    ]),
    ("Sleep-Wake Disorders", &[
        ("insomnia-disorder", "Insomnia Disorder", "F51.01"),
        ("hypersomnolence-disorder", "Hypersomnolence Disorder", "F51.11"),
        ("narcolepsy", "Narcolepsy", "G47.4"),
        ("obstructive-sleep-apnea-hypopnea", "Obstructive Sleep Apnea Hypopnea", "G47.33"),
        ("central-sleep-apnea", "Central Sleep Apnea", "G47.31"),
        ("sleep-related-hypoventilation", "Sleep-Related Hypoventilation", "G47.3"),
        ("circadian-rhythm-sleep-wake-disorders", "Circadian Rhythm Sleep-Wake Disorders", "G47.2"),
        ("non-rapid-eye-movement-sleep-arousal-disorders", "Non-Rapid Eye Movement Sleep Arousal Disorders", "F51.3"),
        ("nightmare-disorder", "Nightmare Disorder", "F51.5"),
        ("rapid-eye-movement-sleep-behavior-disorder", "Rapid Eye Movement Sleep Behavior Disorder", "G47.52"),
        ("restless-legs-syndrome", "Restless Legs Syndrome", "G25.81"),
        ("substance-induced-sleep-disorder", "Substance/Medication-Induced Sleep Disorder", "Variable"),
    ]),
    ("Sexual Dysfunctions", &[
        ("delayed-ejaculation", "Delayed Ejaculation", "F52.32"),
        ("erectile-disorder", "Erectile Disorder", "F52.21"),
        ("female-orgasmic-disorder", "Female Orgasmic Disorder", "F52.31"),
        ("female-sexual-interest-arousal-disorder", "Female Sexual Interest/Arousal Disorder", "F52.22"),
        ("genito-pelvic-pain-penetration-disorder", "Genito-Pelvic Pain/Penetration Disorder", "F52.6"),
        ("male-hypoactive-sexual-desire-disorder", "Male Hypoactive Sexual Desire Disorder", "F52.0"),
        ("premature-ejaculation", "Premature (Early) Ejaculation", "F52.4"),
        ("substance-induced-sexual-dysfunction", "Substance/Medication-Induced Sexual Dysfunction", "Variable"),
    ]),
    ("Gender Dysphoria", &[
        ("gender-dysphoria-children", "Gender Dysphoria in Children", "F64.2"),
        ("gender-dysphoria-adolescents-adults", "Gender Dysphoria in Adolescents and Adults", "F64.0"),
    ]),
    ("Disruptive, Impulse-Control, and Conduct Disorders", &[
        ("oppositional-defiant-disorder", "Oppositional Defiant Disorder", "F91.3"),
        ("intermittent-explosive-disorder", "Intermittent Explosive Disorder", "F63.81"),
        ("conduct-disorder", "Conduct Disorder", "F91"),
        ("antisocial-personality-disorder", "Antisocial Personality Disorder", "F60.2"),
        ("pyromania", "Pyromania", "F63.1"),
        ("kleptomania", "Kleptomania", "F63.2"),
    ]),
    ("Substance-Related and Addictive Disorders", &[
        ("alcohol-use-disorder", "Alcohol Use Disorder", "F10.10-F10.20"),
        ("alcohol-intoxication", "Alcohol Intoxication", "F10.129"),
        ("alcohol-withdrawal", "Alcohol Withdrawal", "F10.239"),
        ("caffeine-intoxication", "Caffeine Intoxication", "F15.929"),
        ("caffeine-withdrawal", "Caffeine Withdrawal", "F15.93"),
        ("cannabis-use-disorder", "Cannabis Use Disorder", "F12.10-F12.20"),
        ("cannabis-intoxication", "Cannabis Intoxication", "F12.129"),
        ("cannabis-withdrawal", "Cannabis Withdrawal", "F12.288"),
        ("hallucinogen-use-disorder", "Hallucinogen Use Disorder", "F16.10-F16.20"),
        ("phencyclidine-use-disorder", "Phencyclidine Use Disorder", "F16.10-F16.20"),
        ("inhalant-use-disorder", "Inhalant Use Disorder", "F18.10-F18.20"),
        ("opioid-use-disorder", "Opioid Use Disorder", "F11.10-F11.20"),
        ("opioid-intoxication", "Opioid Intoxication", "F11.129"),
        ("opioid-withdrawal", "Opioid Withdrawal", "F11.23"),
        ("sedative-hypnotic-anxiolytic-use-disorder", "Sedative, Hypnotic, or Anxiolytic Use Disorder", "F13.10-F13.20"),
        ("sedative-hypnotic-anxiolytic-intoxication", "Sedative, Hypnotic, or Anxiolytic Intoxication", "F13.129"),
        ("sedative-hypnotic-anxiolytic-withdrawal", "Sedative, Hypnotic, or Anxiolytic Withdrawal", "F13.239"),
        ("stimulant-use-disorder", "Stimulant Use Disorder", "F15.10-F15.20"),
        ("stimulant-intoxication", "Stimulant Intoxication", "F15.129"),
        ("stimulant-withdrawal", "Stimulant Withdrawal", "F15.23"),
        ("tobacco-use-disorder", "Tobacco Use Disorder", "F17.200"),
        ("tobacco-withdrawal", "Tobacco Withdrawal", "F17.203"),
        ("gambling-disorder", "Gambling Disorder", "F63.0"),
    ]),
    ("Neurocognitive Disorders", &[
        ("delirium", "Delirium", "F05"),
        ("major-neurocognitive-disorder-alzheimers", "Major Neurocognitive Disorder Due to Alzheimer's Disease", "F02.80"),
        ("major-neurocognitive-disorder-frontotemporal", "Major Neurocognitive Disorder Due to Frontotemporal Lobar Degeneration", "F02.80"),
        ("major-neurocognitive-disorder-lewy-bodies", "Major Neurocognitive Disorder with Lewy Bodies", "F02.80"),
        ("major-neurocognitive-disorder-vascular", "Major Vascular Neurocognitive Disorder", "F01.50"),
        ("major-neurocognitive-disorder-traumatic-brain-injury", "Major Neurocognitive Disorder Due to Traumatic Brain Injury", "F02.80"),
        ("major-neurocognitive-disorder-substance", "Substance/Medication-Induced Major Neurocognitive Disorder", "Variable"),
        ("major-neurocognitive-disorder-hiv", "Major Neurocognitive Disorder Due to HIV Infection", "F02.80"),
        ("major-neurocognitive-disorder-prion", "Major Neurocognitive Disorder Due to Prion Disease", "F02.80"),
        ("major-neurocognitive-disorder-parkinsons", "Major Neurocognitive Disorder Due to Parkinson's Disease", "F02.80"),
        ("major-neurocognitive-disorder-huntingtons", "Major Neurocognitive Disorder Due to Huntington's Disease", "F02.80"),
        ("mild-neurocognitive-disorder", "Mild Neurocognitive Disorder", "F06.70"),
    ]),
    ("Personality Disorders", &[
        ("paranoid-personality-disorder", "Paranoid Personality Disorder", "F60.0"),
        ("schizoid-personality-disorder", "Schizoid Personality Disorder", "F60.1"),
        ("borderline-personality-disorder", "Borderline Personality Disorder", "F60.3"),
        ("histrionic-personality-disorder", "Histrionic Personality Disorder", "F60.4"),
        ("narcissistic-personality-disorder", "Narcissistic Personality Disorder", "F60.81"),
        ("avoidant-personality-disorder", "Avoidant Personality Disorder", "F60.6"),
        ("dependent-personality-disorder", "Dependent Personality Disorder", "F60.7"),
        ("obsessive-compulsive-personality-disorder", "Obsessive-Compulsive Personality Disorder", "F60.5"),
    ]),
    ("Paraphilic Disorders", &[
        ("voyeuristic-disorder", "Voyeuristic Disorder", "F65.3"),
        ("exhibitionistic-disorder", "Exhibitionistic Disorder", "F65.2"),
        ("frotteuristic-disorder", "Frotteuristic Disorder", "F65.81"),
        ("sexual-masochism-disorder", "Sexual Masochism Disorder", "F65.51"),
        ("sexual-sadism-disorder", "Sexual Sadism Disorder", "F65.52"),
        ("pedophilic-disorder", "Pedophilic Disorder", "F65.4"),
        ("fetishistic-disorder", "Fetishistic Disorder", "F65.0"),
        ("transvestic-disorder", "Transvestic Disorder", "F65.1"),
    ]),
    ("Other Mental Disorders", &[
        ("other-specified-mental-disorder", "Other Specified Mental Disorder", "F99"),
        ("unspecified-mental-disorder", "Unspecified Mental Disorder", "F99"),
    ]),
];

/// Returns the built-in DSM-5 taxonomy.
///
/// # Panics
///
/// Panics if the table contains an invalid slug; the table is validated
/// by tests, so this cannot happen at runtime.
#[must_use]
pub fn dsm5() -> Taxonomy {
    let categories = TABLE
        .iter()
        .map(|&(name, entries)| Category {
            name: name.to_string(),
            entries: entries
                .iter()
                .map(|&(slug, title, icd10)| Entry::new(slug, title, icd10))
                .collect(),
        })
        .collect();

    Taxonomy::new(categories)
}
