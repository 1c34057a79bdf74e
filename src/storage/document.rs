//! The templated document body written as `index.mdx` for each entry.
//!
//! The section skeleton is fixed; only the entry's title and owning
//! category are interpolated. Everything else is an explicit placeholder
//! for later clinical authoring, so the downstream renderer always sees
//! the same heading hierarchy.

/// Builds the MDX body for a condition page.
#[must_use]
pub fn body(title: &str, category: &str) -> String {
    format!(
        "# {title}

## Overview

{title} is classified under {category} in the DSM-5. This page provides comprehensive \
information about the diagnosis, clinical features, and management of this condition.

## Epidemiology

[Prevalence, incidence, and demographic information to be added based on current research and \
clinical guidelines.]

## Etiology & Risk Factors

### Biological Factors

[Information about genetic, neurobiological, and physiological factors to be added.]

### Psychological Factors

[Information about psychological and cognitive factors to be added.]

### Environmental Factors

[Information about environmental and social factors to be added.]

## Clinical Features

### Core Symptoms (DSM-5)

[Detailed DSM-5 diagnostic criteria to be added.]

### Additional Features

[Associated features and clinical presentations to be added.]

## Diagnosis

### DSM-5 Criteria

[Full DSM-5 diagnostic criteria to be added.]

### Assessment Tools

[Relevant screening tools and assessment instruments to be added.]

### Medical Workup

[Recommended medical investigations to be added.]

## Differential Diagnosis

### Medical Conditions

[Medical conditions to consider in differential diagnosis.]

### Psychiatric Conditions

[Psychiatric conditions to consider in differential diagnosis.]

## Management

### Non-pharmacological

#### Psychotherapy

[Evidence-based psychotherapy approaches to be added.]

#### Lifestyle Interventions

[Relevant lifestyle and behavioral interventions to be added.]

### Pharmacological

[Medication options and considerations to be added based on current clinical guidelines.]

## Prognosis

### Course

[Information about typical course and outcomes to be added.]

### Factors Affecting Prognosis

[Prognostic factors to be added.]

## Red Flags & When to Refer

### Immediate Referral (Emergency)

[Emergency situations requiring immediate referral.]

### Urgent Referral

[Situations requiring urgent psychiatric consultation.]

### Consider Referral

[Situations where specialist referral should be considered.]

## References

1. American Psychiatric Association. (2013). *Diagnostic and Statistical Manual of Mental \
Disorders* (5th ed.). Arlington, VA: American Psychiatric Publishing.

2. [Additional authoritative references to be added based on current research and clinical \
guidelines.]
"
    )
}
