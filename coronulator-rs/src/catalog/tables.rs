use super::{Dimension, Opt};

///////////////////////////////////////////////////////////////////////////////
// Exposure: multiply the population infection rate
///////////////////////////////////////////////////////////////////////////////

pub static SOCIAL_CONTACT_OPTIONS: &[Opt] = &[
    Opt::new("Isolated", 0.1),
    Opt::new("Minimal", 0.3),
    Opt::new("Moderate", 0.6),
    Opt::new("Frequent", 1.0),
    Opt::new("Extensive", 1.5),
];

pub static HYGIENE_OPTIONS: &[Opt] = &[
    Opt::new("Meticulous", 0.6),
    Opt::new("Good", 0.8),
    Opt::new("Average", 1.0),
    Opt::new("Poor", 1.3),
];

pub static CLIMATE_OPTIONS: &[Opt] = &[
    Opt::new("Hot", 0.8),
    Opt::new("Temperate", 1.0),
    Opt::new("Cold", 1.2),
];

pub static POPULATION_IR_OPTIONS: &[Opt] = &[
    Opt::new("0.1%", 0.001),
    Opt::new("0.5%", 0.005),
    Opt::new("1%", 0.01),
    Opt::new("2%", 0.02),
    Opt::new("5%", 0.05),
    Opt::new("10%", 0.10),
    Opt::new("20%", 0.20),
    Opt::new("40%", 0.40),
    Opt::new("60%", 0.60),
    Opt::new("80%", 0.80),
];

///////////////////////////////////////////////////////////////////////////////
// Vulnerability: multiply the infection fatality ratio
///////////////////////////////////////////////////////////////////////////////

/// Age-specific IFR relative to the population average, in bins of 10 years.
pub static AGE_OPTIONS: &[Opt] = &[
    Opt::new("0-9", 0.0024),
    Opt::new("10-19", 0.010),
    Opt::new("20-29", 0.047),
    Opt::new("30-39", 0.13),
    Opt::new("40-49", 0.24),
    Opt::new("50-59", 0.90),
    Opt::new("60-69", 2.9),
    Opt::new("70-79", 6.5),
    Opt::new("80+", 12.0),
];

pub static PRECONDITION_OPTIONS: &[Opt] = &[
    Opt::new("None", 1.0),
    Opt::new("Mild", 1.5),
    Opt::new("Serious", 3.0),
    Opt::new("Multiple serious", 6.0),
];

pub static GENDER_OPTIONS: &[Opt] = &[
    Opt::new("Female", 0.8),
    Opt::new("Unspecified", 1.0),
    Opt::new("Male", 1.25),
];

pub static HEALTH_SERVICE_OPTIONS: &[Opt] = &[
    Opt::new("Excellent", 0.7),
    Opt::new("Good", 1.0),
    Opt::new("Strained", 1.5),
    Opt::new("Overwhelmed", 2.5),
];

pub static IFR_OPTIONS: &[Opt] = &[
    Opt::new("0.1%", 0.001),
    Opt::new("0.3%", 0.003),
    Opt::new("0.6%", 0.006),
    Opt::new("1%", 0.01),
    Opt::new("2%", 0.02),
    Opt::new("3.4%", 0.034),
];

/// Ordered list of options for the given dimension.
pub fn options_for(dim: Dimension) -> &'static [Opt] {
    match dim {
        Dimension::Age => AGE_OPTIONS,
        Dimension::Preconditions => PRECONDITION_OPTIONS,
        Dimension::SocialContact => SOCIAL_CONTACT_OPTIONS,
        Dimension::Hygiene => HYGIENE_OPTIONS,
        Dimension::Gender => GENDER_OPTIONS,
        Dimension::HealthServices => HEALTH_SERVICE_OPTIONS,
        Dimension::Climate => CLIMATE_OPTIONS,
        Dimension::PopulationIr => POPULATION_IR_OPTIONS,
        Dimension::Ifr => IFR_OPTIONS,
    }
}
