// Onboarding form defaults for the resume and career-blueprint wizard steps.

pub mod handlers;
pub mod templates;
